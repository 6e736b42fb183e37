//! Browser page host.
//!
//! Implements the controller's [`Host`] seam on top of `web_sys` and wires the
//! trigger event listeners.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Event, HtmlElement, Window};

use crate::core::{
    Host, Interaction, Outcome, PreviewController, PreviewElement, PreviewError, TriggerBinding,
    TriggerElement,
};
use crate::utils::dom::{self, js_message};
use crate::utils::log;

// =============================================================================
// Elements
// =============================================================================

/// Trigger link on the page.
#[derive(Clone)]
pub struct DomTrigger(HtmlElement);

impl DomTrigger {
    #[inline]
    pub fn element(&self) -> &HtmlElement {
        &self.0
    }
}

impl TriggerElement for DomTrigger {
    fn id(&self) -> String {
        self.0.id()
    }

    fn toggle_class(&self, class: &str) -> Result<bool, PreviewError> {
        self.0
            .class_list()
            .toggle(class)
            .map_err(|e| PreviewError::ClassList(js_message(&e)))
    }
}

/// Preview element paired with a trigger.
#[derive(Clone)]
pub struct DomPreview(HtmlElement);

impl PreviewElement for DomPreview {
    fn inline_style(&self, property: &str) -> Option<String> {
        self.0
            .style()
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, property: &'static str, value: &str) -> Result<(), PreviewError> {
        self.0
            .style()
            .set_property(property, value)
            .map_err(|e| PreviewError::Style {
                property,
                message: js_message(&e),
            })
    }

    fn clear_style(&self, property: &'static str) -> Result<(), PreviewError> {
        self.0
            .style()
            .remove_property(property)
            .map(|_| ())
            .map_err(|e| PreviewError::Style {
                property,
                message: js_message(&e),
            })
    }
}

// =============================================================================
// Host
// =============================================================================

pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Host for the current page.
    pub fn current() -> Result<Self, PreviewError> {
        let window = dom::window().ok_or(PreviewError::NoDocument)?;
        let document = window.document().ok_or(PreviewError::NoDocument)?;
        Ok(Self::new(window, document))
    }

    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for DomHost {
    type Trigger = DomTrigger;
    type Preview = DomPreview;

    fn triggers(&self, class: &str) -> Vec<DomTrigger> {
        // Copy the live collection so later DOM changes can't shift indices
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|element| match element.dyn_into::<HtmlElement>() {
                Ok(html) => Some(DomTrigger(html)),
                Err(element) => {
                    log::warn(&format!(
                        "skipping non-HTML trigger <{}>",
                        element.tag_name().to_lowercase()
                    ));
                    None
                }
            })
            .collect()
    }

    fn find_preview(&self, id: &str) -> Option<DomPreview> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(DomPreview)
    }

    fn viewport_width(&self) -> Result<f64, PreviewError> {
        dom::viewport_width(&self.window, &self.document).ok_or(PreviewError::ViewportUnavailable)
    }
}

// =============================================================================
// Listeners
// =============================================================================

/// Bind every trigger currently on the page and return how many were bound.
pub fn attach(controller: PreviewController<DomHost>) -> usize {
    let controller = Rc::new(controller);
    let bindings = controller.bind();
    let count = bindings.len();

    if count == 0 {
        log::debug(&format!(
            "no .{} elements found",
            controller.config().trigger_class
        ));
        return 0;
    }

    for binding in bindings {
        let binding = Rc::new(binding);
        for interaction in Interaction::ALL {
            listen(&controller, &binding, interaction);
        }
    }

    log::debug(&format!("bound {} preview trigger(s)", count));
    count
}

/// Register one handler on one trigger.
///
/// The closure is leaked with `forget()`; listeners live as long as the page.
fn listen(
    controller: &Rc<PreviewController<DomHost>>,
    binding: &Rc<TriggerBinding<DomTrigger>>,
    interaction: Interaction,
) {
    let ctl = Rc::clone(controller);
    let target = Rc::clone(binding);

    let closure = Closure::wrap(Box::new(move |_event: Event| {
        match ctl.handle(interaction, &target) {
            Ok(Outcome::Rendered(state)) => log::debug(&format!(
                "{} #{} -> {:?}",
                interaction.event_type(),
                target.preview_id(),
                state
            )),
            Ok(Outcome::Skipped(_)) => {}
            Err(e) => log::warn(&format!(
                "{} on #{} failed: {}",
                interaction.event_type(),
                target.trigger().id(),
                e
            )),
        }
    }) as Box<dyn Fn(Event)>);

    if let Err(e) = binding
        .trigger()
        .element()
        .add_event_listener_with_callback(
            interaction.event_type(),
            closure.as_ref().unchecked_ref(),
        )
    {
        log::warn(&format!(
            "failed to listen for {} on #{}: {}",
            interaction.event_type(),
            binding.trigger().id(),
            js_message(&e)
        ));
    }

    closure.forget();
}
