//! Preview toggle controller.
//!
//! Drives the visual state of each preview from three interactions on its
//! trigger:
//!
//! - **click** toggles the trigger's active class, then (narrow viewports only)
//!   shows the preview inline or hides it
//! - **mouseover** (wide viewports only) floats the preview beside the trigger
//! - **mouseout** (wide viewports only) hides it again
//!
//! The controller is generic over a [`Host`] so the same logic runs against
//! the browser DOM and against an in-memory page in tests. Handlers only move
//! a binding between [`PreviewState`]s; [`PreviewState::render`] decides what
//! the element's styles become.

use std::cell::Cell;

use crate::config::PreviewConfig;
use crate::core::PreviewError;
use crate::models::{Breakpoint, PreviewState, ViewportMode};

// =============================================================================
// Host Seam
// =============================================================================

/// Element receiving user interaction.
pub trait TriggerElement {
    fn id(&self) -> String;

    /// Toggle `class` on the element, returning whether it is now present.
    fn toggle_class(&self, class: &str) -> Result<bool, PreviewError>;
}

/// Element whose visibility is driven by a trigger.
pub trait PreviewElement {
    /// Current inline value of `property`, `None` when unset.
    fn inline_style(&self, property: &str) -> Option<String>;

    fn set_style(&self, property: &'static str, value: &str) -> Result<(), PreviewError>;

    /// Remove the inline value so the stylesheet applies again.
    fn clear_style(&self, property: &'static str) -> Result<(), PreviewError>;
}

/// Page hosting triggers and previews.
pub trait Host {
    type Trigger: TriggerElement;
    type Preview: PreviewElement;

    /// Every element currently carrying `class`, in document order.
    fn triggers(&self, class: &str) -> Vec<Self::Trigger>;

    fn find_preview(&self, id: &str) -> Option<Self::Preview>;

    /// Viewport width in logical pixels, queried once per event.
    fn viewport_width(&self) -> Result<f64, PreviewError>;
}

// =============================================================================
// Bindings
// =============================================================================

/// Interaction events a trigger is subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Click,
    MouseOver,
    MouseOut,
}

impl Interaction {
    pub const ALL: [Interaction; 3] = [Self::Click, Self::MouseOver, Self::MouseOut];

    /// DOM event type.
    pub fn event_type(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseOver => "mouseover",
            Self::MouseOut => "mouseout",
        }
    }
}

/// Per-trigger context captured by that trigger's handlers.
pub struct TriggerBinding<T> {
    trigger: T,
    preview_id: String,
    /// Unknown until the preview is first found, then owned by the controller.
    state: Cell<Option<PreviewState>>,
}

impl<T: TriggerElement> TriggerBinding<T> {
    pub fn new(trigger: T, config: &PreviewConfig) -> Self {
        let preview_id = config.preview_id(&trigger.id());
        Self {
            trigger,
            preview_id,
            state: Cell::new(None),
        }
    }

    #[inline]
    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    #[inline]
    pub fn preview_id(&self) -> &str {
        &self.preview_id
    }

    /// Last rendered state, if any.
    #[inline]
    pub fn state(&self) -> Option<PreviewState> {
        self.state.get()
    }
}

/// Result of a handler that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Viewport guard did not match; the preview was left alone.
    Skipped(ViewportMode),
    /// Preview was rendered in this state.
    Rendered(PreviewState),
}

// =============================================================================
// Controller
// =============================================================================

pub struct PreviewController<H> {
    host: H,
    config: PreviewConfig,
    breakpoint: Breakpoint,
}

impl<H: Host> PreviewController<H> {
    pub fn new(host: H, config: PreviewConfig) -> Self {
        let breakpoint = Breakpoint::new(config.breakpoint_px);
        Self {
            host,
            config,
            breakpoint,
        }
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Snapshot the current triggers into bindings.
    ///
    /// Triggers added to the page afterwards are not picked up.
    pub fn bind(&self) -> Vec<TriggerBinding<H::Trigger>> {
        self.host
            .triggers(&self.config.trigger_class)
            .into_iter()
            .map(|trigger| TriggerBinding::new(trigger, &self.config))
            .collect()
    }

    /// Current interaction mode.
    pub fn mode(&self) -> Result<ViewportMode, PreviewError> {
        Ok(self.breakpoint.classify(self.host.viewport_width()?))
    }

    pub fn handle(
        &self,
        interaction: Interaction,
        binding: &TriggerBinding<H::Trigger>,
    ) -> Result<Outcome, PreviewError> {
        match interaction {
            Interaction::Click => self.on_click(binding),
            Interaction::MouseOver => self.on_mouse_over(binding),
            Interaction::MouseOut => self.on_mouse_out(binding),
        }
    }

    /// Toggle the active class, then toggle the preview inline on narrow
    /// viewports.
    ///
    /// The class toggle happens regardless of the viewport and of whether the
    /// preview exists. Its own failure is reported only after the preview has
    /// been handled.
    pub fn on_click(
        &self,
        binding: &TriggerBinding<H::Trigger>,
    ) -> Result<Outcome, PreviewError> {
        let marked = binding.trigger.toggle_class(&self.config.active_class);

        let outcome = match self.mode()? {
            ViewportMode::Narrow => {
                Outcome::Rendered(self.transition(binding, PreviewState::toggled)?)
            }
            mode => Outcome::Skipped(mode),
        };

        marked.map(|_| outcome)
    }

    /// Float the preview beside the trigger on wide viewports.
    pub fn on_mouse_over(
        &self,
        binding: &TriggerBinding<H::Trigger>,
    ) -> Result<Outcome, PreviewError> {
        match self.mode()? {
            ViewportMode::Wide => Ok(Outcome::Rendered(
                self.transition(binding, |_| PreviewState::ShownFloating)?,
            )),
            mode => Ok(Outcome::Skipped(mode)),
        }
    }

    /// Hide the preview on wide viewports.
    pub fn on_mouse_out(
        &self,
        binding: &TriggerBinding<H::Trigger>,
    ) -> Result<Outcome, PreviewError> {
        match self.mode()? {
            ViewportMode::Wide => Ok(Outcome::Rendered(
                self.transition(binding, |_| PreviewState::Hidden)?,
            )),
            mode => Ok(Outcome::Skipped(mode)),
        }
    }

    fn transition(
        &self,
        binding: &TriggerBinding<H::Trigger>,
        next: impl FnOnce(PreviewState) -> PreviewState,
    ) -> Result<PreviewState, PreviewError> {
        let preview = self
            .host
            .find_preview(&binding.preview_id)
            .ok_or_else(|| PreviewError::MissingPreview {
                id: binding.preview_id.clone(),
            })?;

        let current = binding.state.get().unwrap_or_else(|| {
            PreviewState::from_inline_style(
                preview.inline_style("display").as_deref(),
                preview.inline_style("position").as_deref(),
            )
        });
        let state = next(current);

        render(&preview, state)?;
        binding.state.set(Some(state));
        Ok(state)
    }
}

/// Write every managed property of `state` onto `preview`.
pub fn render<P: PreviewElement>(preview: &P, state: PreviewState) -> Result<(), PreviewError> {
    for (property, value) in state.render() {
        match value {
            Some(value) => preview.set_style(property.css_name(), value)?,
            None => preview.clear_style(property.css_name())?,
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory page used by the controller tests.

    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    pub struct FakeTrigger {
        pub id: String,
        pub classes: Rc<RefCell<Vec<String>>>,
    }

    impl FakeTrigger {
        pub fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }
    }

    impl TriggerElement for FakeTrigger {
        fn id(&self) -> String {
            self.id.clone()
        }

        fn toggle_class(&self, class: &str) -> Result<bool, PreviewError> {
            let mut classes = self.classes.borrow_mut();
            if let Some(pos) = classes.iter().position(|c| c == class) {
                classes.remove(pos);
                Ok(false)
            } else {
                classes.push(class.to_string());
                Ok(true)
            }
        }
    }

    #[derive(Clone, Default)]
    pub struct FakePreview {
        pub styles: Rc<RefCell<HashMap<String, String>>>,
    }

    impl FakePreview {
        pub fn style(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }
    }

    impl PreviewElement for FakePreview {
        fn inline_style(&self, property: &str) -> Option<String> {
            self.style(property)
        }

        fn set_style(&self, property: &'static str, value: &str) -> Result<(), PreviewError> {
            self.styles
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
            Ok(())
        }

        fn clear_style(&self, property: &'static str) -> Result<(), PreviewError> {
            self.styles.borrow_mut().remove(property);
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct FakePage {
        pub width: Cell<f64>,
        pub triggers: Vec<FakeTrigger>,
        pub previews: HashMap<String, FakePreview>,
    }

    impl FakePage {
        pub fn with_width(width: f64) -> Self {
            Self {
                width: Cell::new(width),
                ..Default::default()
            }
        }

        /// Add a trigger and, when `paired`, its preview.
        pub fn add(&mut self, id: &str, paired: bool) {
            self.triggers.push(FakeTrigger {
                id: id.to_string(),
                ..Default::default()
            });
            if paired {
                self.previews
                    .insert(format!("{}-gif", id), FakePreview::default());
            }
        }

        pub fn preview(&self, trigger_id: &str) -> FakePreview {
            self.previews[&format!("{}-gif", trigger_id)].clone()
        }
    }

    impl Host for FakePage {
        type Trigger = FakeTrigger;
        type Preview = FakePreview;

        fn triggers(&self, _class: &str) -> Vec<FakeTrigger> {
            self.triggers.clone()
        }

        fn find_preview(&self, id: &str) -> Option<FakePreview> {
            self.previews.get(id).cloned()
        }

        fn viewport_width(&self) -> Result<f64, PreviewError> {
            Ok(self.width.get())
        }
    }
}
