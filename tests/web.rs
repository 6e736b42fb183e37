//! Browser tests for the DOM host.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use gif_preview::config::PreviewConfig;
use gif_preview::core::{Host, Outcome, PreviewController, PreviewError};
use gif_preview::models::PreviewState;
use gif_preview::page::{self, DomHost};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

/// Real page, pinned viewport width.
struct PinnedWidth {
    page: DomHost,
    width: f64,
}

impl Host for PinnedWidth {
    type Trigger = <DomHost as Host>::Trigger;
    type Preview = <DomHost as Host>::Preview;

    fn triggers(&self, class: &str) -> Vec<Self::Trigger> {
        self.page.triggers(class)
    }

    fn find_preview(&self, id: &str) -> Option<Self::Preview> {
        self.page.find_preview(id)
    }

    fn viewport_width(&self) -> Result<f64, PreviewError> {
        Ok(self.width)
    }
}

fn element(tag: &str, id: &str, class: Option<&str>) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    el.set_id(id);
    if let Some(class) = class {
        el.set_class_name(class);
    }
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn controller(class: &str, width: f64) -> PreviewController<PinnedWidth> {
    let config = PreviewConfig {
        trigger_class: class.to_string(),
        ..Default::default()
    };
    let host = PinnedWidth {
        page: DomHost::current().unwrap(),
        width,
    };
    PreviewController::new(host, config)
}

fn style(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap()
}

#[wasm_bindgen_test]
fn click_toggles_inline_preview() {
    let trigger = element("a", "click-1", Some("click-link"));
    let preview = element("div", "click-1-gif", None);
    let ctl = controller("click-link", 800.0);
    let bindings = ctl.bind();
    assert_eq!(bindings.len(), 1);

    let outcome = ctl.on_click(&bindings[0]).unwrap();
    assert_eq!(outcome, Outcome::Rendered(PreviewState::ShownInline));
    assert_eq!(style(&preview, "display"), "block");
    assert_eq!(style(&preview, "margin-top"), "10px");
    assert_eq!(style(&preview, "text-align"), "center");
    assert!(trigger.class_list().contains("active"));

    ctl.on_click(&bindings[0]).unwrap();
    assert_eq!(style(&preview, "display"), "none");
    assert_eq!(style(&preview, "margin-top"), "");
    assert_eq!(style(&preview, "position"), "");
    assert!(!trigger.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn hover_floats_preview() {
    element("a", "hover-1", Some("hover-link"));
    let preview = element("div", "hover-1-gif", None);
    let ctl = controller("hover-link", 1400.0);
    let bindings = ctl.bind();

    ctl.on_mouse_over(&bindings[0]).unwrap();
    assert_eq!(style(&preview, "display"), "block");
    assert_eq!(style(&preview, "position"), "absolute");
    assert_eq!(style(&preview, "right"), "110%");
    assert_eq!(style(&preview, "bottom"), "-2em");

    ctl.on_mouse_out(&bindings[0]).unwrap();
    assert_eq!(style(&preview, "display"), "none");
    assert_eq!(style(&preview, "right"), "");
}

#[wasm_bindgen_test]
fn missing_preview_is_reported() {
    let trigger = element("a", "lonely", Some("lonely-link"));
    let ctl = controller("lonely-link", 800.0);
    let bindings = ctl.bind();

    let err = ctl.on_click(&bindings[0]).unwrap_err();
    assert_eq!(
        err,
        PreviewError::MissingPreview {
            id: "lonely-gif".into()
        }
    );
    assert!(trigger.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn viewport_width_is_measured() {
    let host = DomHost::current().unwrap();
    assert!(host.viewport_width().unwrap() > 0.0);
}

#[wasm_bindgen_test]
fn attach_without_triggers_binds_nothing() {
    let config = PreviewConfig {
        trigger_class: "absent-link".into(),
        ..Default::default()
    };
    let ctl = PreviewController::new(DomHost::current().unwrap(), config);
    assert_eq!(page::attach(ctl), 0);
}

// Only test that goes through the exported entry points, which bind once per page
#[wasm_bindgen_test]
fn entry_points_validate_config_and_bind_once() {
    let unknown = js_sys::Object::new();
    js_sys::Reflect::set(&unknown, &"breakpoint".into(), &JsValue::from(900)).unwrap();
    assert!(gif_preview::bind_previews_with_config(unknown.into()).is_err());
    assert!(gif_preview::bind_previews_with_config_json(r#"{"previewSuffix": ""}"#).is_err());

    element("a", "entry-1", Some("gif-link"));
    element("div", "entry-1-gif", None);

    // The test document has finished loading, so binding is not deferred
    assert_eq!(
        gif_preview::bind_previews_with_config(JsValue::NULL).ok(),
        Some(1)
    );
    assert!(gif_preview::bind_previews().is_err());
}
