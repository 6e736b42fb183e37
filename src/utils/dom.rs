//! DOM and Web API utility functions.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Width of the layout viewport in logical pixels.
///
/// Reads `document.documentElement.clientWidth`, which excludes a vertical
/// scrollbar, and falls back to `window.innerWidth` when the root element is
/// missing or has not been laid out yet.
pub fn viewport_width(window: &Window, document: &Document) -> Option<f64> {
    document
        .document_element()
        .map(|root| f64::from(root.client_width()))
        .filter(|width| *width > 0.0)
        .or_else(|| window.inner_width().ok().and_then(|w| w.as_f64()))
}

/// Run `f` once the document has been parsed.
///
/// Runs immediately unless the document is still loading, in which case `f`
/// is deferred to `DOMContentLoaded`. Returns `Ok(None)` when deferred and
/// the error thrown by the browser when the listener could not be registered.
pub fn when_ready<T>(
    document: &Document,
    f: impl FnOnce() -> T + 'static,
) -> Result<Option<T>, JsValue> {
    if document.ready_state() != "loading" {
        return Ok(Some(f()));
    }

    let callback = Closure::once_into_js(move || {
        f();
    });
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    Ok(None)
}

/// Best-effort text of a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
