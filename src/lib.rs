//! Inline image previews for trigger links.
//!
//! On wide viewports hovering a `.gif-link` floats its `#<id>-gif` preview
//! beside it; on narrow viewports clicking the link toggles the preview inline.
//!
//! ```js
//! import init, { bindPreviews } from "./pkg/gif_preview.js";
//! await init();
//! bindPreviews();
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod page;
pub mod utils;

use std::cell::Cell;

use wasm_bindgen::prelude::*;

use crate::config::PreviewConfig;
use crate::core::{PreviewController, PreviewError};
use crate::page::DomHost;

thread_local! {
    static BOUND: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Bind previews with the default page conventions.
///
/// Returns the number of triggers bound, or 0 when binding was deferred until
/// the document finishes loading.
#[wasm_bindgen(js_name = bindPreviews)]
pub fn bind_previews() -> Result<u32, JsError> {
    bind_with(PreviewConfig::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Bind previews with overrides from a plain object, e.g.
/// `{ triggerClass: "preview-link", breakpointPx: 1024 }`.
///
/// `undefined` or `null` selects the defaults.
#[wasm_bindgen(js_name = bindPreviewsWithConfig)]
pub fn bind_previews_with_config(config: JsValue) -> Result<u32, JsError> {
    let config = if config.is_undefined() || config.is_null() {
        PreviewConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<PreviewConfig>(config)
            .map_err(|e| PreviewError::Config(e.to_string()))
            .and_then(PreviewConfig::validate)
            .map_err(|e| JsError::new(&e.to_string()))?
    };
    bind_with(config).map_err(|e| JsError::new(&e.to_string()))
}

/// Bind previews with overrides from JSON text, e.g.
/// `'{"previewSuffix": "-preview"}'`.
#[wasm_bindgen(js_name = bindPreviewsWithConfigJson)]
pub fn bind_previews_with_config_json(text: &str) -> Result<u32, JsError> {
    PreviewConfig::from_json(text)
        .and_then(bind_with)
        .map_err(|e| JsError::new(&e.to_string()))
}

fn bind_with(config: PreviewConfig) -> Result<u32, PreviewError> {
    bind_once(|| {
        let host = DomHost::current()?;
        let document = host.document().clone();
        let controller = PreviewController::new(host, config);

        utils::dom::when_ready(&document, move || page::attach(controller))
            .map(|count| count.map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX)))
            .map_err(|e| PreviewError::Deferral(utils::dom::js_message(&e)))
    })
}

/// Run `bind` at most once per page.
///
/// A failed bind releases the claim so the page can call again.
fn bind_once(bind: impl FnOnce() -> Result<u32, PreviewError>) -> Result<u32, PreviewError> {
    if BOUND.with(|bound| bound.replace(true)) {
        return Err(PreviewError::AlreadyBound);
    }

    let result = bind();
    if result.is_err() {
        BOUND.with(|bound| bound.set(false));
    }
    result
}
