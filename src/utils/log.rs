//! Console logging.
//!
//! Thin wrappers over `web_sys::console` with a fixed prefix so messages from
//! this module are easy to filter in devtools.

const PREFIX: &str = "[gif-preview]";

pub fn debug(message: &str) {
    web_sys::console::debug_1(&format!("{} {}", PREFIX, message).into());
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&format!("{} {}", PREFIX, message).into());
}
