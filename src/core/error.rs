//! Error types for preview toggling.
//!
//! A [`PreviewError`] aborts only the handler invocation that raised it.
//! Other triggers keep working and the next qualifying event tries again.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreviewError {
    /// No element carries the id derived from the trigger.
    #[error("no preview element with id \"{id}\"")]
    MissingPreview { id: String },

    /// Window or document not available to measure the viewport.
    #[error("viewport width unavailable")]
    ViewportUnavailable,

    /// Browser rejected an inline style write.
    #[error("failed to set {property}: {message}")]
    Style {
        property: &'static str,
        message: String,
    },

    /// Toggling the trigger's active class failed.
    #[error("failed to toggle class: {0}")]
    ClassList(String),

    /// No document to bind triggers in.
    #[error("document not available")]
    NoDocument,

    /// Deferring the bind to `DOMContentLoaded` failed.
    #[error("failed to wait for the document: {0}")]
    Deferral(String),

    /// Triggers on this page already have listeners.
    #[error("previews are already bound")]
    AlreadyBound,

    /// Runtime configuration could not be read.
    #[error("invalid preview config: {0}")]
    Config(String),
}
