//! Preview configuration.
//!
//! Centralizes the constants shared by the controller and the DOM layer.
//! Page-specific values can be overridden at runtime through [`PreviewConfig`].

use serde::Deserialize;

use crate::core::PreviewError;

// =============================================================================
// Page Conventions
// =============================================================================

/// Class shared by every trigger link on the page.
pub const TRIGGER_CLASS: &str = "gif-link";

/// Suffix appended to a trigger id to find its preview element.
pub const PREVIEW_SUFFIX: &str = "-gif";

/// Class toggled on a trigger each time it is clicked.
pub const ACTIVE_CLASS: &str = "active";

// =============================================================================
// Responsive Layout
// =============================================================================

/// Viewport width (logical pixels) separating click mode from hover mode.
///
/// Narrower viewports toggle previews inline on click, wider ones float them
/// on hover. A viewport exactly this wide does neither.
pub const BREAKPOINT_PX: f64 = 1300.0;

/// Style values applied to a preview shown inline below its trigger.
pub mod inline_style {
    pub const MARGIN: &str = "10px";
    pub const TEXT_ALIGN: &str = "center";
    pub const POSITION: &str = "static";
}

/// Style values applied to a preview floating beside its trigger.
pub mod floating_style {
    pub const POSITION: &str = "absolute";
    /// Places the preview to the left of the trigger.
    pub const RIGHT: &str = "110%";
    pub const BOTTOM: &str = "-2em";
}

// =============================================================================
// Runtime Overrides
// =============================================================================

/// Runtime configuration for a controller.
///
/// Every field falls back to the constant above, so an empty object (or `{}`
/// in JSON) yields the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PreviewConfig {
    pub trigger_class: String,
    pub preview_suffix: String,
    pub active_class: String,
    pub breakpoint_px: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            trigger_class: TRIGGER_CLASS.to_string(),
            preview_suffix: PREVIEW_SUFFIX.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
            breakpoint_px: BREAKPOINT_PX,
        }
    }
}

impl PreviewConfig {
    /// Parse overrides from JSON text.
    pub fn from_json(text: &str) -> Result<Self, PreviewError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| PreviewError::Config(e.to_string()))?;
        config.validate()
    }

    /// Reject values that would make every lookup or guard meaningless.
    pub fn validate(self) -> Result<Self, PreviewError> {
        if self.trigger_class.trim().is_empty() {
            return Err(PreviewError::Config("triggerClass must not be empty".into()));
        }
        if self.preview_suffix.is_empty() {
            return Err(PreviewError::Config("previewSuffix must not be empty".into()));
        }
        if !self.breakpoint_px.is_finite() || self.breakpoint_px < 0.0 {
            return Err(PreviewError::Config(format!(
                "breakpointPx must be a non-negative number, got {}",
                self.breakpoint_px
            )));
        }
        Ok(self)
    }

    /// Id of the preview paired with the trigger `trigger_id`.
    pub fn preview_id(&self, trigger_id: &str) -> String {
        format!("{}{}", trigger_id, self.preview_suffix)
    }
}
