//! Responsive breakpoint between click mode and hover mode.

use crate::config::BREAKPOINT_PX;

/// Interaction mode selected by the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Narrower than the breakpoint: clicks toggle previews inline.
    Narrow,
    /// Exactly at the breakpoint: neither clicks nor hovers change previews.
    Boundary,
    /// Wider than the breakpoint: hovering floats previews beside the trigger.
    Wide,
}

/// Width threshold in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint(f64);

impl Breakpoint {
    pub fn new(px: f64) -> Self {
        Self(px)
    }

    /// Classify a viewport width.
    ///
    /// Both comparisons are strict, so `width == px` is [`ViewportMode::Boundary`].
    /// A NaN width compares false both ways and also lands on the boundary.
    pub fn classify(&self, width: f64) -> ViewportMode {
        if width < self.0 {
            ViewportMode::Narrow
        } else if width > self.0 {
            ViewportMode::Wide
        } else {
            ViewportMode::Boundary
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(BREAKPOINT_PX)
    }
}
