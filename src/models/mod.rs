//! Data models for preview toggling.
//!
//! Contains:
//! - [`PreviewState`], [`StyleProperty`] - Preview visual state and its rendered styles
//! - [`Breakpoint`], [`ViewportMode`] - Responsive breakpoint predicate

mod preview;
mod viewport;

pub use preview::{PreviewState, StyleProperty};
pub use viewport::{Breakpoint, ViewportMode};
