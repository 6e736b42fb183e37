//! Core preview toggling logic.
//!
//! This module provides:
//! - [`PreviewController`] driving previews from trigger interactions
//! - [`Host`], [`TriggerElement`], [`PreviewElement`] seams to the page
//! - [`PreviewError`] for failed handler invocations

mod controller;
pub mod error;

pub use controller::{
    Host, Interaction, Outcome, PreviewController, PreviewElement, TriggerBinding,
    TriggerElement, render,
};
pub use error::PreviewError;
