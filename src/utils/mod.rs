//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window/document access and viewport measurement
//! - [`log`] - Console logging

pub mod dom;
pub mod log;
