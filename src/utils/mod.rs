//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window, storage and document helpers
//! - [`url`] - Percent-encoding for route and avatar URLs

pub mod dom;
pub mod url;
