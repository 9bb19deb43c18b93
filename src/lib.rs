//! BookStore storefront header, rendered client-side with Leptos.
//!
//! - [`app`] - Root component and application context
//! - [`components`] - Header, dropdown, router and page components
//! - [`core`] - Session, theme, preference and avatar logic
//! - [`models`] - Plain data types shared by the above

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{App, AppContext};
