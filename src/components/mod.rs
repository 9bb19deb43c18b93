//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`header`] - Storefront header bar
//! - [`disclosure`] - Dropdown menu widget
//! - [`link`] - Route-aware anchor
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`notice`] - Transient notification stack
//! - [`page`] - Page body per route

pub mod disclosure;
pub mod header;
pub mod icons;
pub mod link;
pub mod notice;
pub mod page;
pub mod router;

pub use header::Header;
pub use router::AppRouter;
