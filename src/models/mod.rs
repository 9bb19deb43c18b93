//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ThemeMode`] - Light/dark presentation preference
//! - [`SearchQuery`] - Header search box text
//! - [`CartSummary`] - Cart contents shown as a badge
//! - [`Session`], [`CurrentUser`] - Signed-in user
//! - [`NavigationEntry`], [`UserMenu`] - Account dropdown contents
//! - [`AppRoute`] - Hash-based navigation
//! - [`Notice`] - Transient notifications

mod cart;
mod navigation;
mod notice;
mod route;
mod search;
mod session;
mod theme;

pub use cart::CartSummary;
pub use navigation::{LOGOUT_LABEL, NavigationEntry, UserMenu, account_entries};
pub use notice::{Notice, NoticeLevel};
pub use route::AppRoute;
pub use search::SearchQuery;
pub use session::{CurrentUser, Session};
pub use theme::{ThemeMode, UnknownTheme};
