//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown next to the logo.
pub const APP_NAME: &str = "BookStore";

/// Placeholder text of the header search box.
pub const SEARCH_PLACEHOLDER: &str = "Search for books, authors, genres...";

// =============================================================================
// External Services
// =============================================================================

/// Avatar image endpoint; the username is passed as the `name` parameter.
pub const AVATAR_ENDPOINT: &str = "https://ui-avatars.com/api/";

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "bookstore.theme";

/// localStorage key for the persisted session.
pub const SESSION_STORAGE_KEY: &str = "bookstore.session";

// =============================================================================
// Demo Data
// =============================================================================

/// Demo seed data standing in for the cart and auth services.
///
/// Only the application shell reads these; components receive the resulting
/// state through props and context.
pub mod demo {
    /// User signed in on first visit.
    pub const USERNAME: Option<&str> = Some("jhon");

    /// Cart contents on page load.
    pub const CART_ITEMS: &[&str] = &["Book1", "Book2", "Book3"];
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Class set on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Media query used when no theme preference is stored.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// How long a notice stays visible, in milliseconds.
pub const NOTICE_TIMEOUT_MS: u32 = 4000;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
