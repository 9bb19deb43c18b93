//! Core logic behind the header's collaborators.
//!
//! - [`avatar`] - Avatar endpoint URL and fallback glyph
//! - [`preferences`] - Theme preference persistence
//! - [`session`] - Session persistence, sign-in and logout
//! - [`theme`] - Theme context and the document `dark` class

pub mod avatar;
pub mod error;
pub mod preferences;
pub mod session;
pub mod theme;

pub use session::{BrowserSessionStore, SessionStore};
pub use theme::ThemeContext;
