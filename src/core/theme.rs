//! Theme context shared through the component tree.
//!
//! Components read and flip the theme through [`ThemeContext`]; only the
//! effect installed by [`ThemeContext::sync_document`] touches the document.
//!
//! Until the user picks a theme the context follows the system color scheme
//! and nothing is written to storage.

use leptos::prelude::*;

use crate::config::DARK_CLASS;
use crate::core::preferences;
use crate::models::ThemeMode;
use crate::utils::dom;

/// Reactive theme value provided at the application root.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
    /// Set once the theme came from storage or a toggle.
    chosen: RwSignal<bool>,
}

impl ThemeContext {
    /// A context that still follows the system color scheme.
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: RwSignal::new(initial),
            chosen: RwSignal::new(false),
        }
    }

    /// Starting context from the stored preference and the system scheme.
    pub fn restore(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        let theme = Self::new(preferences::resolve_theme(stored, system_prefers_dark));
        if preferences::parse_stored(stored).is_some() {
            theme.chosen.set(true);
        }
        theme
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Whether the user has picked a theme, either now or on an earlier visit.
    pub fn is_chosen(&self) -> bool {
        self.chosen.get()
    }

    /// Flip between light and dark. The result is remembered.
    pub fn toggle(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
        self.chosen.set(true);
    }

    /// Track a system color scheme change unless the user already chose.
    pub fn follow_system(&self, prefers_dark: bool) {
        if self.chosen.get_untracked() {
            return;
        }
        let mode = if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        self.mode.set(mode);
    }

    /// Mirror the theme onto the `<html>` class list and persist chosen themes.
    ///
    /// Runs once on mount with the initial value and again on every change.
    pub fn sync_document(self) {
        Effect::new(move |_| {
            let mode = self.mode.get();
            if !dom::set_root_class(DARK_CLASS, mode.is_dark()) {
                warn("Could not update document theme class");
            }
            if self.chosen.get()
                && let Err(e) = preferences::save_theme(mode)
            {
                warn(&format!("Theme not saved: {}", e));
            }
        });
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_mode() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::new(ThemeMode::Light);
            theme.toggle();
            assert_eq!(theme.mode(), ThemeMode::Dark);
            theme.toggle();
            assert_eq!(theme.mode(), ThemeMode::Light);
        });
    }

    #[test]
    fn test_copies_share_state() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::new(ThemeMode::Dark);
            let copy = theme;
            copy.toggle();
            assert_eq!(theme.mode(), ThemeMode::Light);
            assert!(theme.is_chosen());
        });
    }

    #[test]
    fn test_missing_preference_follows_dark_system() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::restore(None, true);
            assert_eq!(theme.mode(), ThemeMode::Dark);
            assert!(!theme.is_chosen());

            theme.follow_system(false);
            assert_eq!(theme.mode(), ThemeMode::Light);
            assert!(!theme.is_chosen());
        });
    }

    #[test]
    fn test_unparseable_preference_is_not_a_choice() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::restore(Some("sepia"), true);
            assert_eq!(theme.mode(), ThemeMode::Dark);
            assert!(!theme.is_chosen());
        });
    }

    #[test]
    fn test_stored_preference_ignores_system() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::restore(Some("light"), true);
            assert_eq!(theme.mode(), ThemeMode::Light);
            assert!(theme.is_chosen());

            theme.follow_system(true);
            assert_eq!(theme.mode(), ThemeMode::Light);
        });
    }

    #[test]
    fn test_toggle_stops_following_system() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::new(ThemeMode::Light);
            theme.toggle();
            theme.follow_system(false);
            assert_eq!(theme.mode(), ThemeMode::Dark);
        });
    }
}
