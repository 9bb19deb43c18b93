//! Theme preference persistence using localStorage.

use crate::config::THEME_STORAGE_KEY;
use crate::core::error::PreferenceError;
use crate::models::ThemeMode;
use crate::utils::dom;

/// Pick the starting theme.
///
/// A valid stored value wins; otherwise the system color scheme decides.
pub fn resolve_theme(stored: Option<&str>, system_prefers_dark: bool) -> ThemeMode {
    match parse_stored(stored) {
        Some(mode) => mode,
        None if system_prefers_dark => ThemeMode::Dark,
        None => ThemeMode::Light,
    }
}

/// The stored value as a theme, if it is one.
pub fn parse_stored(stored: Option<&str>) -> Option<ThemeMode> {
    stored.and_then(|s| s.parse().ok())
}

/// Read the stored theme preference, if any.
pub fn stored_theme() -> Option<String> {
    let storage = dom::local_storage()?;
    storage.get_item(THEME_STORAGE_KEY).ok()?
}

/// Persist the theme preference.
pub fn save_theme(mode: ThemeMode) -> Result<(), PreferenceError> {
    let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, mode.as_str())
        .map_err(|_| PreferenceError::SaveFailed(THEME_STORAGE_KEY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_wins() {
        assert_eq!(resolve_theme(Some("dark"), false), ThemeMode::Dark);
        assert_eq!(resolve_theme(Some("light"), true), ThemeMode::Light);
    }

    #[test]
    fn test_falls_back_to_system() {
        assert_eq!(resolve_theme(None, true), ThemeMode::Dark);
        assert_eq!(resolve_theme(None, false), ThemeMode::Light);
        assert_eq!(resolve_theme(Some("garbage"), true), ThemeMode::Dark);
        assert_eq!(resolve_theme(Some(""), false), ThemeMode::Light);
    }

    #[test]
    fn test_stored_spelling_round_trips() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(resolve_theme(Some(mode.as_str()), !mode.is_dark()), mode);
        }
    }
}
