//! Light/dark presentation preference.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::DARK_CLASS;

/// Presentation theme applied to the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode. Applying it twice yields the original value.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Stored spelling of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class carried by the document element while this mode is active.
    pub fn document_class(self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_CLASS)
    }

    /// Accessible label for the toggle button that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown theme spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn test_document_class() {
        assert_eq!(ThemeMode::Dark.document_class(), Some("dark"));
        assert_eq!(ThemeMode::Light.document_class(), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse(), Ok(ThemeMode::Dark));
        assert_eq!(" Light\n".parse(), Ok(ThemeMode::Light));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(UnknownTheme("sepia".to_string()))
        );
        assert!("".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_unknown_theme_message() {
        let err = "sepia".parse::<ThemeMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme 'sepia'");
    }

    #[test]
    fn test_display_matches_parse() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }
}
