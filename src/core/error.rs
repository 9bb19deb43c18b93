//! Custom error types for the application.
//!
//! - [`SessionError`] - Sign-out and session persistence failures
//! - [`PreferenceError`] - localStorage operations for user preferences

use thiserror::Error;

/// Session errors raised while signing out or persisting the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No user is signed in.
    #[error("no user is signed in")]
    NotSignedIn,
    /// localStorage not available.
    #[error("session storage is not available")]
    StorageUnavailable,
    /// Stored session could not be removed.
    #[error("failed to clear the stored session")]
    ClearFailed,
    /// Stored session could not be written.
    #[error("failed to save the session")]
    SaveFailed,
}

/// Preference errors for localStorage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to save to localStorage.
    #[error("failed to save preference '{0}'")]
    SaveFailed(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(SessionError::NotSignedIn.to_string(), "no user is signed in");
        assert_eq!(
            PreferenceError::SaveFailed("bookstore.theme").to_string(),
            "failed to save preference 'bookstore.theme'"
        );
    }
}
