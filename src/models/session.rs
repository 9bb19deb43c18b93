//! Signed-in user state.

use serde::{Deserialize, Serialize};

use crate::core::error::SessionError;

/// Identity of the signed-in shopper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}

impl CurrentUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Session state: either anonymous or signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    user: Option<CurrentUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            user: Some(CurrentUser::new(username)),
        }
    }

    pub fn from_user(user: Option<CurrentUser>) -> Self {
        Self { user }
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: CurrentUser) {
        self.user = Some(user);
    }

    /// Drop the current user, returning it.
    pub fn sign_out(&mut self) -> Result<CurrentUser, SessionError> {
        self.user.take().ok_or(SessionError::NotSignedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_signed_in() {
        let session = Session::signed_in("jhon");
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("jhon"));
    }

    #[test]
    fn test_sign_out_clears_user() {
        let mut session = Session::signed_in("jhon");
        let user = session.sign_out().unwrap();
        assert_eq!(user.username, "jhon");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_sign_out_when_anonymous() {
        let mut session = Session::anonymous();
        assert_eq!(session.sign_out(), Err(SessionError::NotSignedIn));
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_sign_in_replaces_user() {
        let mut session = Session::signed_in("jhon");
        session.sign_in(CurrentUser::new("mary"));
        assert_eq!(session.user(), Some(&CurrentUser::new("mary")));
    }

    #[test]
    fn test_user_json_shape() {
        let json = serde_json::to_string(&CurrentUser::new("jhon")).unwrap();
        assert_eq!(json, r#"{"username":"jhon"}"#);
        let back: CurrentUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CurrentUser::new("jhon"));
    }

    #[test]
    fn test_session_json_shape() {
        let json = serde_json::to_string(&Session::anonymous()).unwrap();
        assert_eq!(json, r#"{"user":null}"#);
        let empty: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Session::anonymous());
    }
}
