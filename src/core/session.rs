//! Session persistence and the sign-in / sign-out transitions.
//!
//! The in-memory [`Session`] only changes after the store accepted the new
//! state, so a failed write leaves the header exactly as it was.

use crate::config::SESSION_STORAGE_KEY;
use crate::core::error::SessionError;
use crate::models::{CurrentUser, Session};
use crate::utils::dom;

/// Backing store for the session between page loads.
pub trait SessionStore {
    /// Previously stored session, or `None` if nothing was ever stored.
    fn load(&self) -> Option<Session>;

    fn save(&self, session: &Session) -> Result<(), SessionError>;
}

/// Session stored as JSON in localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let storage = dom::local_storage()?;
        let json = storage.get_item(SESSION_STORAGE_KEY).ok()??;
        serde_json::from_str(&json).ok()
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let storage = dom::local_storage().ok_or(SessionError::StorageUnavailable)?;
        let json = serde_json::to_string(session).map_err(|_| SessionError::SaveFailed)?;
        storage
            .set_item(SESSION_STORAGE_KEY, &json)
            .map_err(|_| SessionError::SaveFailed)
    }
}

/// Session to start the page with.
///
/// Falls back to `seed` when the store has never been written.
pub fn restore(store: &dyn SessionStore, seed: Option<&str>) -> Session {
    store
        .load()
        .unwrap_or_else(|| Session::from_user(seed.map(CurrentUser::new)))
}

/// Sign `user` in, persisting the change first.
pub fn sign_in(
    session: &mut Session,
    store: &dyn SessionStore,
    user: CurrentUser,
) -> Result<(), SessionError> {
    let mut next = session.clone();
    next.sign_in(user);
    store.save(&next)?;
    *session = next;
    Ok(())
}

/// Sign the current user out.
///
/// Persists the anonymous session before clearing the in-memory user; on any
/// error `session` is untouched.
pub fn log_out(
    session: &mut Session,
    store: &dyn SessionStore,
) -> Result<CurrentUser, SessionError> {
    let mut next = session.clone();
    let user = next.sign_out()?;
    store.save(&next).map_err(|e| match e {
        SessionError::SaveFailed => SessionError::ClearFailed,
        other => other,
    })?;
    *session = next;
    Ok(user)
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// In-memory store with switchable write failures.
    #[derive(Default)]
    pub struct MemorySessionStore {
        pub stored: RefCell<Option<Session>>,
        pub fail_writes: Cell<bool>,
    }

    impl SessionStore for MemorySessionStore {
        fn load(&self) -> Option<Session> {
            self.stored.borrow().clone()
        }

        fn save(&self, session: &Session) -> Result<(), SessionError> {
            if self.fail_writes.get() {
                return Err(SessionError::SaveFailed);
            }
            *self.stored.borrow_mut() = Some(session.clone());
            Ok(())
        }
    }
}
