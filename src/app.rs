//! Root application module.
//!
//! Contains the main App component, AppContext definition, NoticeQueue,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::AppRouter;
use crate::config::{PREFERS_DARK_QUERY, demo};
use crate::core::error::SessionError;
use crate::core::{BrowserSessionStore, SessionStore, ThemeContext, preferences, session};
use crate::models::{AppRoute, CartSummary, CurrentUser, Notice, Session};
use crate::utils::dom;

// ============================================================================
// NoticeQueue
// ============================================================================

/// Pending notices, oldest first.
///
/// `Copy` because both fields are arena-backed Leptos handles.
#[derive(Clone, Copy)]
pub struct NoticeQueue {
    pub items: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn take_id(&self) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        let id = self.take_id();
        self.items.update(|n| n.push(Notice::info(id, message)));
        id
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        let id = self.take_id();
        self.items.update(|n| n.push(Notice::error(id, message)));
        id
    }

    /// Remove notice `id`. A no-op once the queue has been disposed.
    pub fn dismiss(&self, id: u64) {
        let _ = self
            .items
            .try_update(|n| n.retain(|notice| notice.id != id));
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Holds the collaborators the header consumes: session, cart, theme and the
/// notice queue. Provided at the root and read with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user, if any.
    pub session: RwSignal<Session>,

    /// Cart contents.
    pub cart: RwSignal<CartSummary>,

    /// Light/dark theme.
    pub theme: ThemeContext,

    /// Transient notifications.
    pub notices: NoticeQueue,
}

impl AppContext {
    pub fn new(session: Session, cart: CartSummary, theme: ThemeContext) -> Self {
        Self {
            session: RwSignal::new(session),
            cart: RwSignal::new(cart),
            theme,
            notices: NoticeQueue::new(),
        }
    }

    /// Sign out against `store`, reporting the outcome as a notice.
    ///
    /// On failure the session signal is left untouched.
    pub fn log_out_with(&self, store: &dyn SessionStore) -> Result<(), SessionError> {
        let mut current = self.session.get_untracked();
        match session::log_out(&mut current, store) {
            Ok(user) => {
                self.session.set(current);
                self.notices.info(format!("Signed out {}", user.username));
                Ok(())
            }
            Err(e) => {
                self.notices.error(format!("Logout failed: {}", e));
                Err(e)
            }
        }
    }

    /// Sign out and return to the sign-in page.
    pub fn log_out(&self) {
        if self.log_out_with(&BrowserSessionStore).is_ok() {
            AppRoute::Login.push();
        }
    }

    /// Sign in as `username` against `store`.
    pub fn sign_in_with(
        &self,
        store: &dyn SessionStore,
        username: &str,
    ) -> Result<(), SessionError> {
        let mut current = self.session.get_untracked();
        match session::sign_in(&mut current, store, CurrentUser::new(username)) {
            Ok(()) => {
                self.session.set(current);
                Ok(())
            }
            Err(e) => {
                self.notices.error(format!("Sign in failed: {}", e));
                Err(e)
            }
        }
    }

    /// Sign in and go back to the storefront.
    pub fn sign_in(&self, username: &str) {
        if self.sign_in_with(&BrowserSessionStore, username).is_ok() {
            AppRoute::Home.push();
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Restores the session and theme and provides the global AppContext
/// - Mirrors the theme onto the document
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let theme = ThemeContext::restore(
        preferences::stored_theme().as_deref(),
        dom::media_matches(PREFERS_DARK_QUERY),
    );
    theme.sync_document();

    let system_dark = use_media_query(PREFERS_DARK_QUERY);
    Effect::watch(
        move || system_dark.get(),
        move |prefers_dark, _, _| theme.follow_system(*prefers_dark),
        false,
    );

    let ctx = AppContext::new(
        session::restore(&BrowserSessionStore, demo::USERNAME),
        CartSummary::new(demo::CART_ITEMS.iter().copied()),
        theme,
    );
    provide_context(ctx);
    provide_context(theme);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #6b7280; margin-bottom: 2rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #4f46e5;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 0.5rem;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::memory::MemorySessionStore;
    use crate::models::{NoticeLevel, ThemeMode};

    fn context(session: Session) -> AppContext {
        AppContext::new(
            session,
            CartSummary::default(),
            ThemeContext::new(ThemeMode::Light),
        )
    }

    #[test]
    fn test_notice_queue() {
        let owner = Owner::new();
        owner.with(|| {
            let queue = NoticeQueue::new();
            let a = queue.info("one");
            let b = queue.error("two");
            assert_ne!(a, b);
            assert_eq!(queue.items.get().len(), 2);

            queue.dismiss(a);
            let left = queue.items.get();
            assert_eq!(left.len(), 1);
            assert_eq!(left[0].id, b);
            assert!(left[0].is_error());
        });
    }

    #[test]
    fn test_log_out_success() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context(Session::signed_in("jhon"));
            let store = MemorySessionStore::default();

            assert_eq!(ctx.log_out_with(&store), Ok(()));
            assert!(!ctx.session.get().is_authenticated());

            let notices = ctx.notices.items.get();
            assert_eq!(notices.len(), 1);
            assert_eq!(notices[0].level, NoticeLevel::Info);
            assert_eq!(notices[0].message, "Signed out jhon");
        });
    }

    #[test]
    fn test_log_out_failure_keeps_user() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context(Session::signed_in("jhon"));
            let store = MemorySessionStore::default();
            store.fail_writes.set(true);

            assert_eq!(ctx.log_out_with(&store), Err(SessionError::ClearFailed));
            assert_eq!(ctx.session.get(), Session::signed_in("jhon"));

            let notices = ctx.notices.items.get();
            assert_eq!(notices.len(), 1);
            assert!(notices[0].is_error());
            assert_eq!(
                notices[0].message,
                "Logout failed: failed to clear the stored session"
            );
        });
    }

    #[test]
    fn test_sign_in() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context(Session::anonymous());
            let store = MemorySessionStore::default();
            assert_eq!(ctx.sign_in_with(&store, "mary"), Ok(()));
            assert_eq!(ctx.session.get(), Session::signed_in("mary"));
            assert!(ctx.notices.items.get().is_empty());
        });
    }
}
