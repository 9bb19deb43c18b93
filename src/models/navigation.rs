//! Account menu contents.

use super::{AppRoute, Session};

/// A labelled link shown in the account dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub route: AppRoute,
}

impl NavigationEntry {
    pub fn new(label: &'static str, route: AppRoute) -> Self {
        Self { label, route }
    }
}

/// Static entries of the signed-in dropdown, in display order.
pub fn account_entries() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::new("Dashboard", AppRoute::UserDashboard),
        NavigationEntry::new("Orders", AppRoute::Orders),
        NavigationEntry::new("Cart", AppRoute::Cart),
        NavigationEntry::new("Checkout", AppRoute::Checkout),
    ]
}

/// Label of the action appended after the navigation entries.
pub const LOGOUT_LABEL: &str = "Logout";

/// Which user area the header renders. Exactly one variant applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserMenu {
    /// Avatar dropdown with navigation entries followed by a logout action.
    Account {
        username: String,
        entries: Vec<NavigationEntry>,
    },
    /// Plain link to the sign-in page.
    SignIn { route: AppRoute },
}

impl UserMenu {
    pub fn for_session(session: &Session) -> Self {
        match session.user() {
            Some(user) => Self::Account {
                username: user.username.clone(),
                entries: account_entries(),
            },
            None => Self::SignIn {
                route: AppRoute::Login,
            },
        }
    }

    /// Number of activatable items in the dropdown, including logout.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Account { entries, .. } => entries.len() + 1,
            Self::SignIn { .. } => 0,
        }
    }
}
