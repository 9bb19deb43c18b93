//! Hash-based routing for the storefront.
//!
//! URL format: `#/<path>` (e.g. `#/orders`, `#/search?q=dune`).

use crate::utils::url::{decode_component, encode_component};

/// Application routes reachable from the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Storefront landing page: `#/` or empty hash
    Home,
    UserDashboard,
    Orders,
    Cart,
    Checkout,
    Login,
    /// Catalogue search: `#/search?q=<query>`
    Search { query: String },
    /// Any path the storefront does not know about
    NotFound(String),
}

impl AppRoute {
    /// Parse a URL hash (with or without the leading `#`).
    pub fn from_hash(hash: &str) -> Self {
        let raw = hash.trim_start_matches('#');
        let (path, query) = match raw.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (raw, None),
        };
        let path = path.trim_matches('/');

        match path {
            "" => Self::Home,
            "user-dashboard" => Self::UserDashboard,
            "orders" => Self::Orders,
            "cart" => Self::Cart,
            "checkout" => Self::Checkout,
            "login" => Self::Login,
            "search" => Self::Search {
                query: query.and_then(search_param).unwrap_or_default(),
            },
            other => Self::NotFound(format!("/{}", other)),
        }
    }

    /// Path part of the route, starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::UserDashboard => "/user-dashboard".to_string(),
            Self::Orders => "/orders".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::Checkout => "/checkout".to_string(),
            Self::Login => "/login".to_string(),
            Self::Search { query } if query.is_empty() => "/search".to_string(),
            Self::Search { query } => format!("/search?q={}", encode_component(query)),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Convert to a URL hash, including the `#`.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Page title shown in the document body.
    pub fn title(&self) -> String {
        match self {
            Self::Home => "Home".to_string(),
            Self::UserDashboard => "Dashboard".to_string(),
            Self::Orders => "Orders".to_string(),
            Self::Cart => "Cart".to_string(),
            Self::Checkout => "Checkout".to_string(),
            Self::Login => "Sign in".to_string(),
            Self::Search { query } if query.is_empty() => "Search".to_string(),
            Self::Search { query } => format!("Results for \u{201c}{}\u{201d}", query),
            Self::NotFound(_) => "Page not found".to_string(),
        }
    }

    /// Current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route (adds a browser history entry and fires `hashchange`).
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }
}

/// Extract and decode the `q` parameter of a query string.
fn search_param(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == "q")
        .and_then(|(_, value)| decode_component(value))
}
