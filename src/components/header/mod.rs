//! Storefront header bar.
//!
//! Logo, search box, theme toggle, wishlist, cart link and the user area.
//! Session and cart arrive as props; the theme comes from [`ThemeContext`].
//! The only state owned here is the search text, which lives as long as the
//! header is mounted.

mod actions;
pub mod search;
mod user_menu;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::link::Link;
use crate::config::APP_NAME;
use crate::core::ThemeContext;
use crate::models::{AppRoute, CartSummary, SearchQuery, Session};

use actions::{CartLink, ThemeToggle, WishlistButton};
use search::SearchBar;
use user_menu::UserArea;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

/// Header bar rendered at the top of every page.
///
/// # Props
/// - `session`: Signed-in user; selects account menu vs. sign-in link
/// - `cart`: Cart contents; drives the count badge
/// - `on_log_out`: Invoked by the account menu's logout action
#[component]
pub fn Header(
    #[prop(into)] session: Signal<Session>,
    #[prop(into)] cart: Signal<CartSummary>,
    on_log_out: Callback<()>,
) -> impl IntoView {
    let theme = use_context::<ThemeContext>().expect("ThemeContext must be provided at root");
    let query = RwSignal::new(SearchQuery::default());

    view! {
        <header class=css::header>
            <div class=css::inner>
                <Brand />
                <SearchBar query=query />
                <nav class=css::actions aria-label="Store">
                    <ThemeToggle theme=theme />
                    <WishlistButton />
                    <CartLink cart=cart />
                    <UserArea session=session on_log_out=on_log_out />
                </nav>
            </div>
        </header>
    }
}

/// Logo and brand name, linking to the storefront home.
#[component]
fn Brand() -> impl IntoView {
    view! {
        <div class=css::brand>
            <Link route=AppRoute::Home class=css::brandLink>
                <span class=css::brandIcon aria-hidden="true"><Icon icon=ic::BRAND /></span>
                <span class=css::brandName>{APP_NAME}</span>
            </Link>
        </div>
    }
}
