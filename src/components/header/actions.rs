//! Icon buttons on the right of the header.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::components::link::Link;
use crate::core::ThemeContext;
use crate::models::{AppRoute, CartSummary, ThemeMode};

/// Light/dark switch. Shows the sun in dark mode and the moon in light mode.
#[component]
pub fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            type="button"
            class=css::iconButton
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
            aria-pressed=move || theme.mode().is_dark().to_string()
            title=move || theme.mode().toggle_label()
        >
            {move || match theme.mode() {
                ThemeMode::Dark => view! { <Icon icon=ic::SUN /> }.into_any(),
                ThemeMode::Light => view! { <Icon icon=ic::MOON /> }.into_any(),
            }}
        </button>
    }
}

/// Wishlist shortcut. There is no wishlist page yet, so clicks are only logged.
#[component]
pub fn WishlistButton() -> impl IntoView {
    let on_click = move |_: leptos::ev::MouseEvent| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&"Wishlist clicked".into());
    };

    view! {
        <button
            type="button"
            class=css::iconButton
            on:click=on_click
            aria-label="Wishlist"
        >
            <Icon icon=ic::WISHLIST />
        </button>
    }
}

/// Link to the cart with an item-count badge for non-empty carts.
#[component]
pub fn CartLink(cart: Signal<CartSummary>) -> impl IntoView {
    let badge = move || {
        cart.with(|c| c.badge()).map(|count| {
            view! { <span class=css::badge data-role="cart-badge">{count}</span> }
        })
    };

    view! {
        <Link route=AppRoute::Cart class=css::cartLink>
            <Icon icon=ic::CART />
            <span class=css::srOnly>{move || cart.with(|c| c.link_label())}</span>
            {badge}
        </Link>
    }
}
