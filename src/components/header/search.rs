//! Header search box.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::config::SEARCH_PLACEHOLDER;
use crate::models::{AppRoute, SearchQuery};

/// Controlled search input.
///
/// Every keystroke replaces the stored query with the field's value. Enter
/// opens the search page for the trimmed query without altering the field.
#[component]
pub fn SearchBar(query: RwSignal<SearchQuery>) -> impl IntoView {
    let handle_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        query.update(|q| q.set(value));
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        if let Some(text) = query.with_untracked(|q| q.trimmed().map(str::to_string)) {
            AppRoute::Search { query: text }.push();
        }
    };

    view! {
        <div class=css::search role="search">
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                type="search"
                class=css::searchInput
                placeholder=SEARCH_PLACEHOLDER
                aria-label="Search books"
                autocomplete="off"
                prop:value=move || query.with(|q| q.as_str().to_string())
                on:input=handle_input
                on:keydown=handle_keydown
            />
        </div>
    }
}
