//! Account dropdown or sign-in link, depending on the session.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::disclosure::{DisclosureState, Menu, MenuItem};
use crate::components::icons as ic;
use crate::components::link::Link;
use crate::core::avatar::{AvatarPlaceholder, avatar_url};
use crate::models::{AppRoute, LOGOUT_LABEL, NavigationEntry, Session, UserMenu};

/// Renders exactly one of the account menu and the sign-in link.
#[component]
pub fn UserArea(session: Signal<Session>, on_log_out: Callback<()>) -> impl IntoView {
    let menu = Memo::new(move |_| session.with(UserMenu::for_session));

    move || match menu.get() {
        UserMenu::Account { username, entries } => view! {
            <AccountMenu username=username entries=entries on_log_out=on_log_out />
        }
        .into_any(),
        UserMenu::SignIn { route } => view! { <SignInLink route=route /> }.into_any(),
    }
}

/// Avatar button opening the account navigation and logout action.
#[component]
fn AccountMenu(
    username: String,
    entries: Vec<NavigationEntry>,
    on_log_out: Callback<()>,
) -> impl IntoView {
    let state = DisclosureState::new(entries.len() + 1);
    let logout_index = entries.len();
    let trigger_label = format!("Account menu for {}", username);

    view! {
        <Menu
            state=state
            trigger_label=trigger_label
            trigger=move || view! { <Avatar username=username.clone() /> }
        >
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let route = entry.route.clone();
                    let label = entry.label;
                    view! {
                        <MenuItem state=state index=index>
                            <Link route=route>{label}</Link>
                        </MenuItem>
                    }
                })
                .collect_view()}
            <MenuItem state=state index=logout_index>
                <button type="button" on:click=move |_| on_log_out.run(())>
                    <span class=css::menuIcon aria-hidden="true"><Icon icon=ic::LOGOUT /></span>
                    {LOGOUT_LABEL}
                </button>
            </MenuItem>
        </Menu>
    }
}

/// Link shown to anonymous visitors.
#[component]
fn SignInLink(route: AppRoute) -> impl IntoView {
    view! {
        <Link route=route class=css::signIn>
            <Icon icon=ic::SIGN_IN />
            <span class=css::signInLabel>"Sign in"</span>
        </Link>
    }
}

/// Remote avatar image, replaced by generated initials if it fails to load.
#[component]
fn Avatar(username: String) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let src = avatar_url(&username);
    let placeholder = AvatarPlaceholder::for_username(&username);
    let fallback_label = username.clone();

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || view! {
                <span
                    class=css::avatarFallback
                    role="img"
                    aria-label=fallback_label.clone()
                    style=format!("background: {}", placeholder.background())
                >
                    {placeholder.initials.clone()}
                </span>
            }
        >
            <img
                class=css::avatar
                src=src.clone()
                alt=username.clone()
                on:error=move |_| set_failed.set(true)
            />
        </Show>
    }
}
