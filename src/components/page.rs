//! Page body below the header.
//!
//! Pages only name the route they stand for; catalogue, cart and order
//! content come from services this crate does not include.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::demo;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn Page(route: Memo<AppRoute>) -> impl IntoView {
    view! {
        <main class=css::main>
            <h1 class=css::title>{move || route.with(AppRoute::title)}</h1>
            {move || match route.get() {
                AppRoute::Login => view! { <DemoSignIn /> }.into_any(),
                AppRoute::NotFound(path) => view! {
                    <p class=css::text>{format!("Nothing lives at {}.", path)}</p>
                }
                .into_any(),
                _ => ().into_any(),
            }}
        </main>
    }
}

/// Sign back in as the demo user.
#[component]
fn DemoSignIn() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let signed_in = Signal::derive(move || ctx.session.with(|s| s.is_authenticated()));

    move || match demo::USERNAME {
        Some(name) if !signed_in.get() => view! {
            <button type="button" class=css::button on:click=move |_| ctx.sign_in(name)>
                {format!("Continue as {}", name)}
            </button>
        }
        .into_any(),
        Some(_) => view! { <p class=css::text>"You are already signed in."</p> }.into_any(),
        None => view! { <p class=css::text>"Sign-in is not available."</p> }.into_any(),
    }
}
