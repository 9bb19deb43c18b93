//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! - **URL hash is the source of truth**: the route is derived from `#/path`
//! - **Header never re-renders on navigation**: only the page body follows the route
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::header::Header;
use crate::components::link::RouteContext;
use crate::components::notice::NoticeStack;
use crate::components::page::Page;
use crate::models::AppRoute;

/// Main application router.
///
/// - `#/` → storefront home
/// - `#/user-dashboard`, `#/orders`, `#/cart`, `#/checkout` → account pages
/// - `#/login` → sign-in page
/// - `#/search?q=...` → search results
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());
    provide_context(RouteContext(route_memo));

    let on_log_out = Callback::new(move |_: ()| ctx.log_out());

    view! {
        <Header session=ctx.session cart=ctx.cart on_log_out=on_log_out />
        <NoticeStack />
        <Page route=route_memo />
    }
}
