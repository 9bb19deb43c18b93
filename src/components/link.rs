//! Route-aware anchor.

use leptos::prelude::*;

use crate::models::AppRoute;

/// Context for accessing the current route from any component.
#[derive(Clone, Copy)]
pub struct RouteContext(pub Memo<AppRoute>);

/// Anchor pointing at `route`.
///
/// Marked `aria-current="page"` while `route` is the current route.
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let current = use_context::<RouteContext>();
    let href = route.to_hash();
    let aria_current =
        move || current.and_then(|c| c.0.with(|r| *r == route).then_some("page"));

    view! {
        <a href=href class=class aria-current=aria_current>
            {children()}
        </a>
    }
}
