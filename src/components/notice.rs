//! Transient notification stack.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::{AppContext, NoticeQueue};
use crate::components::icons as ic;
use crate::config::NOTICE_TIMEOUT_MS;
use crate::models::{Notice, NoticeLevel};

stylance::import_crate_style!(css, "src/components/notice.module.css");

/// Pending notices, newest last. Each one dismisses itself after a timeout.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let queue = ctx.notices;

    view! {
        <div class=css::stack role="status" aria-live="polite">
            <For
                each=move || queue.items.get()
                key=|notice| notice.id
                children=move |notice| view! { <NoticeCard notice=notice queue=queue /> }
            />
        </div>
    }
}

#[component]
fn NoticeCard(notice: Notice, queue: NoticeQueue) -> impl IntoView {
    let id = notice.id;
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        queue.dismiss(id);
    });

    let class = match notice.level {
        NoticeLevel::Info => format!("{} {}", css::notice, css::info),
        NoticeLevel::Error => format!("{} {}", css::notice, css::error),
    };

    view! {
        <div class=class>
            <span>{notice.message}</span>
            <button
                type="button"
                class=css::dismiss
                aria-label="Dismiss"
                on:click=move |_| queue.dismiss(id)
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
