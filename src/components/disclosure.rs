//! Dropdown disclosure widget.
//!
//! A trigger button toggles a menu of items. The menu closes when focus
//! leaves it, on Escape, and when an item is activated. Each item tracks an
//! active (highlighted) flag driven by pointer hover and arrow keys.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

stylance::import_crate_style!(css, "src/components/disclosure.module.css");

/// Open/closed and highlight state of one dropdown.
#[derive(Clone, Copy)]
pub struct DisclosureState {
    pub open: RwSignal<bool>,
    /// Highlighted item, from hover or keyboard.
    pub active: RwSignal<Option<usize>>,
    /// Item that should hold keyboard focus.
    focused: RwSignal<Option<usize>>,
    item_count: usize,
}

impl DisclosureState {
    pub fn new(item_count: usize) -> Self {
        Self {
            open: RwSignal::new(false),
            active: RwSignal::new(None),
            focused: RwSignal::new(None),
            item_count,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        if self.open.get_untracked() {
            self.close();
        } else {
            self.open.set(true);
        }
    }

    pub fn close(&self) {
        self.open.set(false);
        self.active.set(None);
        self.focused.set(None);
    }

    /// Highlight `index`, or clear the highlight with `None`.
    ///
    /// Out-of-range indices are ignored.
    pub fn highlight(&self, index: Option<usize>) {
        match index {
            Some(i) if i >= self.item_count => {}
            other => self.active.set(other),
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get() == Some(index)
    }

    /// Move the highlight by one item, wrapping at both ends, and focus it.
    ///
    /// Opens a closed menu first, landing on the first item for a forward
    /// step and the last item for a backward step.
    pub fn step(&self, forward: bool) -> Option<usize> {
        if self.item_count == 0 {
            return None;
        }
        let last = self.item_count - 1;
        let next = if !self.open.get_untracked() {
            self.open.set(true);
            if forward { 0 } else { last }
        } else {
            match (self.active.get_untracked(), forward) {
                (None, true) => 0,
                (None, false) => last,
                (Some(i), true) if i >= last => 0,
                (Some(i), true) => i + 1,
                (Some(0), false) => last,
                (Some(i), false) => i - 1,
            }
        };
        self.active.set(Some(next));
        self.focused.set(Some(next));
        Some(next)
    }
}

/// True when a focusout event moves focus outside the element it is bound to.
fn focus_left(event: &web_sys::FocusEvent) -> bool {
    let Some(related) = event.related_target() else {
        // Focus moved outside the document (e.g., clicked elsewhere)
        return true;
    };
    match (
        event
            .current_target()
            .and_then(|c| c.dyn_into::<web_sys::Node>().ok()),
        related.dyn_ref::<web_sys::Node>(),
    ) {
        (Some(wrapper), Some(target)) => !wrapper.contains(Some(target)),
        _ => false,
    }
}

/// Dropdown with a trigger button and a list of [`MenuItem`]s.
#[component]
pub fn Menu(
    state: DisclosureState,
    #[prop(into)] trigger_label: String,
    #[prop(into)] trigger: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let on_focusout = move |event: web_sys::FocusEvent| {
        if focus_left(&event) {
            state.close();
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => state.close(),
        "ArrowDown" => {
            ev.prevent_default();
            state.step(true);
        }
        "ArrowUp" => {
            ev.prevent_default();
            state.step(false);
        }
        _ => {}
    };

    view! {
        <div class=css::menu on:focusout=on_focusout on:keydown=on_keydown>
            <button
                type="button"
                class=css::trigger
                aria-label=trigger_label
                aria-haspopup="menu"
                aria-expanded=move || state.open.get().to_string()
                on:click=move |_| state.toggle()
            >
                {trigger.run()}
            </button>
            <Show when=move || state.open.get()>
                <div class=css::items role="menu">
                    {children()}
                </div>
            </Show>
        </div>
    }
}

/// One activatable entry of a [`Menu`].
///
/// Wraps a single link or button; activating it closes the menu.
#[component]
pub fn MenuItem(state: DisclosureState, index: usize, children: Children) -> impl IntoView {
    let item_ref = NodeRef::<leptos::html::Div>::new();

    // Move keyboard focus onto the wrapped element when arrow keys select it
    Effect::new(move |_| {
        if state.focused.get() == Some(index)
            && let Some(wrapper) = item_ref.get()
            && let Some(child) = wrapper.first_element_child()
            && let Ok(element) = child.dyn_into::<web_sys::HtmlElement>()
        {
            let _ = element.focus();
        }
    });

    let item_class = move || {
        if state.is_active(index) {
            format!("{} {}", css::item, css::itemActive)
        } else {
            css::item.to_string()
        }
    };

    view! {
        <div
            node_ref=item_ref
            class=item_class
            role="none"
            data-active=move || state.is_active(index).to_string()
            on:mouseenter=move |_| state.highlight(Some(index))
            on:mouseleave=move |_| state.highlight(None)
            on:click=move |_| state.close()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_state(item_count: usize, f: impl FnOnce(DisclosureState)) {
        let owner = Owner::new();
        owner.with(|| f(DisclosureState::new(item_count)));
    }

    #[test]
    fn test_starts_closed() {
        with_state(5, |state| {
            assert!(!state.is_open());
            assert_eq!(state.active.get(), None);
        });
    }

    #[test]
    fn test_toggle() {
        with_state(5, |state| {
            state.toggle();
            assert!(state.is_open());
            state.highlight(Some(2));
            state.toggle();
            assert!(!state.is_open());
            assert_eq!(state.active.get(), None);
        });
    }

    #[test]
    fn test_highlight_bounds() {
        with_state(3, |state| {
            state.highlight(Some(2));
            assert!(state.is_active(2));
            state.highlight(Some(3));
            assert!(state.is_active(2));
            state.highlight(None);
            assert!(!state.is_active(2));
        });
    }

    #[test]
    fn test_step_opens_and_wraps() {
        with_state(3, |state| {
            assert_eq!(state.step(true), Some(0));
            assert!(state.is_open());
            assert_eq!(state.step(true), Some(1));
            assert_eq!(state.step(true), Some(2));
            assert_eq!(state.step(true), Some(0));
            assert_eq!(state.step(false), Some(2));
        });
    }

    #[test]
    fn test_step_backward_from_closed() {
        with_state(5, |state| {
            assert_eq!(state.step(false), Some(4));
            assert!(state.is_active(4));
        });
    }

    #[test]
    fn test_step_without_items() {
        with_state(0, |state| {
            assert_eq!(state.step(true), None);
            assert!(!state.is_open());
        });
    }

    #[test]
    fn test_close_resets_highlight() {
        with_state(5, |state| {
            state.step(true);
            state.close();
            assert!(!state.is_open());
            assert_eq!(state.active.get(), None);
        });
    }
}
