//! Floating "back to top" button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::back_to_top;

/// Button that appears after the page is scrolled down and returns to the top.
#[component]
pub fn BackToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = back_to_top::current_scroll_y();
            if back_to_top::should_show(scroll_y) != ui.get_untracked().back_to_top_visible() {
                ui.update(|s| s.scroll_y = scroll_y);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let display = move || if ui.get().back_to_top_visible() { "block" } else { "none" };

    view! {
        <button
            class="btn btn-primary back-to-top"
            aria-label="Back to top"
            style:display=display
            on:click=move |_| back_to_top::scroll_to_top()
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
