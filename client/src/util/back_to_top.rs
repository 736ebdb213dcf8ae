//! Back-to-top button visibility and window scrolling.
//!
//! Requires a browser environment for the scroll helpers; SSR paths no-op and
//! report the page top.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

/// Scroll offset (CSS px) past which the button appears.
pub const VISIBLE_AFTER_PX: f64 = 300.0;

/// Whether the button should be visible at vertical offset `scroll_y`.
#[must_use]
pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > VISIBLE_AFTER_PX
}

/// Read the window's current vertical scroll offset.
pub fn current_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.page_y_offset().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the window to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}
