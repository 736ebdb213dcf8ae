//! Local page chrome state (search filter, scroll position).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the chat model so page
//! helpers can evolve independently of the chat contract.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::back_to_top;

/// UI state shared by the home page helpers.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Current text of the list search box.
    pub search_query: String,
    /// Last observed vertical scroll offset of the window, in CSS pixels.
    pub scroll_y: f64,
}

impl UiState {
    /// Whether the floating back-to-top button should be shown.
    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        back_to_top::should_show(self.scroll_y)
    }
}
