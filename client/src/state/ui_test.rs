use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_empty_query_at_top() {
    let state = UiState::default();
    assert!(state.search_query.is_empty());
    assert!(state.scroll_y.abs() < f64::EPSILON);
}

// =============================================================
// back_to_top_visible
// =============================================================

#[test]
fn back_to_top_hidden_at_page_top() {
    let state = UiState::default();
    assert!(!state.back_to_top_visible());
}

#[test]
fn back_to_top_visible_after_scrolling_past_threshold() {
    let state = UiState { scroll_y: 301.0, ..UiState::default() };
    assert!(state.back_to_top_visible());
}

#[test]
fn back_to_top_hidden_exactly_at_threshold() {
    let state = UiState { scroll_y: 300.0, ..UiState::default() };
    assert!(!state.back_to_top_visible());
}
