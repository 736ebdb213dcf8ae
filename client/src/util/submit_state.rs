//! Submit-button state for regular forms.
//!
//! Once a form is submitted its button is disabled and relabeled until the
//! browser navigates away.

#[cfg(test)]
#[path = "submit_state_test.rs"]
mod submit_state_test;

/// Label shown while a submitted form is being processed.
pub const PROCESSING_LABEL: &str = "Processing...";

/// Button label for the current submit state.
#[must_use]
pub fn submit_label(submitting: bool, idle_label: &str) -> &str {
    if submitting { PROCESSING_LABEL } else { idle_label }
}
