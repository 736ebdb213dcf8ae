//! Character counter shown under length-limited textareas.

#[cfg(test)]
#[path = "char_counter_test.rs"]
mod char_counter_test;

/// Remaining-characters count below which the counter turns to a warning.
pub const WARN_REMAINING: usize = 50;

/// Counter label, e.g. `"12/500 characters"`. Counts chars, not bytes.
#[must_use]
pub fn counter_text(value: &str, max_length: usize) -> String {
    format!("{}/{max_length} characters", value.chars().count())
}

/// True when fewer than [`WARN_REMAINING`] characters are left.
#[must_use]
pub fn is_near_limit(value: &str, max_length: usize) -> bool {
    max_length.saturating_sub(value.chars().count()) < WARN_REMAINING
}

/// CSS class list for the counter element.
#[must_use]
pub fn counter_class(value: &str, max_length: usize) -> &'static str {
    if is_near_limit(value, max_length) { "form-text text-danger" } else { "form-text text-muted" }
}
