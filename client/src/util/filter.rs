//! Case-insensitive client-side filtering for searchable item lists.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Whether an item with `text` stays visible for `query`.
///
/// Empty queries match everything.
#[must_use]
pub fn matches_query(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Indices of `items` that match `query`, in their original order.
#[must_use]
pub fn visible_indices<S: AsRef<str>>(items: &[S], query: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_query(item.as_ref(), query))
        .map(|(i, _)| i)
        .collect()
}
