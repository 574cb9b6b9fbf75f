//! Client-side substring search over item text.
//!
//! The search is a case-insensitive containment check; it is a view
//! operation and never mutates the underlying list. An empty query matches
//! every item.

use crate::item::Item;

/// Returns `true` if `text` contains `query`, ignoring case.
pub fn matches(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Filters a slice of items down to those whose text matches the query.
pub fn filter_items<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    items.iter().filter(|item| matches(&item.text, query)).collect()
}
