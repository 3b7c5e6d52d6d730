use std::collections::HashSet;

use crate::content::Discoverable;

/// Unique tags across the collection, in first-seen order.
pub fn distinct_tags<T: Discoverable>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for item in items {
        for tag in item.tags() {
            if seen.insert(tag.as_str()) {
                tags.push(tag.clone());
            }
        }
    }

    tags
}
