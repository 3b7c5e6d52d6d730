use crate::content::Discoverable;
use crate::types::facet_state::ALL_FACET;

/// `effective_facet` must already be resolved against the facet catalog.
pub fn facet_matches<T: Discoverable>(item: &T, effective_facet: &str) -> bool {
    effective_facet == ALL_FACET || item.facet() == effective_facet
}

/// Highlighted items, in collection order. Ignores query and facet.
pub fn featured<T: Discoverable>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| item.featured()).collect()
}
