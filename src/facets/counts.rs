use crate::content::Discoverable;
use crate::facets::catalog::FacetCatalog;
use crate::types::discovery::{FacetCount, FacetCounts};
use crate::types::facet_state::ALL_FACET;

/// Count items per declared facet.
///
/// Items with an undeclared category only contribute to `all`, so
/// `named_total() <= all.count` with equality iff every category is declared.
pub fn facet_counts<T: Discoverable>(items: &[T], facets: &FacetCatalog) -> FacetCounts {
    let named = facets
        .iter()
        .map(|def| FacetCount {
            id: def.id.clone(),
            label: def.label.clone(),
            count: items.iter().filter(|item| item.facet() == def.id).count(),
        })
        .collect();

    let counts = FacetCounts {
        all: FacetCount {
            id: ALL_FACET.to_string(),
            label: facets.all_label().to_string(),
            count: items.len(),
        },
        facets: named,
    };

    debug_assert!(counts.named_total() <= counts.all.count);
    counts
}
