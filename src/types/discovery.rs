use serde::{Deserialize, Serialize};

use crate::types::facet_state::ALL_FACET;

/// Number of items in one facet, with the label shown next to the control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub id: String,
    pub label: String,
    pub count: usize,
}

/// Per-facet item counts in declared display order.
///
/// `all` always equals the collection length; `facets` only counts items
/// whose category is declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    pub all: FacetCount,
    pub facets: Vec<FacetCount>,
}

impl FacetCounts {
    pub fn get(&self, id: &str) -> Option<usize> {
        if id == ALL_FACET {
            return Some(self.all.count);
        }
        self.facets.iter().find(|f| f.id == id).map(|f| f.count)
    }

    /// Sum of the named facets. Less than `all` when some items carry an
    /// undeclared category.
    pub fn named_total(&self) -> usize {
        self.facets.iter().map(|f| f.count).sum()
    }

    /// `all` first, then named facets, the order a filter control renders.
    pub fn iter(&self) -> impl Iterator<Item = &FacetCount> {
        std::iter::once(&self.all).chain(self.facets.iter())
    }
}

/// Metadata describing one recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    pub query: String,
    pub selected_facet: String,
    /// Facet actually applied; `"all"` when the selection was not declared.
    pub effective_facet: String,

    pub items_considered: usize,
    pub items_visible: usize,
}

impl FilterSummary {
    /// True when the caller should render its empty-state message.
    pub fn is_empty(&self) -> bool {
        self.items_visible == 0
    }

    /// "1 article", "4 articles", "0 articles".
    pub fn count_label(&self, singular: &str, plural: &str) -> String {
        let noun = if self.items_visible == 1 { singular } else { plural };
        format!("{} {}", self.items_visible, noun)
    }
}

/// Everything a page needs to render its list and filter controls.
/// Borrows the visible items from the collection instead of cloning them.
#[derive(Debug, Clone, Serialize)]
pub struct Discovery<'a, T> {
    pub visible: Vec<&'a T>,
    pub facet_counts: FacetCounts,
    pub distinct_tags: Vec<String>,
    pub summary: FilterSummary,
}
