use serde::{Deserialize, Serialize};

/// Sentinel facet id that selects every item.
pub const ALL_FACET: &str = "all";

/// Transient, caller-owned filter state for one page.
///
/// Each page owns its own value; the engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetState {
    pub query: String,
    pub selected_facet: String,
}

impl Default for FacetState {
    fn default() -> Self {
        Self {
            query: String::new(),
            selected_facet: ALL_FACET.to_string(),
        }
    }
}

impl FacetState {
    pub fn new(query: impl Into<String>, selected_facet: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selected_facet: selected_facet.into(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn select_facet(&mut self, facet: impl Into<String>) {
        self.selected_facet = facet.into();
    }

    /// A tag click is a text query equal to the tag.
    /// The selected facet is left as it was.
    pub fn select_tag(&mut self, tag: &str) {
        self.query = tag.to_string();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.selected_facet == ALL_FACET
    }
}
