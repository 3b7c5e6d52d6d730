pub mod discovery;
pub mod facet_state;
pub mod identifiers;
pub mod query;

pub use discovery::{Discovery, FacetCount, FacetCounts, FilterSummary};
pub use facet_state::{FacetState, ALL_FACET};
pub use identifiers::{CatalogVersion, ItemId};
pub use query::{TextQuery, WhitespacePolicy};
