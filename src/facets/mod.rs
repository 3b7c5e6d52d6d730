pub mod catalog;
pub mod counts;
pub mod tags;

pub use catalog::{FacetCatalog, FacetCatalogError, FacetDef, FacetError};
pub use counts::facet_counts;
pub use tags::distinct_tags;
