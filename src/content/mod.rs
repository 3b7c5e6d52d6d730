pub mod catalog;
pub mod discoverable;
pub mod item;

pub use crate::types::identifiers::{CatalogVersion, ItemId};
pub use catalog::{Catalog, CatalogDocument, CatalogError};
pub use discoverable::Discoverable;
pub use item::ContentItem;
