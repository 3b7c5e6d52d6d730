// Catalogs are seed data:
// no mutation after construction
// no create/update/delete
// validated once, read many times

use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::content::discoverable::Discoverable;
use crate::content::item::ContentItem;
use crate::discovery::CatalogFilter;
use crate::facets::{FacetCatalog, FacetCatalogError};
use crate::types::discovery::Discovery;
use crate::types::facet_state::FacetState;
use crate::types::identifiers::{CatalogVersion, ItemId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate item ID: {0}")]
    DuplicateItemId(String),
    #[error("Invalid facet declaration: {0}")]
    Facets(#[from] FacetCatalogError),
}

/// On-disk shape of a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument<T> {
    pub facets: FacetCatalog,
    pub items: Vec<T>,
}

#[derive(Serialize)]
struct CatalogDocumentRef<'a, T> {
    facets: &'a FacetCatalog,
    items: &'a [T],
}

/// An immutable, validated content collection with its declared facets.
#[derive(Debug, Clone)]
pub struct Catalog<T = ContentItem> {
    facets: FacetCatalog,
    items: Vec<T>,
    version: CatalogVersion,
}

impl<T> Catalog<T>
where
    T: Discoverable + Serialize,
{
    pub fn new(facets: FacetCatalog, items: Vec<T>) -> Result<Self, CatalogError> {
        // Sort ids to find duplicates as adjacent pairs; the items keep their order
        let mut ids: Vec<_> = items.iter().map(|item| item.id()).collect();
        ids.sort();
        for pair in ids.windows(2) {
            if pair[0] == pair[1] {
                return Err(CatalogError::DuplicateItemId(pair[0].to_string()));
            }
        }

        for item in &items {
            if !facets.contains(item.facet()) {
                warn!(
                    id = %item.id(),
                    category = item.facet(),
                    "item category is not a declared facet; it only counts towards all"
                );
            }
        }

        // Version covers items in collection order, since order is observable
        let content = serde_json::to_vec(&items)?;
        let version = CatalogVersion::from_content(&content);

        debug!(items = items.len(), facets = facets.len(), %version, "catalog built");

        Ok(Self {
            facets,
            items,
            version,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn facets(&self) -> &FacetCatalog {
        &self.facets
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Visible items for `state` using the default engine.
    pub fn filter(&self, state: &FacetState) -> Vec<&T> {
        CatalogFilter::default().filter(&self.items, &self.facets, state)
    }

    /// Visible items plus facet metadata using the default engine.
    pub fn discover(&self, state: &FacetState) -> Discovery<'_, T> {
        CatalogFilter::default().discover(&self.items, &self.facets, state)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), CatalogError> {
        let doc = CatalogDocumentRef {
            facets: &self.facets,
            items: &self.items,
        };
        serde_json::to_writer_pretty(writer, &doc)?;
        Ok(())
    }
}

impl<T> Catalog<T>
where
    T: Discoverable + Serialize + DeserializeOwned,
{
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let doc: CatalogDocument<T> = serde_json::from_reader(reader)?;
        Self::new(doc.facets, doc.items)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let f = fs::File::open(path)?;
        Self::from_reader(BufReader::new(f))
    }
}
