use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::types::facet_state::ALL_FACET;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacetError {
    #[error("Facet is not declared in the catalog: {0}")]
    InvalidFacetReference(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacetCatalogError {
    #[error("Facet id is reserved: {0}")]
    ReservedFacetId(String),
    #[error("Duplicate facet id: {0}")]
    DuplicateFacetId(String),
    #[error("Facet id must not be empty")]
    EmptyFacetId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDef {
    pub id: String,
    pub label: String,
}

/// The declared facets of one content type, in display order.
///
/// The implicit `"all"` facet is never declared; only its label is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFacetCatalog")]
pub struct FacetCatalog {
    all_label: String,
    facets: Vec<FacetDef>,
}

#[derive(Deserialize)]
struct RawFacetCatalog {
    all_label: String,
    facets: Vec<FacetDef>,
}

impl TryFrom<RawFacetCatalog> for FacetCatalog {
    type Error = FacetCatalogError;

    fn try_from(raw: RawFacetCatalog) -> Result<Self, Self::Error> {
        FacetCatalog::from_defs(raw.all_label, raw.facets)
    }
}

impl FacetCatalog {
    pub fn new<I, K, V>(all_label: impl Into<String>, facets: I) -> Result<Self, FacetCatalogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let defs = facets
            .into_iter()
            .map(|(id, label)| FacetDef {
                id: id.into(),
                label: label.into(),
            })
            .collect();
        Self::from_defs(all_label.into(), defs)
    }

    fn from_defs(all_label: String, facets: Vec<FacetDef>) -> Result<Self, FacetCatalogError> {
        let mut seen = BTreeSet::new();
        for def in &facets {
            if def.id.is_empty() {
                return Err(FacetCatalogError::EmptyFacetId);
            }
            if def.id == ALL_FACET {
                return Err(FacetCatalogError::ReservedFacetId(def.id.clone()));
            }
            if !seen.insert(def.id.as_str()) {
                return Err(FacetCatalogError::DuplicateFacetId(def.id.clone()));
            }
        }

        Ok(Self { all_label, facets })
    }

    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacetDef> {
        self.facets.iter()
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// True for declared facet ids. `"all"` is not a declared facet.
    pub fn contains(&self, id: &str) -> bool {
        self.facets.iter().any(|f| f.id == id)
    }

    pub fn label(&self, id: &str) -> Option<&str> {
        if id == ALL_FACET {
            return Some(&self.all_label);
        }
        self.facets
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.label.as_str())
    }

    /// Strict resolution for callers validating input at their boundary.
    pub fn resolve<'a>(&'a self, id: &'a str) -> Result<&'a str, FacetError> {
        if id == ALL_FACET || self.contains(id) {
            Ok(id)
        } else {
            Err(FacetError::InvalidFacetReference(id.to_string()))
        }
    }

    /// Fail-open resolution: an undeclared facet degrades to `"all"`.
    pub fn resolve_or_all<'a>(&'a self, id: &'a str) -> &'a str {
        match self.resolve(id) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!(facet = %id, error = %err, "falling back to all items");
                ALL_FACET
            }
        }
    }
}
