//! Deterministic content discovery for static catalogs.
//!
//! `catalog-discovery` filters a fixed, compiled-in collection of content
//! items (blog posts, projects) by a free-text query and a single selected
//! category facet, and derives the facet counts and distinct tags that
//! filter controls render. Every operation is a pure function of the
//! collection and a caller-owned `FacetState`: identical inputs always
//! produce identical outputs.

pub mod content;
pub mod discovery;
pub mod facets;
pub mod seed;
pub mod types;
