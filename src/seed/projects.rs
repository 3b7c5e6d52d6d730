use crate::content::{Catalog, CatalogError, ContentItem};
use crate::facets::{FacetCatalog, FacetCatalogError};

pub fn project_facets() -> Result<FacetCatalog, FacetCatalogError> {
    FacetCatalog::new("All Projects", [("ai-ml", "AI / ML"), ("web", "Web")])
}

/// Projects carry no publish date; they render in declared order.
pub fn projects() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "gestureart",
            "GestureArt - Virtual Drawing Platform",
            "A real-time gesture-based drawing system that enables users to draw on screen without physical contact. Features advanced gesture recognition, real-time brush switching, and WebRTC integration for collaborative drawing.",
            "ai-ml",
        )
        .with_tags(["React", "WebRTC", "MongoDB", "Computer Vision", "JavaScript"])
        .with_featured(true),
        ContentItem::new(
            "face-recognition",
            "Face Recognition System - Intelligent Authentication",
            "An advanced biometric authentication system using face recognition technology. Implements CNN for model training with positive imaging techniques and optimized recognition algorithms.",
            "ai-ml",
        )
        .with_tags(["Python", "OpenCV", "Flask", "TensorFlow", "CNN"])
        .with_featured(true),
        ContentItem::new(
            "edutube",
            "Edutube - Educational Video Platform",
            "A comprehensive educational video platform with enhanced content discoverability and personalized learning experience. Features customized API integrations and advanced recommendation algorithms.",
            "web",
        )
        .with_tags(["React", "Node.js", "REST APIs", "Express.js", "MongoDB"])
        .with_featured(true),
    ]
}

pub fn project_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(project_facets()?, projects())
}
