#![allow(dead_code)]

use std::sync::Once;

use catalog_discovery::content::ContentItem;
use catalog_discovery::facets::FacetCatalog;

static INIT: Once = Once::new();

/// Route engine logs to the test writer. Set RUST_LOG=debug to see them.
pub fn init_tracing() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn make_item(id: u64, title: &str, summary: &str, category: &str) -> ContentItem {
    ContentItem::new(id, title, summary, category)
}

pub fn blog_like_facets() -> FacetCatalog {
    FacetCatalog::new(
        "All Posts",
        [
            ("tutorial", "Tutorials"),
            ("personal", "Personal"),
            ("insights", "Insights"),
        ],
    )
    .unwrap()
}

pub fn ids(items: &[&ContentItem]) -> Vec<String> {
    items.iter().map(|item| item.id.to_string()).collect()
}
