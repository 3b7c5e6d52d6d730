use chrono::NaiveDate;

use crate::types::identifiers::ItemId;

/// A content type the discovery engine can filter.
///
/// Implementors pick which fields are searchable and which value is the
/// facet; the engine is written once against this trait.
pub trait Discoverable {
    fn id(&self) -> &ItemId;

    /// Fields checked by the text query, independently of each other.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Category value matched against the selected facet.
    fn facet(&self) -> &str;

    fn tags(&self) -> &[String];

    fn featured(&self) -> bool {
        false
    }

    fn published_at(&self) -> Option<NaiveDate> {
        None
    }
}

impl<T: Discoverable + ?Sized> Discoverable for &T {
    fn id(&self) -> &ItemId {
        (**self).id()
    }

    fn searchable_fields(&self) -> Vec<&str> {
        (**self).searchable_fields()
    }

    fn facet(&self) -> &str {
        (**self).facet()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }

    fn featured(&self) -> bool {
        (**self).featured()
    }

    fn published_at(&self) -> Option<NaiveDate> {
        (**self).published_at()
    }
}
