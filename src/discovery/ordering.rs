use std::cmp::Ordering;

use crate::content::Discoverable;

/// Display ordering: newest first, undated last, ties by ascending id.
///
/// Filtering never reorders; callers apply this explicitly when rendering.
pub fn sort_by_published<T: Discoverable>(items: &mut [T]) {
    items.sort_by(|a, b| {
        let date_cmp = match (a.published_at(), b.published_at()) {
            (Some(da), Some(db)) => db.cmp(&da),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        date_cmp.then_with(|| a.id().cmp(b.id()))
    });

    debug_assert!(items.windows(2).all(|w| {
        let (a, b) = (&w[0], &w[1]);
        match (a.published_at(), b.published_at()) {
            (Some(da), Some(db)) => da > db || (da == db && a.id() <= b.id()),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => a.id() <= b.id(),
        }
    }));
}
