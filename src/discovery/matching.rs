use crate::types::query::TextQuery;

pub trait TextMatcher {
    /// True when `query` matches any one of `fields`.
    fn matches(&self, fields: &[&str], query: &TextQuery) -> bool;
}

/// v0: case-insensitive substring containment.
/// No ranking, no fuzziness: a field either contains the needle or it does not.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringMatcher;

impl TextMatcher for SubstringMatcher {
    fn matches(&self, fields: &[&str], query: &TextQuery) -> bool {
        if query.is_empty() {
            return true;
        }
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(query.needle()))
    }
}
