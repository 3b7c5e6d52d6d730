use serde::{Deserialize, Serialize};

/// How surrounding whitespace in a query is treated before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhitespacePolicy {
    /// Trim the query; a whitespace-only query behaves as empty.
    #[default]
    Trim,
    /// Match the query exactly as typed, whitespace included.
    Literal,
}

/// A normalized free-text query.
/// Normalization rules:
/// - Whitespace handled per `WhitespacePolicy`
/// - Lowercase
/// - Empty needle matches everything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    pub raw: String,
    needle: String,
}

impl TextQuery {
    pub fn new(raw: impl Into<String>, policy: WhitespacePolicy) -> Self {
        let raw = raw.into();
        let needle = match policy {
            WhitespacePolicy::Trim => raw.trim().to_lowercase(),
            WhitespacePolicy::Literal => raw.to_lowercase(),
        };

        Self { raw, needle }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}
