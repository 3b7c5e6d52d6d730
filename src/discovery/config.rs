use serde::{Deserialize, Serialize};

use crate::types::query::WhitespacePolicy;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub version: String,
    pub whitespace: WhitespacePolicy,
}

impl DiscoveryConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            whitespace: WhitespacePolicy::Trim,
        }
    }

    /// Untrimmed matching, as the site originally behaved.
    pub fn literal() -> Self {
        Self {
            whitespace: WhitespacePolicy::Literal,
            ..Self::v0()
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self::v0()
    }
}
