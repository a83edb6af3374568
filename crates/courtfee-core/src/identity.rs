//! # Identifier Newtypes
//!
//! Exemption categories are referenced by stable string identifiers
//! (`disabled_1_2`, `pensioners`, ...). The newtype keeps them from being
//! confused with display names or legal citations.

use serde::{Deserialize, Serialize};

/// Stable identifier of an exemption category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExemptionId(pub String);

impl ExemptionId {
    /// Access the inner identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExemptionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ExemptionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ExemptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
