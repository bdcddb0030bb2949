//! Factor Id Value Object
//!
//! Stable identifier for a registered authentication factor type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a factor type (e.g. `email-code`, `totp`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorId(String);

impl FactorId {
    /// Create a factor id. Normalized to lowercase so lookups are
    /// insensitive to how the host application spells the id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_lowercase())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FactorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FactorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for FactorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
