//! Storage key names

use serde::{Deserialize, Serialize};

/// Names of the four persisted keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    /// JSON list of reagents
    pub reagents: String,
    /// JSON list of plates
    pub plates: String,
    /// JSON boolean theme flag
    pub dark: String,
    /// Plain-string active plate id
    pub active_plate: String,
}

impl StorageKeys {
    /// Default key names under a different prefix (`"{prefix}reagents"`, ...)
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            reagents: format!("{prefix}reagents"),
            plates: format!("{prefix}plates"),
            dark: format!("{prefix}dark"),
            active_plate: format!("{prefix}activePlateId"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix("lp_")
    }
}
