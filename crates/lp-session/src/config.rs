//! Session configuration

use crate::error::ConfigError;
use lp_persist::StorageKeys;
use lp_state::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layout defaults plus storage key names
///
/// Every field is optional in TOML:
///
/// ```toml
/// [layout]
/// reagent_placeholder = "Unnamed"
/// default_plate_size = 384
///
/// [keys]
/// reagents = "bench1_reagents"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Palette, naming and plate defaults
    pub layout: LayoutConfig,
    /// Storage key names
    pub keys: StorageKeys,
}

impl SessionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With layout settings
    #[inline]
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// With storage key names
    #[inline]
    #[must_use]
    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Parse TOML
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML or wrong field types
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not valid config
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_model::PlateSize;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(SessionConfig::from_toml_str("").unwrap(), SessionConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let text = r##"
            [layout]
            reagent_placeholder = "Unnamed"
            default_plate_size = 384
            palette = ["#112233", "#abc"]

            [keys]
            reagents = "bench1_reagents"
        "##;
        let config = SessionConfig::from_toml_str(text).unwrap();
        assert_eq!(config.layout.reagent_placeholder, "Unnamed");
        assert_eq!(config.layout.default_plate_size, PlateSize::Wells384);
        assert_eq!(config.layout.palette.len(), 2);
        assert_eq!(config.keys.reagents, "bench1_reagents");
        assert_eq!(config.keys.plates, "lp_plates");
    }

    #[test]
    fn unsupported_size_is_rejected() {
        let text = "[layout]\ndefault_plate_size = 100\n";
        assert!(matches!(
            SessionConfig::from_toml_str(text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lab-plate.toml");
        std::fs::write(&path, "[layout]\nplate_name_prefix = \"Run\"\n").unwrap();
        let config = SessionConfig::from_file(&path).unwrap();
        assert_eq!(config.layout.plate_name(2), "Run 2");
    }
}
