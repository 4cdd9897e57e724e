//! Engine configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use worldgeo_core::errors::{ExError, ExErrorKind};

/// Settings applied when a store is opened.
///
/// ```toml
/// accepted_extensions = ["db", "sqlite"]
/// enforce_foreign_keys = true
/// bootstrap_schema = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// File extensions accepted by `OpenStore`, without the dot
    pub accepted_extensions: Vec<String>,
    /// Issue `PRAGMA foreign_keys = ON` on open
    pub enforce_foreign_keys: bool,
    /// Create missing tables on open
    pub bootstrap_schema: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: vec!["db".to_string()],
            enforce_foreign_keys: true,
            bootstrap_schema: true,
        }
    }
}

impl EngineConfig {
    /// Parse from TOML; missing keys take their defaults
    pub fn from_toml_str(s: &str) -> Result<Self, ExError> {
        toml::from_str(s).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("config_parse")
                .with_message(e.to_string())
        })
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ExError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("config_read")
                .with_message(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }
}
