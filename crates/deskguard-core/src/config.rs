use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DeskguardError, DeskguardResult};

/// A named identifier pattern exempted from redaction, supplied through
/// configuration. The pattern is a regex string compiled when the engine is
/// built; an invalid pattern is a construction-time error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreservePattern {
    pub name: String,
    pub pattern: String,
}

/// Privacy engine configuration.
///
/// The built-in preserved identifiers (MAC address, labeled serial number)
/// are always active; `preserve_patterns` extends the set for deployments
/// with their own identifier formats (asset tags, case IDs).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Additional identifier patterns exempted from redaction.
    pub preserve_patterns: Vec<PreservePattern>,
    /// Character substituted for each digit when masking.
    pub mask_char: char,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            preserve_patterns: Vec::new(),
            mask_char: 'X',
        }
    }
}

impl PrivacyConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> DeskguardResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DeskguardError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| DeskguardError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }
}
