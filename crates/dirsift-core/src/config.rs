/// Scan configuration, optionally loaded from a JSON file.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "filter": { "exclude_filter": "tmp .git" }, "max_depth": 8 }
/// ```
use crate::scanner::ScanFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything that shapes a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub filter: ScanFilter,

    /// Deepest directory level entered below the root; the root is level 0.
    /// `None` leaves depth unbounded.
    pub max_depth: Option<usize>,
}

impl ScanOptions {
    pub fn new(filter: ScanFilter) -> Self {
        Self {
            filter,
            max_depth: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
