//! Dashboard configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Views opened at startup, left to right. The last one ends up active.
    pub startup_views: Vec<String>,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&raw)?;

        tracing::debug!(path = %path.as_ref().display(), "Loaded dashboard config");

        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            startup_views: Vec::new(),
            log_filter: "info".to_string(),
        }
    }
}
