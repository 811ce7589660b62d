//! Configuration for the demonstration driver.
//!
//! Plain serde structs with defaults, loadable from a JSON file. Unknown
//! fields are rejected and missing ones fall back to their defaults.

use crate::error::{Result, ViewError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "ARRAYVIEW_CONFIG";

/// Master configuration for a demonstration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Which demonstrations run.
    pub demos: DemoSelection,
    /// Transcript rendering.
    pub output: OutputFormat,
    /// Replace printed addresses with a fixed placeholder.
    pub mask_addresses: bool,
    /// Emit logs as JSON instead of human-readable lines.
    pub log_json: bool,
}

/// One switch per demonstration, in run order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoSelection {
    pub pointers_and_arrays: bool,
    pub arrays_as_pointers: bool,
    pub pointers_as_arrays: bool,
}

impl Default for DemoSelection {
    fn default() -> Self {
        Self {
            pointers_and_arrays: true,
            arrays_as_pointers: true,
            pointers_as_arrays: true,
        }
    }
}

/// How transcripts are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl DemoConfig {
    /// Load from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let text = fs::read_to_string(path)
            .map_err(|e| ViewError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&text)
            .map_err(|e| ViewError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Load from the file named by `ARRAYVIEW_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}
