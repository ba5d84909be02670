use crate::error::{ClipError, ClipResult};
use crate::persistence::DEFAULT_INDENT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default data file, resolved against the working directory
pub const DEFAULT_DATA_FILE: &str = "clipboard_data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Location of the JSON item list
    pub data_file: PathBuf,

    /// Spaces per indentation level in the saved file
    pub indent: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            indent: DEFAULT_INDENT,
        }
    }
}

impl StoreConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ClipResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ClipError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| ClipError::Config(format!("Failed to parse config: {e}")))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ClipResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ClipError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| ClipError::Config(format!("Failed to write config file: {e}")))
    }
}
