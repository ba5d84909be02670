//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Loads and saves settings as TOML from the platform config directory
//! resolved by [`directories`](https://docs.rs/directories).
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load()?;
//! config.save()?;
//! ```

use clipstash::StoreConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::AppError;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "clipstash";
const APPLICATION: &str = "clipstash";

/// Log file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for the daily rolling log files
    pub log_dir: PathBuf,

    pub file_prefix: String,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let log_dir = project_dirs()
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            log_dir,
            file_prefix: "clipstash.log".to_string(),
            level: "info".to_string(),
        }
    }
}

/// Terminal front-end settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Empty label/value rows shown when the add form opens
    pub initial_context_rows: usize,

    /// Show key hints in the status bar
    pub show_key_hints: bool,

    /// Ask before clearing every item
    pub confirm_destructive_ops: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_context_rows: 3,
            show_key_hints: true,
            confirm_destructive_ops: true,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // Older files missing a section still load
pub struct Config {
    pub store: StoreConfig,

    pub logging: LoggingConfig,

    pub ui: UiConfig,
}

impl Config {
    /// Loads config from the platform config dir, writing defaults on first run.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/clipstash/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = fs::read_to_string(path).map_err(|e| AppError::config_io(path, e))?;
            let cfg: Self = toml::from_str(&text)?;
            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(path)?;

            Ok(default_config)
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str).map_err(|e| AppError::config_io(path, e))?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs = project_dirs().ok_or(AppError::NoConfigDir)?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}
