//! src/error.rs
//! ============================================================================
//! # `AppError`: Error Type for the Terminal Front End
//!
//! Store and clipboard failures arrive as [`ClipError`] and are wrapped here
//! together with the failures only the front end can hit: configuration,
//! logging setup and terminal I/O.

use clipstash::ClipError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Item store or clipboard failure.
    #[error(transparent)]
    Store(#[from] ClipError),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No home/config directory could be determined.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Tracing subscriber setup failure.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging(message.into())
    }
}
