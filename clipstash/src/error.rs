//! Error taxonomy for the item store and clipboard sink

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type ClipResult<T> = Result<T, ClipError>;

/// Every failure the store and the clipboard sink can report.
///
/// None of these are fatal: callers surface them and keep running with the
/// in-memory item list intact.
#[derive(Error, Debug)]
pub enum ClipError {
    #[error("Please enter a title.")]
    EmptyTitle,

    #[error("Please add at least one context with both label and value.")]
    NoValidContexts,

    #[error("An item with this title already exists: {title}")]
    DuplicateTitle { title: String },

    #[error("Failed to read {path:?}: {source}")]
    PersistenceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Data file {path:?} is corrupted: {reason}")]
    PersistenceCorrupted { path: PathBuf, reason: String },

    #[error("Could not save data to {path:?}: {source}")]
    PersistenceWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store configuration error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl ClipError {
    /// Rejected input; the store is unchanged
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, ClipError::EmptyTitle | ClipError::NoValidContexts)
    }

    /// Conditions that inform the user without indicating a defect
    #[inline]
    pub fn is_informational(&self) -> bool {
        matches!(self, ClipError::DuplicateTitle { .. })
    }

    #[inline]
    pub fn is_persistence_error(&self) -> bool {
        matches!(
            self,
            ClipError::PersistenceRead { .. }
                | ClipError::PersistenceCorrupted { .. }
                | ClipError::PersistenceWrite { .. }
                | ClipError::Serialization(_)
        )
    }

    /// Whether the user can simply retry or correct input
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        self.is_validation()
            || self.is_informational()
            || matches!(
                self,
                ClipError::PersistenceWrite { .. } | ClipError::Clipboard(_)
            )
    }

    pub fn duplicate_title(title: impl Into<String>) -> Self {
        Self::DuplicateTitle {
            title: title.into(),
        }
    }

    pub fn persistence_read(path: &Path, source: io::Error) -> Self {
        Self::PersistenceRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn persistence_write(path: &Path, source: io::Error) -> Self {
        Self::PersistenceWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn persistence_corrupted(path: &Path, reason: impl Into<String>) -> Self {
        Self::PersistenceCorrupted {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

impl From<arboard::Error> for ClipError {
    fn from(err: arboard::Error) -> Self {
        ClipError::Clipboard(err.to_string())
    }
}
