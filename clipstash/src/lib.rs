//! # clipstash - labeled snippet store
//!
//! Keeps a small list of titled items, each holding one or more
//! `label: value` contexts, in a JSON file, and copies their text to the
//! system clipboard.
//!
//! ## Key Features
//! - Unique, immutable items with validated contexts
//! - Backward-compatible loading of the two legacy file shapes
//! - Corrupt data files never block startup
//! - Clipboard access behind a backend trait

pub mod clipboard;
pub mod config;
pub mod error;
pub mod item;
pub mod persistence;
pub mod store;

// Re-export main types for easy use
pub use clipboard::{ClipboardBackend, ClipboardSink, CopyOutcome, MemoryClipboard, SystemClipboard};
pub use config::StoreConfig;
pub use error::{ClipError, ClipResult};
pub use item::{Context, Item};
pub use persistence::JsonPersistence;
pub use store::{ItemStore, LoadReport, StoreStats};
