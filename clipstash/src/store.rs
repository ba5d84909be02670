use crate::config::StoreConfig;
use crate::error::{ClipError, ClipResult};
use crate::item::{Context, Item};
use crate::persistence::JsonPersistence;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// How the last [`ItemStore::load`] went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// No data file yet; the store starts empty
    Missing,
    Loaded {
        items: usize,
        /// Elements kept verbatim because they could not be read as items
        rejected: usize,
        renamed: usize,
    },
    /// The file could not be used and the store started empty. A corrupt
    /// file is copied to `backup` first, since the next save replaces it.
    Recovered {
        reason: String,
        backup: Option<PathBuf>,
    },
}

impl LoadReport {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadReport::Recovered { .. })
    }
}

/// The authoritative ordered item list and its file on disk.
///
/// Items are kept in insertion order; the newest item is last. Every
/// mutation is written through to disk. When a write fails the in-memory
/// list keeps the change and the error is returned, so the caller can retry
/// with [`ItemStore::save`].
///
/// File elements that could not be read as items are held aside and written
/// back unchanged after the items on every save, until [`ItemStore::clear_all`].
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    preserved: Vec<Value>,
    persistence: JsonPersistence,
}

impl ItemStore {
    /// Store backed by `path`, not loaded yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_persistence(JsonPersistence::new(path))
    }

    pub fn from_persistence(persistence: JsonPersistence) -> Self {
        Self {
            items: Vec::new(),
            preserved: Vec::new(),
            persistence,
        }
    }

    /// Construct and load in one step
    pub fn open(path: impl Into<PathBuf>) -> (Self, LoadReport) {
        let mut store = Self::new(path);
        let report = store.load();
        (store, report)
    }

    pub fn with_config(config: &StoreConfig) -> (Self, LoadReport) {
        let mut store = Self::from_persistence(JsonPersistence::with_indent(
            config.data_file.clone(),
            config.indent,
        ));
        let report = store.load();
        (store, report)
    }

    /// Replace the in-memory list with the file contents.
    ///
    /// Never fails: unreadable or corrupt files leave the store empty and
    /// are described in the returned report.
    #[instrument(level = "debug", skip(self), fields(path = %self.persistence.path().display()))]
    pub fn load(&mut self) -> LoadReport {
        match self.persistence.load() {
            Ok(None) => {
                info!("No data file at {}, starting empty", self.path().display());
                self.items.clear();
                self.preserved.clear();
                LoadReport::Missing
            }
            Ok(Some(decoded)) => {
                info!(
                    items = decoded.items.len(),
                    rejected = decoded.rejected,
                    "Loaded items from {}",
                    self.path().display()
                );
                let report = LoadReport::Loaded {
                    items: decoded.items.len(),
                    rejected: decoded.rejected,
                    renamed: decoded.renamed,
                };
                self.items = decoded.items;
                self.preserved = decoded.preserved;
                report
            }
            Err(e) => {
                warn!("Error loading {}: {}. Starting with an empty list.", self.path().display(), e);
                self.items.clear();
                self.preserved.clear();

                let backup = match &e {
                    ClipError::PersistenceCorrupted { .. } => match self.persistence.backup() {
                        Ok(backup) => {
                            info!("Copied unreadable data file to {}", backup.display());
                            Some(backup)
                        }
                        Err(backup_error) => {
                            warn!("Could not back up {}: {}", self.path().display(), backup_error);
                            None
                        }
                    },
                    _ => None,
                };

                LoadReport::Recovered {
                    reason: e.to_string(),
                    backup,
                }
            }
        }
    }

    /// Validate and append a new item, then persist.
    ///
    /// Validation and duplicate-title failures leave the store unchanged. A
    /// persistence failure is returned after the item has been appended.
    #[instrument(level = "debug", skip(self, contexts))]
    pub fn add_item(
        &mut self,
        title: &str,
        contexts: impl IntoIterator<Item = Context>,
    ) -> ClipResult<&Item> {
        let item = Item::new(title, contexts)?;

        if self.contains_title(item.title()) {
            debug!("Rejected duplicate title '{}'", item.title());
            return Err(ClipError::duplicate_title(item.title()));
        }

        info!(
            title = item.title(),
            contexts = item.contexts().len(),
            "Adding item"
        );
        self.items.push(item);
        self.save()?;

        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove `item` if present. Returns whether anything was removed;
    /// an absent item changes nothing and writes nothing.
    #[instrument(level = "debug", skip(self, item), fields(title = item.title()))]
    pub fn delete_item(&mut self, item: &Item) -> ClipResult<bool> {
        let Some(position) = self.items.iter().position(|existing| existing == item) else {
            debug!("Delete ignored, item not in store");
            return Ok(false);
        };

        self.items.remove(position);
        info!("Deleted item '{}'", item.title());
        self.save()?;
        Ok(true)
    }

    /// Drop every item, and any preserved unreadable elements, and persist
    /// the empty list
    #[instrument(level = "debug", skip(self))]
    pub fn clear_all(&mut self) -> ClipResult<()> {
        info!(
            count = self.items.len(),
            preserved = self.preserved.len(),
            "Clearing all items"
        );
        self.items.clear();
        self.preserved.clear();
        self.save()
    }

    /// Items in insertion order, oldest first
    pub fn list_items(&self) -> &[Item] {
        &self.items
    }

    /// Write the whole list to disk
    pub fn save(&self) -> ClipResult<()> {
        self.persistence.save(&self.items, &self.preserved).inspect_err(|e| {
            warn!("Error saving data: {}", e);
        })?;
        debug!(count = self.items.len(), "Saved items to {}", self.path().display());
        Ok(())
    }

    pub fn get(&self, title: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.title() == title)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    pub fn path(&self) -> &Path {
        self.persistence.path()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Unreadable file elements carried through saves
    pub fn preserved_len(&self) -> usize {
        self.preserved.len()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats::new(&self.items)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub total_items: usize,
    pub total_contexts: usize,
}

impl StoreStats {
    fn new(items: &[Item]) -> Self {
        Self {
            total_items: items.len(),
            total_contexts: items.iter().map(|item| item.contexts().len()).sum(),
        }
    }
}
