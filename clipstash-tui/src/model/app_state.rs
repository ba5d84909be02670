//! Application state owned by the binary's root: the item store, the
//! clipboard sink and the presentation state that draws them.

use clipstash::{ClipboardBackend, ClipboardSink, Item, ItemStore, LoadReport, SystemClipboard};
use tracing::warn;

use crate::config::Config;
use crate::model::ui_state::UIState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Behavior {
    pub confirm_destructive_ops: bool,
    pub initial_context_rows: usize,
    pub show_key_hints: bool,
}

impl From<&Config> for Behavior {
    fn from(config: &Config) -> Self {
        Self {
            confirm_destructive_ops: config.ui.confirm_destructive_ops,
            initial_context_rows: config.ui.initial_context_rows,
            show_key_hints: config.ui.show_key_hints,
        }
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

pub struct AppState<B: ClipboardBackend = SystemClipboard> {
    pub store: ItemStore,
    pub sink: ClipboardSink<B>,
    pub ui: UIState,
    pub behavior: Behavior,
}

impl<B: ClipboardBackend> AppState<B> {
    pub fn new(store: ItemStore, sink: ClipboardSink<B>, behavior: Behavior) -> Self {
        Self {
            store,
            sink,
            ui: UIState::new(),
            behavior,
        }
    }

    /// Surface the startup load outcome to the user
    pub fn report_load(&mut self, report: &LoadReport) {
        match report {
            LoadReport::Recovered { reason, backup } => {
                warn!("Starting with an empty list: {}", reason);
                let saved_copy = backup
                    .as_ref()
                    .map(|path| format!(" A copy was saved to {}.", path.display()))
                    .unwrap_or_default();
                self.ui.notify_warning(format!(
                    "Could not load saved items, starting with an empty list. ({reason}){saved_copy}"
                ));
            }
            LoadReport::Loaded {
                rejected, renamed, ..
            } if *rejected > 0 || *renamed > 0 => {
                let mut notes = Vec::with_capacity(2);
                if *rejected > 0 {
                    notes.push(format!(
                        "{rejected} unreadable entr{} kept in the file but not shown.",
                        if *rejected == 1 { "y is" } else { "ies are" }
                    ));
                }
                if *renamed > 0 {
                    notes.push(format!(
                        "{renamed} duplicate title{} renamed with a numbered suffix.",
                        if *renamed == 1 { " was" } else { "s were" }
                    ));
                }
                self.ui.notify_warning(notes.join(" "));
            }
            _ => {}
        }
    }

    /// Items newest first, the order they are shown in
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.store.list_items().iter().rev()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().nth(self.ui.selected)
    }

    /// Re-clamp the selection after the item list changed
    pub fn sync_selection(&mut self) {
        let item_count = self.store.len();
        self.ui.selected = self.ui.selected.min(item_count.saturating_sub(1));
        let context_count = self.selected_item().map_or(0, |item| item.contexts().len());
        self.ui.clamp_selection(item_count, context_count);
    }
}
