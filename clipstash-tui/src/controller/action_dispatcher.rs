//! Applies [`Action`]s to the [`AppState`].
//!
//! This is the only place that calls store mutations and clipboard copies.
//! Every outcome becomes a notification; no failure leaves the loop.

use clipstash::{ClipError, ClipResult, ClipboardBackend, CopyOutcome, Item};
use tracing::{debug, info, warn};

use crate::controller::actions::Action;
use crate::model::app_state::AppState;
use crate::model::ui_state::UIOverlay;

const NO_ITEMS_TO_CLEAR: &str = "There are no items to clear.";
const DUPLICATE_TITLE: &str = "An item with this title already exists!";

#[derive(Debug, Default, Clone, Copy)]
pub struct DispatcherStats {
    pub total_actions: u64,
    pub failed_actions: u64,
}

#[derive(Debug, Default)]
pub struct ActionDispatcher {
    stats: DispatcherStats,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> DispatcherStats {
        self.stats
    }

    /// Apply `action`. Returns `false` when the application should exit.
    pub fn handle<B: ClipboardBackend>(&mut self, state: &mut AppState<B>, action: Action) -> bool {
        debug!("Dispatching action: {:?}", action);
        self.stats.total_actions += 1;

        match action {
            Action::Quit => return false,

            Action::MoveSelectionUp => {
                state.ui.selected = state.ui.selected.saturating_sub(1);
                state.ui.selected_context = 0;
            }
            Action::MoveSelectionDown => {
                if state.ui.selected + 1 < state.store.len() {
                    state.ui.selected += 1;
                }
                state.ui.selected_context = 0;
            }
            Action::SelectNextContext => {
                let count = state.selected_item().map_or(0, |item| item.contexts().len());
                if state.ui.selected_context + 1 < count {
                    state.ui.selected_context += 1;
                }
            }
            Action::SelectPrevContext => {
                state.ui.selected_context = state.ui.selected_context.saturating_sub(1);
            }

            Action::CopySelectedContext => {
                let index = state.ui.selected_context;
                let result = match state.selected_item().cloned() {
                    Some(item) => state.sink.copy_context(&item, index),
                    None => Ok(CopyOutcome::NothingToCopy),
                };
                self.report_copy(state, result);
            }
            Action::CopyAllSelected => {
                let result = match state.selected_item().map(Item::copy_all_text) {
                    Some(text) => state.sink.copy(&text),
                    None => Ok(CopyOutcome::NothingToCopy),
                };
                self.report_copy(state, result);
            }

            Action::DeleteSelected => {
                if let Some(item) = state.selected_item().cloned() {
                    match state.store.delete_item(&item) {
                        Ok(_) => state.ui.notify_info(format!("Deleted \"{}\".", item.title())),
                        Err(e) => self.report_error(state, &e),
                    }
                    state.sync_selection();
                }
            }

            Action::RequestClearAll => {
                if state.store.is_empty() {
                    state.ui.notify_info(NO_ITEMS_TO_CLEAR);
                } else if state.behavior.confirm_destructive_ops {
                    state.ui.overlay = UIOverlay::ConfirmClear;
                } else {
                    self.clear_all(state);
                }
            }
            Action::ConfirmClearAll => {
                state.ui.close_overlay();
                self.clear_all(state);
            }

            Action::OpenAddForm => {
                state.ui.open_form(state.behavior.initial_context_rows);
            }
            Action::FormInput(c) => {
                if let Some(form) = state.ui.form.as_mut() {
                    form.insert_char(c);
                }
            }
            Action::FormBackspace => {
                if let Some(form) = state.ui.form.as_mut() {
                    form.backspace();
                }
            }
            Action::FormNextField => {
                if let Some(form) = state.ui.form.as_mut() {
                    form.focus_next();
                }
            }
            Action::FormPrevField => {
                if let Some(form) = state.ui.form.as_mut() {
                    form.focus_prev();
                }
            }
            Action::FormAddRow => {
                if let Some(form) = state.ui.form.as_mut() {
                    form.add_row();
                }
            }
            Action::FormRemoveRow => {
                if let Some(form) = state.ui.form.as_mut() {
                    form.remove_focused_row();
                }
            }
            Action::SubmitForm => self.submit_form(state),

            Action::ToggleHelp => state.ui.toggle_help(),
            Action::CloseOverlay => state.ui.close_overlay(),
            Action::DismissNotification => state.ui.dismiss_notification(),
            Action::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
            }
        }

        state.ui.request_redraw();
        true
    }

    fn submit_form<B: ClipboardBackend>(&mut self, state: &mut AppState<B>) {
        let Some(form) = state.ui.form.as_ref() else {
            return;
        };
        let title = form.title.clone();
        let contexts = form.contexts();

        let added = state
            .store
            .add_item(&title, contexts)
            .map(|item| item.title().to_string());

        match added {
            Ok(added_title) => {
                info!("Added item '{}' from form", added_title);
                state.ui.close_overlay();
                state.ui.selected = 0;
                state.ui.selected_context = 0;
            }
            // The item is in memory even though it was not written
            Err(e) if e.is_persistence_error() => {
                state.ui.close_overlay();
                state.ui.selected = 0;
                self.report_error(state, &e);
            }
            Err(e) if e.is_informational() => {
                state.ui.notify_info(DUPLICATE_TITLE);
            }
            Err(e) => {
                state.ui.notify_warning(e.to_string());
            }
        }
    }

    fn clear_all<B: ClipboardBackend>(&mut self, state: &mut AppState<B>) {
        match state.store.clear_all() {
            Ok(()) => state.ui.notify_info("All items cleared."),
            Err(e) => self.report_error(state, &e),
        }
        state.sync_selection();
    }

    fn report_copy<B: ClipboardBackend>(
        &mut self,
        state: &mut AppState<B>,
        result: ClipResult<CopyOutcome>,
    ) {
        match result {
            Ok(outcome @ CopyOutcome::Copied { .. }) => state.ui.notify_success(outcome.message()),
            Ok(outcome) => state.ui.notify_info(outcome.message()),
            Err(e) => self.report_error(state, &e),
        }
    }

    fn report_error<B: ClipboardBackend>(&mut self, state: &mut AppState<B>, error: &ClipError) {
        self.stats.failed_actions += 1;
        warn!("Action failed: {}", error);
        state.ui.notify_error(error.to_string());
    }
}
