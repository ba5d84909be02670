//! Maps terminal events to [`Action`]s, depending on which overlay is open,
//! and drives the draw/read/dispatch loop until the user quits.

use clipstash::ClipboardBackend;
use crossterm::event::{Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use crate::controller::action_dispatcher::ActionDispatcher;
use crate::controller::actions::Action;
use crate::error::AppError;
use crate::model::app_state::AppState;
use crate::model::ui_state::{UIOverlay, UIState};

pub struct EventLoop;

impl EventLoop {
    /// Draw when needed, read one event, dispatch it; repeat until quit.
    ///
    /// The item list is saved once the loop ends, whether it ended by quit
    /// or by an error. A loop error takes precedence over a save error.
    pub fn run<B: ClipboardBackend>(
        state: &mut AppState<B>,
        dispatcher: &mut ActionDispatcher,
        mut draw: impl FnMut(&AppState<B>) -> Result<(), AppError>,
        mut next_event: impl FnMut() -> Result<TerminalEvent, AppError>,
    ) -> Result<(), AppError> {
        let outcome = Self::drive(state, dispatcher, &mut draw, &mut next_event);

        // Shutdown hook
        let saved = state.store.save().map_err(AppError::from);
        match (outcome, saved) {
            (Err(e), Err(save_error)) => {
                warn!("Failed to save items on exit: {}", save_error);
                Err(e)
            }
            (outcome, saved) => outcome.and(saved),
        }
    }

    fn drive<B: ClipboardBackend>(
        state: &mut AppState<B>,
        dispatcher: &mut ActionDispatcher,
        draw: &mut impl FnMut(&AppState<B>) -> Result<(), AppError>,
        next_event: &mut impl FnMut() -> Result<TerminalEvent, AppError>,
    ) -> Result<(), AppError> {
        loop {
            if state.ui.needs_redraw() {
                draw(&*state)?;
                state.ui.clear_redraw();
            }

            let Some(action) = Self::map_event(&state.ui, next_event()?) else {
                continue;
            };

            if !dispatcher.handle(state, action) {
                let stats = dispatcher.stats();
                info!(
                    total_actions = stats.total_actions,
                    failed_actions = stats.failed_actions,
                    "Quit requested"
                );
                return Ok(());
            }
        }
    }

    pub fn map_event(ui: &UIState, event: TerminalEvent) -> Option<Action> {
        match event {
            TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Self::map_key(ui, key)
            }
            TerminalEvent::Resize(width, height) => Some(Action::Resize(width, height)),
            _ => None,
        }
    }

    fn map_key(ui: &UIState, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        match ui.overlay {
            UIOverlay::AddItem => Self::map_form_key(key),
            UIOverlay::ConfirmClear => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    Some(Action::ConfirmClearAll)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(Action::CloseOverlay)
                }
                _ => None,
            },
            UIOverlay::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    Some(Action::ToggleHelp)
                }
                _ => None,
            },
            UIOverlay::None => Self::map_browse_key(ui, key),
        }
    }

    fn map_browse_key(ui: &UIState, key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveSelectionDown,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::SelectNextContext,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::SelectPrevContext,
            KeyCode::Char('c') | KeyCode::Enter => Action::CopySelectedContext,
            KeyCode::Char('a') => Action::CopyAllSelected,
            KeyCode::Char('d') | KeyCode::Delete => Action::DeleteSelected,
            KeyCode::Char('X') => Action::RequestClearAll,
            KeyCode::Char('n') => Action::OpenAddForm,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Esc if ui.notification.is_some() => Action::DismissNotification,
            _ => return None,
        };
        Some(action)
    }

    fn map_form_key(key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char('n') if ctrl => Action::FormAddRow,
            KeyCode::Char('d') if ctrl => Action::FormRemoveRow,
            KeyCode::Char(c) if !ctrl => Action::FormInput(c),
            KeyCode::Backspace => Action::FormBackspace,
            KeyCode::Tab | KeyCode::Down => Action::FormNextField,
            KeyCode::BackTab | KeyCode::Up => Action::FormPrevField,
            KeyCode::Enter => Action::SubmitForm,
            KeyCode::Esc => Action::CloseOverlay,
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::app_state::Behavior;
    use clipstash::{ClipboardSink, ItemStore, MemoryClipboard};
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn key(code: KeyCode) -> TerminalEvent {
        press(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_browse_bindings() {
        let ui = UIState::new();
        assert_eq!(EventLoop::map_event(&ui, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            EventLoop::map_event(&ui, key(KeyCode::Char('a'))),
            Some(Action::CopyAllSelected)
        );
        assert_eq!(
            EventLoop::map_event(&ui, key(KeyCode::Enter)),
            Some(Action::CopySelectedContext)
        );
        assert_eq!(
            EventLoop::map_event(&ui, key(KeyCode::Char('X'))),
            Some(Action::RequestClearAll)
        );
        assert_eq!(EventLoop::map_event(&ui, key(KeyCode::Esc)), None);
    }

    #[test]
    fn test_form_swallows_letters() {
        let mut ui = UIState::new();
        ui.open_form(3);

        assert_eq!(
            EventLoop::map_event(&ui, key(KeyCode::Char('q'))),
            Some(Action::FormInput('q'))
        );
        assert_eq!(
            EventLoop::map_event(&ui, press(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Action::FormAddRow)
        );
        assert_eq!(
            EventLoop::map_event(&ui, key(KeyCode::Enter)),
            Some(Action::SubmitForm)
        );
        assert_eq!(
            EventLoop::map_event(&ui, press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_confirm_bindings() {
        let mut ui = UIState::new();
        ui.overlay = UIOverlay::ConfirmClear;
        assert_eq!(
            EventLoop::map_event(&ui, key(KeyCode::Char('y'))),
            Some(Action::ConfirmClearAll)
        );
        assert_eq!(
            EventLoop::map_event(&ui, key(KeyCode::Esc)),
            Some(Action::CloseOverlay)
        );
        assert_eq!(EventLoop::map_event(&ui, key(KeyCode::Char('d'))), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let ui = UIState::new();
        let release = TerminalEvent::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(EventLoop::map_event(&ui, release), None);
        assert_eq!(
            EventLoop::map_event(&ui, TerminalEvent::Resize(80, 24)),
            Some(Action::Resize(80, 24))
        );
    }

    fn legacy_state() -> (tempfile::TempDir, AppState<MemoryClipboard>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clipboard_data.json");
        std::fs::write(&path, r#"["just a string"]"#).unwrap();

        let (store, _) = ItemStore::open(&path);
        let state = AppState::new(
            store,
            ClipboardSink::new(MemoryClipboard::new()),
            Behavior::default(),
        );
        (dir, state)
    }

    fn saved_json(state: &AppState<MemoryClipboard>) -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(state.store.path()).unwrap()).unwrap()
    }

    #[test]
    fn test_run_saves_on_quit() {
        let (_dir, mut state) = legacy_state();
        let mut dispatcher = ActionDispatcher::new();
        let mut events = vec![key(KeyCode::Down), key(KeyCode::Char('q'))].into_iter();
        let mut frames = 0;

        EventLoop::run(
            &mut state,
            &mut dispatcher,
            |_| {
                frames += 1;
                Ok(())
            },
            || {
                events
                    .next()
                    .ok_or_else(|| AppError::Terminal("input closed".into()))
            },
        )
        .unwrap();

        assert_eq!(frames, 2);
        assert_eq!(dispatcher.stats().total_actions, 2);
        // Nothing was edited, yet the file is rewritten in the current shape
        assert_eq!(
            saved_json(&state),
            serde_json::json!([{
                "title": "Untitled",
                "contexts": [{"label": "Content", "value": "just a string"}],
                "type": "multi_context"
            }])
        );
    }

    #[test]
    fn test_run_saves_when_input_fails() {
        let (_dir, mut state) = legacy_state();
        let mut dispatcher = ActionDispatcher::new();

        let err = EventLoop::run(
            &mut state,
            &mut dispatcher,
            |_| Ok(()),
            || Err(AppError::Terminal("input closed".into())),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::Terminal(_)));
        assert_eq!(saved_json(&state)[0]["type"], "multi_context");
    }
}
