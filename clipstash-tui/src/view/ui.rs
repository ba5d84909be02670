//! src/view/ui.rs
//! ============================================================
//! Frame renderer that draws the whole TUI from a borrowed
//! `AppState`: item list, status bar, then whichever overlay is open.

use std::time::{Duration, Instant};

use clipstash::ClipboardBackend;
use ratatui::prelude::*;
use tracing::{instrument, warn};

use crate::{
    model::{app_state::AppState, ui_state::UIOverlay},
    view::components::{
        add_item_overlay::AddItemOverlay, confirm_overlay::ConfirmOverlay,
        help_overlay::HelpOverlay, item_list::ItemList,
        notification_overlay::NotificationOverlay, status_bar::StatusBar,
    },
};

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: Duration,
}

#[derive(Debug, Default)]
pub struct UIRenderer {
    stats: RenderStats,
}

impl UIRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render<B: ClipboardBackend>(&mut self, f: &mut Frame<'_>, state: &AppState<B>) {
        let start = Instant::now();
        let area = f.area();

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        ItemList::render(f, main[0], state);
        StatusBar::render(f, state, main[1]);

        match state.ui.overlay {
            UIOverlay::None => {}
            UIOverlay::Help => HelpOverlay::render(f, area),
            UIOverlay::AddItem => {
                if let Some(form) = &state.ui.form {
                    AddItemOverlay::render(f, form, area);
                }
            }
            UIOverlay::ConfirmClear => ConfirmOverlay::render(f, state.store.len(), area),
        }

        if let Some(notification) = &state.ui.notification {
            let toast = NotificationOverlay::area(area, notification);
            NotificationOverlay::render(f, notification, toast);
        }

        let dur = start.elapsed();
        self.stats.total += dur;
        self.stats.frames += 1;
        if dur.as_millis() > 16 {
            self.stats.slow += 1;
            warn!(elapsed_ms = dur.as_millis() as u64, "slow frame");
        }
    }
}

/// Rectangle of `percent_x` by `percent_y` centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
