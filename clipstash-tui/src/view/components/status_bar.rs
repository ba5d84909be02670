//! src/view/components/status_bar.rs
//!
//! One line at the bottom: item and context totals and the data file on the
//! left, key hints on the right.

use crate::{model::app_state::AppState, view::theme};
use clipstash::ClipboardBackend;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

pub struct StatusBar;

impl StatusBar {
    pub fn render<B: ClipboardBackend>(frame: &mut Frame<'_>, state: &AppState<B>, area: Rect) {
        let stats = state.store.stats();
        let left_text = format!(
            " Items: {} | Contexts: {} | {}",
            stats.total_items,
            stats.total_contexts,
            state.store.path().display()
        );

        let right_text = if state.behavior.show_key_hints {
            "n add • Enter copy • a copy all • d delete • ? help • q quit "
        } else {
            ""
        };

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Paragraph::new(left_text)
            .style(Style::default().fg(theme::FOREGROUND).bg(theme::BACKGROUND))
            .alignment(Alignment::Left)
            .render(layout[0], frame.buffer_mut());

        Paragraph::new(right_text)
            .style(Style::default().fg(theme::COMMENT).bg(theme::BACKGROUND))
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }
}
