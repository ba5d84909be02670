//! src/view/components/notification_overlay.rs
use crate::model::ui_state::{Notification, NotificationLevel};
use crate::view::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::trace;

pub struct NotificationOverlay;

impl NotificationOverlay {
    /// Bottom-right toast sized to the message
    pub fn area(frame_area: Rect, notification: &Notification) -> Rect {
        let width = frame_area.width.min(50);
        let text_width = width.saturating_sub(2).max(1) as usize;
        let lines = notification.message.chars().count().div_ceil(text_width).max(1);
        let height = (lines as u16 + 3).min(frame_area.height);

        Rect {
            x: frame_area.x + frame_area.width - width,
            y: frame_area.y + frame_area.height.saturating_sub(height + 1),
            width,
            height,
        }
    }

    pub fn render(frame: &mut Frame<'_>, notification: &Notification, area: Rect) {
        trace!(level = ?notification.level, "rendering notification");
        frame.render_widget(Clear, area);

        let (border_style, title, icon) = match notification.level {
            NotificationLevel::Info => (Style::default().fg(theme::CYAN), "Info", "ℹ"),
            NotificationLevel::Warning => (Style::default().fg(theme::YELLOW), "Warning", "⚠"),
            NotificationLevel::Error => (Style::default().fg(theme::RED), "Error", "✕"),
            NotificationLevel::Success => (Style::default().fg(theme::GREEN), "Success", "✓"),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {icon} {title} "))
            .title_style(border_style.bold())
            .border_style(border_style)
            .style(Style::default().bg(theme::BACKGROUND));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .split(inner_area);

        let message = Paragraph::new(notification.message.as_str())
            .style(Style::default().fg(theme::FOREGROUND))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left);
        frame.render_widget(message, layout[0]);

        let dismiss = Paragraph::new("Esc to dismiss")
            .style(
                Style::default()
                    .fg(theme::COMMENT)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center);
        frame.render_widget(dismiss, layout[1]);
    }
}
