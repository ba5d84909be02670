//! Yes/no dialog shown before clearing every item
use crate::view::{centered_rect, theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

pub struct ConfirmOverlay;

impl ConfirmOverlay {
    pub fn render(frame: &mut Frame<'_>, item_count: usize, area: Rect) {
        let overlay_area = centered_rect(50, 25, area);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Confirm ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(theme::RED))
            .style(Style::default().bg(theme::BACKGROUND));

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Are you sure you want to clear all items?",
                theme::danger_style(),
            )),
            Line::from(format!(
                "{item_count} item{} will be removed.",
                if item_count == 1 { "" } else { "s" }
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", theme::focused_input_style()),
                Span::raw(" yes   "),
                Span::styled("n", theme::focused_input_style()),
                Span::raw(" no"),
            ]),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(theme::FOREGROUND))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, overlay_area);
    }
}
