//! Help overlay listing key bindings by screen
use crate::view::{centered_rect, theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame<'_>, area: Rect) {
        let overlay_area = centered_rect(70, 80, area);
        frame.render_widget(Clear, overlay_area);

        let help_paragraph = Paragraph::new(Text::from(Self::lines()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .border_style(Style::default().fg(theme::CYAN))
                    .style(Style::default().bg(theme::BACKGROUND)),
            )
            .style(Style::default().fg(theme::FOREGROUND))
            .wrap(Wrap { trim: false });

        frame.render_widget(help_paragraph, overlay_area);
    }

    fn section(name: &'static str) -> Line<'static> {
        Line::from(Span::styled(name, Style::default().fg(theme::CYAN)))
    }

    fn lines() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "📋 Clipboard Manager",
                Style::default().fg(theme::YELLOW).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::section("Items:"),
            Line::from("  ↑↓ / j k       Select item"),
            Line::from("  ←→ / h l       Select context"),
            Line::from("  Enter / c      Copy selected context value"),
            Line::from("  a              Copy all contexts as 'label: value' lines"),
            Line::from("  n              Add a new item"),
            Line::from("  d / Del        Delete selected item"),
            Line::from("  X              Clear all items"),
            Line::from(""),
            Self::section("Add item:"),
            Line::from("  Tab / Shift+Tab  Next / previous field"),
            Line::from("  Ctrl+N           Add context row"),
            Line::from("  Ctrl+D           Remove focused row"),
            Line::from("  Enter            Save item"),
            Line::from("  Esc              Cancel"),
            Line::from(""),
            Self::section("Application:"),
            Line::from("  ?              Toggle this help"),
            Line::from("  Esc            Dismiss notification"),
            Line::from("  q / Ctrl+C     Save and quit"),
        ]
    }
}
