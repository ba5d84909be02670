//! src/view/components/add_item_overlay.rs
//! ============================================================================
//! # AddItemOverlay: title input plus a growable list of label/value rows

use crate::model::ui_state::{AddItemForm, FormField, UIOverlay};
use crate::view::{centered_rect, theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

pub struct AddItemOverlay;

impl AddItemOverlay {
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(frame: &mut Frame<'_>, form: &AddItemForm, area: Rect) {
        let overlay_area = centered_rect(70, 80, area);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", UIOverlay::AddItem.title()))
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(theme::PURPLE))
            .style(Style::default().bg(theme::BACKGROUND));
        let inner = block.inner(overlay_area);
        frame.render_widget(block, overlay_area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let title_area = layout[0];
        Self::render_input(
            frame,
            " Title ",
            &form.title,
            form.focus == FormField::Title,
            title_area,
        );

        frame.render_widget(
            Paragraph::new("Contexts").style(theme::context_label_style()),
            layout[1],
        );

        // Each row takes three lines; scroll so the focused one stays visible
        let rows_area = layout[2];
        let visible_rows = (rows_area.height / 3).max(1) as usize;
        let focused_row = match form.focus {
            FormField::Title => 0,
            FormField::Label(i) | FormField::Value(i) => i,
        };
        let first_row = focused_row.saturating_sub(visible_rows - 1);

        for (slot, (index, row)) in form
            .rows
            .iter()
            .enumerate()
            .skip(first_row)
            .take(visible_rows)
            .enumerate()
        {
            let row_area = Rect {
                x: rows_area.x,
                y: rows_area.y + (slot as u16) * 3,
                width: rows_area.width,
                height: 3,
            };
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(row_area);

            Self::render_input(
                frame,
                &format!(" Label {} ", index + 1),
                &row.label,
                form.focus == FormField::Label(index),
                columns[0],
            );
            Self::render_input(
                frame,
                " Value ",
                &row.value,
                form.focus == FormField::Value(index),
                columns[1],
            );
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", theme::focused_input_style()),
            Span::raw(" next • "),
            Span::styled("Ctrl+N", theme::focused_input_style()),
            Span::raw(" add context • "),
            Span::styled("Ctrl+D", theme::focused_input_style()),
            Span::raw(" remove • "),
            Span::styled("Enter", theme::focused_input_style()),
            Span::raw(" save • "),
            Span::styled("Esc", theme::focused_input_style()),
            Span::raw(" cancel"),
        ]))
        .style(Style::default().fg(theme::COMMENT))
        .alignment(Alignment::Center);
        frame.render_widget(help, layout[3]);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_input(frame: &mut Frame<'_>, title: &str, text: &str, focused: bool, area: Rect) {
        let border = if focused {
            theme::focused_input_style()
        } else {
            theme::input_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(border);

        // Keep the tail of long input in view
        let room = area.width.saturating_sub(3) as usize;
        let length = text.chars().count();
        let shown: String = text.chars().skip(length.saturating_sub(room)).collect();
        let cursor_x = area.x + 1 + shown.chars().count() as u16;

        frame.render_widget(
            Paragraph::new(shown).style(Style::default().fg(theme::FOREGROUND)).block(block),
            area,
        );

        if focused && area.height >= 3 {
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}
