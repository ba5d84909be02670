//! Item list: every item with its contexts, newest first
use clipstash::{ClipboardBackend, Item};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct ItemList;

impl ItemList {
    pub fn render<B: ClipboardBackend>(frame: &mut Frame<'_>, area: Rect, state: &AppState<B>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" 📋 Clipboard Manager ")
            .title_alignment(Alignment::Center)
            .style(theme::list_block_style())
            .border_style(theme::list_border_style());

        if state.store.is_empty() {
            let empty = Paragraph::new("No items yet. Press 'n' to add one.")
                .style(theme::empty_message_style())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem<'_>> = state
            .visible_items()
            .enumerate()
            .map(|(index, item)| {
                let selected_context =
                    (index == state.ui.selected).then_some(state.ui.selected_context);
                ListItem::new(Self::item_text(item, selected_context))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("▶ ")
            .highlight_spacing(ratatui::widgets::HighlightSpacing::Always);

        let mut list_state = ListState::default().with_selected(Some(state.ui.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn item_text(item: &Item, selected_context: Option<usize>) -> Text<'_> {
        let mut lines = Vec::with_capacity(item.contexts().len() + 2);
        lines.push(Line::from(Span::styled(item.title(), theme::item_title_style())));

        let label_width = item
            .contexts()
            .iter()
            .map(|c| c.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(16);

        for (index, context) in item.contexts().iter().enumerate() {
            let label = format!("  {:<width$}  ", format!("{}:", context.label), width = label_width + 1);
            let line = if selected_context == Some(index) {
                Line::from(vec![
                    Span::styled(label, theme::selected_context_style()),
                    Span::styled(context.value.as_str(), theme::selected_context_style()),
                ])
            } else {
                Line::from(vec![
                    Span::styled(label, theme::context_label_style()),
                    Span::styled(context.value.as_str(), theme::context_value_style()),
                ])
            };
            lines.push(line);
        }

        lines.push(Line::default());
        Text::from(lines)
    }
}
