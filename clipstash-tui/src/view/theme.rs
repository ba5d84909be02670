//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Colors are from the official Catppuccin theme specification:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const BLUE: Color = Color::Rgb(137, 180, 250); // Blue
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn item_title_style() -> Style {
    Style::default().fg(BLUE).add_modifier(Modifier::BOLD)
}

pub fn context_label_style() -> Style {
    Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD)
}

pub fn context_value_style() -> Style {
    Style::default().fg(FOREGROUND)
}

pub fn selected_context_style() -> Style {
    Style::default()
        .bg(CURRENT_LINE)
        .fg(GREEN)
        .add_modifier(Modifier::BOLD)
}

pub fn list_block_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn list_border_style() -> Style {
    Style::default().fg(PURPLE)
}

pub fn empty_message_style() -> Style {
    Style::default().fg(COMMENT).add_modifier(Modifier::ITALIC)
}

pub fn focused_input_style() -> Style {
    Style::default().fg(YELLOW)
}

pub fn input_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn danger_style() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}
