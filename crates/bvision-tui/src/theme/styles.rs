//! Semantic style builders shared by the settings widgets.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(palette: &Palette) -> Style {
    Style::default().fg(palette.text_primary)
}

pub fn text_secondary(palette: &Palette) -> Style {
    Style::default().fg(palette.text_secondary)
}

pub fn text_muted(palette: &Palette) -> Style {
    Style::default().fg(palette.text_muted)
}

// --- Accent styles ---
pub fn accent(palette: &Palette) -> Style {
    Style::default().fg(palette.accent)
}

pub fn accent_bold(palette: &Palette) -> Style {
    accent(palette).add_modifier(Modifier::BOLD)
}

// --- Container styles ---

/// Rounded container used for the header and the list card
pub fn card_block(palette: &Palette, focused: bool) -> Block<'static> {
    let border = if focused {
        palette.border_active
    } else {
        palette.border_dim
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.card_bg))
}
