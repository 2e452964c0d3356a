//! Styling helpers for settings list rendering

use ratatui::style::{Modifier, Style};

use bvision_app::RowControl;

use crate::theme::palette::Palette;

/// Width of the focus marker column
pub const MARKER_WIDTH: u16 = 2;
/// Width of the icon column, including its trailing gap
pub const ICON_WIDTH: u16 = 3;
/// Indent of accordion options under their header
pub const OPTION_INDENT: u16 = 6;

/// Background of a whole row line
pub fn row_style(palette: &Palette, focused: bool) -> Style {
    if focused {
        Style::default().bg(palette.focus_bg)
    } else {
        Style::default().bg(palette.card_bg)
    }
}

/// Style for row titles
pub fn title_style(palette: &Palette, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_primary)
    }
}

pub fn icon_style(palette: &Palette) -> Style {
    Style::default().fg(palette.accent)
}

pub fn marker_style(palette: &Palette) -> Style {
    Style::default().fg(palette.border_active)
}

/// Style for the trailing control of a plain row
pub fn control_style(palette: &Palette, control: &RowControl) -> Style {
    match control {
        RowControl::Forward => Style::default().fg(palette.text_muted),
        RowControl::StatusBanner { connected: true } => Style::default().fg(palette.connected),
        RowControl::StatusBanner { connected: false } => {
            Style::default().fg(palette.disconnected)
        }
        RowControl::Switch { on: true } => Style::default()
            .fg(palette.switch_on)
            .add_modifier(Modifier::BOLD),
        RowControl::Switch { on: false } => Style::default().fg(palette.switch_off),
    }
}

/// Style for the accordion caption showing the selected option
pub fn caption_style(palette: &Palette) -> Style {
    Style::default().fg(palette.text_secondary)
}

/// Style for one accordion option
pub fn option_style(palette: &Palette, selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_secondary)
    }
}
