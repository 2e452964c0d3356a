//! Color palettes for the light and dark themes.

use bvision_core::Theme;
use ratatui::style::Color;

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub focus_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub connected: Color,
    pub disconnected: Color,
    pub switch_on: Color,
    pub switch_off: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Black,
    card_bg: Color::Rgb(18, 21, 28),
    focus_bg: Color::Rgb(28, 33, 43),
    border_dim: Color::DarkGray,
    border_active: Color::Cyan,
    accent: Color::Cyan,
    text_primary: Color::White,
    text_secondary: Color::Gray,
    text_muted: Color::DarkGray,
    connected: Color::Green,
    disconnected: Color::Red,
    switch_on: Color::Cyan,
    switch_off: Color::DarkGray,
};

pub const LIGHT: Palette = Palette {
    background: Color::White,
    card_bg: Color::Rgb(242, 242, 247),
    focus_bg: Color::Rgb(220, 228, 240),
    border_dim: Color::Gray,
    border_active: Color::Blue,
    accent: Color::Blue,
    text_primary: Color::Black,
    text_secondary: Color::DarkGray,
    text_muted: Color::Gray,
    connected: Color::Rgb(0, 128, 0),
    disconnected: Color::Rgb(200, 0, 0),
    switch_on: Color::Blue,
    switch_off: Color::Gray,
};

/// Palette for the current theme
pub fn for_theme(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}
