//! Abstract input key event, independent of terminal library.
//!
//! Keeps bvision-app free of crossterm so the settings engine can sit
//! behind any front-end.

/// Abstract input key event.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Backspace,
}

impl InputKey {
    /// Keys that "tap" the focused element
    pub fn is_activate(&self) -> bool {
        matches!(self, InputKey::Enter | InputKey::Char(' '))
    }
}
