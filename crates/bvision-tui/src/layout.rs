//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Route title and signed-in user
    pub header: Rect,

    /// Settings list or placeholder screen
    pub content: Rect,

    /// Accessibility label, hint and last announcement
    pub footer: Rect,
}

/// Split the screen into header, content and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: border + title row + border
        Constraint::Min(3),    // Content
        Constraint::Length(4), // Footer: border + label/hint row + announcement row + border
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}
