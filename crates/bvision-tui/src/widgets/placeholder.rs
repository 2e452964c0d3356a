//! Stand-in screen for routes outside the settings list

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette::Palette, styles};

/// Centered route name with a hint for returning
pub struct PlaceholderScreen<'a> {
    route: &'a str,
    palette: &'a Palette,
}

impl<'a> PlaceholderScreen<'a> {
    pub fn new(route: &'a str, palette: &'a Palette) -> Self {
        Self { route, palette }
    }
}

impl Widget for PlaceholderScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let top = inner.height.saturating_sub(2) / 2;
        let mut lines: Vec<Line> = (0..top).map(|_| Line::default()).collect();
        lines.push(Line::from(Span::styled(
            self.route,
            styles::accent_bold(self.palette),
        )));
        lines.push(Line::from(Span::styled(
            "Press Esc to go back",
            styles::text_muted(self.palette),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
