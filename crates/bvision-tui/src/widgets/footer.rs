//! Accessibility bar
//!
//! Mirrors what a screen reader would speak for the focused element: its
//! label and hint, followed by the most recent announcement.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette::Palette, styles};

pub struct AccessibilityBar<'a> {
    label: &'a str,
    hint: &'a str,
    announcement: Option<&'a str>,
    palette: &'a Palette,
}

impl<'a> AccessibilityBar<'a> {
    pub fn new(label: &'a str, hint: &'a str, palette: &'a Palette) -> Self {
        Self {
            label,
            hint,
            announcement: None,
            palette,
        }
    }

    pub fn announcement(mut self, announcement: Option<&'a str>) -> Self {
        self.announcement = announcement;
        self
    }
}

impl Widget for AccessibilityBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let mut spans = vec![Span::styled(self.label, styles::text_primary(self.palette))];
        if !self.hint.is_empty() {
            spans.push(Span::styled(" · ", styles::text_muted(self.palette)));
            spans.push(Span::styled(self.hint, styles::text_secondary(self.palette)));
        }
        buf.set_line(inner.x + 1, inner.y, &Line::from(spans), inner.width - 1);

        if inner.height > 1 {
            if let Some(announcement) = self.announcement {
                let line = Line::from(Span::styled(announcement, styles::accent(self.palette)));
                buf.set_line(inner.x + 1, inner.y + 1, &line, inner.width - 1);
            }
        }
    }
}
