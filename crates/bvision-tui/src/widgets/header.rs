//! Header bar widget
//!
//! Shows the screen title on the left and the signed-in user on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use bvision_core::Identity;

use crate::theme::{palette::Palette, styles};

/// Main header showing the current screen and identity
pub struct MainHeader<'a> {
    title: &'a str,
    identity: Option<&'a Identity>,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str, palette: &'a Palette) -> Self {
        Self {
            title,
            identity: None,
            palette,
        }
    }

    pub fn identity(mut self, identity: Option<&'a Identity>) -> Self {
        self.identity = identity;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let title = Line::from(Span::styled(self.title, styles::accent_bold(self.palette)));
        buf.set_line(inner.x + 1, inner.y, &title, inner.width - 1);

        let user = match self.identity {
            Some(identity) => Span::styled(
                identity.nickname.as_str(),
                styles::text_secondary(self.palette),
            ),
            None => Span::styled("Signed out", styles::text_muted(self.palette)),
        };
        let user_width = user.content.width() as u16;
        let title_width = self.title.width() as u16 + 2;
        if user_width + title_width < inner.width {
            let x = inner.right() - user_width - 1;
            buf.set_line(x, inner.y, &Line::from(user), user_width);
        }
    }
}
