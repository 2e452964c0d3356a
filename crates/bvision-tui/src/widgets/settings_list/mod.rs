//! Settings list widget
//!
//! Draws the rows produced by `render_list`: one line per plain row with
//! its trailing control, and an accordion header followed by its options
//! when expanded. The list scrolls so the focused line stays visible.

mod styles;


use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use bvision_app::{RenderedAccordion, RenderedItem, RenderedRow, RowControl};

use crate::theme::{icons::IconSet, palette::Palette, styles as theme_styles};

use styles::{
    caption_style, control_style, icon_style, marker_style, option_style, row_style, title_style,
    ICON_WIDTH, MARKER_WIDTH, OPTION_INDENT,
};

/// One terminal line of the list
struct ListLine<'a> {
    left: Line<'a>,
    right: Line<'a>,
    indent: u16,
    focused: bool,
}

/// Settings list over already-resolved rows
pub struct SettingsList<'a> {
    rows: &'a [RenderedRow],
    icons: IconSet,
    palette: &'a Palette,
}

impl<'a> SettingsList<'a> {
    pub fn new(rows: &'a [RenderedRow], icons: IconSet, palette: &'a Palette) -> Self {
        Self {
            rows,
            icons,
            palette,
        }
    }

    fn item_line(&self, item: &'a RenderedItem) -> ListLine<'a> {
        let control = item.resolved.control;
        let text = match control {
            RowControl::Forward => self.icons.forward().to_string(),
            RowControl::StatusBanner { connected } => format!(
                "{} {}",
                self.icons.dot(),
                if connected { "Connected" } else { "Disconnected" }
            ),
            RowControl::Switch { on } => {
                if on {
                    "\u{2501}\u{25cf} On".to_string() // ━●
                } else {
                    "\u{25cb}\u{2501} Off".to_string() // ○━
                }
            }
        };

        ListLine {
            left: self.header_spans(&item.title, &item.image_source, item.focused),
            right: Line::from(Span::styled(text, control_style(self.palette, &control))),
            indent: 0,
            focused: item.focused,
        }
    }

    fn accordion_lines(&self, acc: &'a RenderedAccordion, out: &mut Vec<ListLine<'a>>) {
        let header_focused = acc.focused && !acc.options.iter().any(|o| o.focused);
        out.push(ListLine {
            left: self.header_spans(&acc.title, &acc.image_source, header_focused),
            right: Line::from(vec![
                Span::styled(acc.caption.as_str(), caption_style(self.palette)),
                Span::raw(" "),
                Span::styled(self.icons.chevron(acc.expanded), icon_style(self.palette)),
            ]),
            indent: 0,
            focused: header_focused,
        });

        for option in &acc.options {
            let mark = if option.selected {
                self.icons.check()
            } else {
                " "
            };
            out.push(ListLine {
                left: Line::from(vec![
                    Span::styled(self.marker(option.focused), marker_style(self.palette)),
                    Span::styled(format!("{} ", mark), option_style(self.palette, true)),
                    Span::styled(
                        option.title.as_str(),
                        option_style(self.palette, option.selected),
                    ),
                ]),
                right: Line::default(),
                indent: OPTION_INDENT - MARKER_WIDTH,
                focused: option.focused,
            });
        }
    }

    fn header_spans(&self, title: &'a str, image_source: &str, focused: bool) -> Line<'a> {
        Line::from(vec![
            Span::styled(self.marker(focused), marker_style(self.palette)),
            Span::styled(
                format!("{}  ", self.icons.for_image(image_source)),
                icon_style(self.palette),
            ),
            Span::styled(title, title_style(self.palette, focused)),
        ])
    }

    fn marker(&self, focused: bool) -> String {
        if focused {
            format!("{} ", self.icons.focus())
        } else {
            " ".repeat(MARKER_WIDTH as usize)
        }
    }

    fn lines(&self) -> Vec<ListLine<'a>> {
        let mut lines = Vec::with_capacity(self.rows.len());
        for row in self.rows {
            match row {
                RenderedRow::Item(item) => lines.push(self.item_line(item)),
                RenderedRow::Accordion(acc) => self.accordion_lines(acc, &mut lines),
            }
        }
        lines
    }
}

/// First line to draw so that `focused` fits in `height` lines
fn scroll_offset(focused: Option<usize>, height: usize) -> usize {
    match focused {
        Some(line) if height > 0 && line >= height => line + 1 - height,
        _ => 0,
    }
}

impl Widget for SettingsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = theme_styles::card_block(self.palette, true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width <= MARKER_WIDTH + ICON_WIDTH {
            return;
        }

        let lines = self.lines();
        if lines.is_empty() {
            let empty = Line::from(Span::styled(
                "No settings",
                theme_styles::text_muted(self.palette),
            ));
            buf.set_line(inner.x + 1, inner.y, &empty, inner.width - 1);
            return;
        }

        let offset = scroll_offset(
            lines.iter().position(|l| l.focused),
            inner.height as usize,
        );

        for (i, line) in lines
            .iter()
            .skip(offset)
            .take(inner.height as usize)
            .enumerate()
        {
            let y = inner.y + i as u16;
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            buf.set_style(row_area, row_style(self.palette, line.focused));

            let right_width = line.right.width() as u16;
            let right_x = inner.right().saturating_sub(right_width + 1);
            if right_width > 0 && right_x > inner.x {
                buf.set_line(right_x, y, &line.right, right_width);
            }

            let left_x = inner.x + line.indent;
            let left_limit = if right_width > 0 {
                right_x.saturating_sub(left_x + 1)
            } else {
                inner.right().saturating_sub(left_x)
            };
            buf.set_line(left_x, y, &line.left, left_limit);
        }

        if offset > 0 {
            let more = Span::styled("\u{2191}", theme_styles::text_muted(self.palette)); // ↑
            buf.set_span(inner.right().saturating_sub(1), inner.y, &more, 1);
        }
        if offset + (inner.height as usize) < lines.len() {
            let more = Span::styled("\u{2193}", theme_styles::text_muted(self.palette)); // ↓
            buf.set_span(inner.right().saturating_sub(1), inner.bottom() - 1, &more, 1);
        }
    }
}
