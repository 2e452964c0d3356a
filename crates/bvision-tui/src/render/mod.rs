//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use bvision_app::state::AppState;
use bvision_app::RenderedRow;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets;

/// Title shown in the header for the current route
fn screen_title(state: &AppState) -> &str {
    if state.on_settings_screen() {
        "Settings"
    } else {
        state.current_route.as_str()
    }
}

/// Render the complete UI (View function in TEA)
///
/// Rows are resolved against the shared state on every frame, so theme,
/// identity and connection writes show up on the next draw.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = palette::for_theme(state.shared.theme());

    frame.render_widget(Block::default().style(Style::default().bg(palette.background)), area);

    let areas = layout::create(area);
    let identity = state.shared.identity();

    frame.render_widget(
        widgets::MainHeader::new(screen_title(state), palette).identity(identity.as_ref()),
        areas.header,
    );

    let announcement = state.announcement.as_deref();

    if state.on_settings_screen() {
        let rows = state.rows();
        let icons = IconSet::new(state.settings.ui.icons);
        frame.render_widget(
            widgets::SettingsList::new(&rows, icons, palette),
            areas.content,
        );

        let focused = rows.iter().find(|row| row.is_focused());
        let (label, hint) = focused
            .map(|row| (focused_label(row), row.hint()))
            .unwrap_or(("", ""));
        frame.render_widget(
            widgets::AccessibilityBar::new(label, hint, palette).announcement(announcement),
            areas.footer,
        );
    } else {
        frame.render_widget(
            widgets::PlaceholderScreen::new(&state.current_route, palette),
            areas.content,
        );
        frame.render_widget(
            widgets::AccessibilityBar::new(&state.current_route, "", palette)
                .announcement(announcement),
            areas.footer,
        );
    }
}

/// Label of the element a screen reader would be on
///
/// Inside an expanded accordion that is the option under the cursor.
fn focused_label(row: &RenderedRow) -> &str {
    match row {
        RenderedRow::Accordion(acc) => acc
            .options
            .iter()
            .find(|o| o.focused)
            .map(|o| o.label.as_str())
            .unwrap_or(acc.label.as_str()),
        RenderedRow::Item(item) => item.resolved.label.as_str(),
    }
}
