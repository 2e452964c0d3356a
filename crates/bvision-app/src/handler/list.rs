//! Settings list handlers: focus, taps and accordions

use bvision_core::{ItemKind, RowKind, Theme};

use crate::state::AppState;

use super::tap::{dispatch_tap, TapOutcome};
use super::{UpdateAction, UpdateResult};

fn option_count(state: &AppState, row: usize) -> Option<usize> {
    match &state.layout.get(row)?.kind {
        RowKind::Accordion { options } => Some(options.len()),
        RowKind::Item(_) => None,
    }
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    state.list_view.select_next(state.layout.len());
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.list_view.select_previous(state.layout.len());
    UpdateResult::none()
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    state.list_view.selected_index = 0;
    UpdateResult::none()
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    state.list_view.selected_index = state.layout.len().saturating_sub(1);
    UpdateResult::none()
}

/// Tap on a plain row
pub fn handle_tap_row(state: &mut AppState, row: usize) -> UpdateResult {
    let Some(entry) = state.layout.get(row) else {
        tracing::warn!("Tap on missing row {}", row);
        return UpdateResult::none();
    };

    if entry.is_accordion() {
        // Accordion headers own their tap
        return handle_toggle_accordion(state, row);
    }

    let signs_out = matches!(
        entry.kind,
        RowKind::Item(ItemKind::Navigation { sign_out: true, .. })
    );
    state.list_view.selected_index = row;

    match dispatch_tap(entry, &state.shared) {
        TapOutcome::Navigate(request) => {
            if signs_out {
                state.announce("Signed out");
            }
            UpdateResult::action(UpdateAction::Navigate(request))
        }
        TapOutcome::ThemeToggled(theme) => {
            state.announce(match theme {
                Theme::Dark => "Dark mode on",
                Theme::Light => "Dark mode off",
            });
            UpdateResult::none()
        }
        TapOutcome::Ignored => UpdateResult::none(),
    }
}

/// Tap on an accordion header
pub fn handle_toggle_accordion(state: &mut AppState, row: usize) -> UpdateResult {
    state.list_view.selected_index = row;
    let Some(acc) = state.list_view.accordion_mut(row) else {
        tracing::warn!("Row {} has no accordion state", row);
        return UpdateResult::none();
    };

    acc.toggle_expanded();
    let expanded = acc.expanded;
    if let Some(entry) = state.layout.get(row) {
        let title = entry.title.clone();
        state.announce(format!(
            "{} {}",
            title,
            if expanded { "expanded" } else { "collapsed" }
        ));
    }
    UpdateResult::none()
}

/// Tap on an accordion option
pub fn handle_select_option(state: &mut AppState, row: usize, option: usize) -> UpdateResult {
    let Some(count) = option_count(state, row) else {
        tracing::warn!("Option select on non-accordion row {}", row);
        return UpdateResult::none();
    };
    if option >= count {
        tracing::warn!("Option {} out of range for row {} ({})", option, row, count);
        return UpdateResult::none();
    }

    let announcement = match (
        state.list_view.accordion_mut(row),
        state.layout.get(row).map(|e| &e.kind),
    ) {
        (Some(acc), Some(RowKind::Accordion { options })) => {
            acc.select(option, count);
            Some(acc.option_label(&options[option], option))
        }
        _ => None,
    };

    if let Some(text) = announcement {
        state.announce(text);
    }
    UpdateResult::none()
}

pub fn handle_option_cursor_next(state: &mut AppState, row: usize) -> UpdateResult {
    if let Some(count) = option_count(state, row) {
        if let Some(acc) = state.list_view.accordion_mut(row) {
            acc.cursor_next(count);
        }
    }
    UpdateResult::none()
}

pub fn handle_option_cursor_previous(state: &mut AppState, row: usize) -> UpdateResult {
    if let Some(count) = option_count(state, row) {
        if let Some(acc) = state.list_view.accordion_mut(row) {
            acc.cursor_previous(count);
        }
    }
    UpdateResult::none()
}
