//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, list, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Settings List Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => list::handle_select_next(state),
        Message::SelectPrevious => list::handle_select_previous(state),
        Message::SelectFirst => list::handle_select_first(state),
        Message::SelectLast => list::handle_select_last(state),
        Message::TapRow(row) => list::handle_tap_row(state, row),
        Message::ToggleAccordion(row) => list::handle_toggle_accordion(state, row),
        Message::SelectOption { row, option } => list::handle_select_option(state, row, option),
        Message::OptionCursorNext(row) => list::handle_option_cursor_next(state, row),
        Message::OptionCursorPrevious(row) => list::handle_option_cursor_previous(state, row),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::GoBack => UpdateResult::action(UpdateAction::GoBack),

        Message::RouteChanged(route) => {
            tracing::debug!("Route changed: {} -> {}", state.current_route, route);
            state.current_route = route;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Shared State Messages
        // ─────────────────────────────────────────────────────────
        Message::ConnectionChanged {
            peripheral,
            connected,
        } => {
            // The flag itself is read from the store at render time
            state.announce(format!(
                "{} {}",
                peripheral,
                if connected { "connected" } else { "disconnected" }
            ));
            UpdateResult::none()
        }

        Message::SharedStateChanged => UpdateResult::none(),
    }
}
