//! Key event handlers per screen

use bvision_core::RowKind;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.on_settings_screen() {
        handle_key_settings(state, key)
    } else {
        handle_key_other_screen(key)
    }
}

/// Any screen other than the settings list is a placeholder we can only leave
fn handle_key_other_screen(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Char('q') | InputKey::Left => {
            Some(Message::GoBack)
        }
        _ => None,
    }
}

fn handle_key_settings(state: &AppState, key: InputKey) -> Option<Message> {
    let row = state.list_view.selected_index;

    // Focused accordion gets first pick
    if let Some(msg) = handle_key_accordion(state, row, key) {
        return Some(msg);
    }

    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::Quit),

        // Row navigation
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Char('g') | InputKey::Home => Some(Message::SelectFirst),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLast),

        // Tap
        k if k.is_activate() && row < state.layout.len() => Some(Message::TapRow(row)),

        _ => None,
    }
}

fn handle_key_accordion(state: &AppState, row: usize, key: InputKey) -> Option<Message> {
    let RowKind::Accordion { options } = &state.layout.get(row)?.kind else {
        return None;
    };
    let acc = state.list_view.accordion(row)?;

    match key {
        InputKey::Char(' ') => Some(Message::ToggleAccordion(row)),
        InputKey::Enter if !acc.expanded || options.is_empty() => {
            Some(Message::ToggleAccordion(row))
        }
        InputKey::Enter => Some(Message::SelectOption {
            row,
            option: acc.cursor,
        }),
        InputKey::Left | InputKey::Char('h') if acc.expanded => {
            Some(Message::OptionCursorPrevious(row))
        }
        InputKey::Right | InputKey::Char('l') if acc.expanded => {
            Some(Message::OptionCursorNext(row))
        }
        _ => None,
    }
}
