//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::list::RenderedRow;
use crate::message::Message;
use crate::navigation::NavigationRequest;
use crate::state::test_support::test_state;
use crate::state::AppState;
use bvision_core::{routes, Identity, Layout, LayoutEntry, Peripheral, Theme};

/// Index of the first row titled `title` in the built-in layout
fn row_of(state: &AppState, title: &str) -> usize {
    state
        .layout
        .iter()
        .position(|e| e.title == title)
        .unwrap()
}

fn accordion_row(state: &AppState, row: usize) -> crate::list::RenderedAccordion {
    match state.rows().remove(row) {
        RenderedRow::Accordion(acc) => acc,
        other => panic!("expected accordion, got {:?}", other),
    }
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let (mut state, _links) = test_state();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_any_screen() {
    let (mut state, _links) = test_state();
    state.current_route = routes::PROFILE.to_string();
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
}

#[test]
fn test_movement_keys() {
    let (state, _links) = test_state();
    assert_eq!(
        handle_key(&state, InputKey::Char('j')),
        Some(Message::SelectNext)
    );
    assert_eq!(handle_key(&state, InputKey::Up), Some(Message::SelectPrevious));
    assert_eq!(handle_key(&state, InputKey::End), Some(Message::SelectLast));
    assert_eq!(handle_key(&state, InputKey::Home), Some(Message::SelectFirst));
}

#[test]
fn test_select_wraps_around() {
    let (mut state, _links) = test_state();
    update(&mut state, Message::SelectPrevious);
    assert_eq!(state.list_view.selected_index, state.layout.len() - 1);
    update(&mut state, Message::SelectNext);
    assert_eq!(state.list_view.selected_index, 0);
}

#[test]
fn test_other_screen_keys_go_back() {
    let (mut state, _links) = test_state();
    state.current_route = routes::PROFILE.to_string();
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::GoBack));
    assert_eq!(handle_key(&state, InputKey::Backspace), Some(Message::GoBack));
    assert_eq!(handle_key(&state, InputKey::Char('j')), None);
}

#[test]
fn test_go_back_produces_action() {
    let (mut state, _links) = test_state();
    let result = update(&mut state, Message::GoBack);
    assert_eq!(result.action, Some(UpdateAction::GoBack));
}

#[test]
fn test_tap_navigation_row_returns_push_action() {
    let (mut state, _links) = test_state();
    let profile = row_of(&state, "Profile");

    let result = update(&mut state, Message::TapRow(profile));
    assert_eq!(
        result.action,
        Some(UpdateAction::Navigate(NavigationRequest::Push(
            routes::PROFILE.to_string()
        )))
    );
}

#[test]
fn test_tap_log_out_scenario() {
    let (mut state, _links) = test_state();
    state
        .shared
        .set_identity(Some(Identity::new("ana@example.com", "ana")));
    let log_out = row_of(&state, "Log Out");

    assert_eq!(state.rows()[log_out].hint(), "Double tap to Log Out");

    let result = update(&mut state, Message::TapRow(log_out));
    assert_eq!(state.shared.identity(), None);
    assert_eq!(
        result.action,
        Some(UpdateAction::Navigate(NavigationRequest::Navigate(
            routes::SIGN_IN.to_string()
        )))
    );
}

#[test]
fn test_delete_account_hint_and_push() {
    let (mut state, _links) = test_state();
    let delete = row_of(&state, "Delete Account");
    assert_eq!(state.rows()[delete].hint(), "Double tap to Delete Account");

    let result = update(&mut state, Message::TapRow(delete));
    assert!(matches!(
        result.action,
        Some(UpdateAction::Navigate(NavigationRequest::Push(ref r))) if r == routes::DELETE_ACCOUNT
    ));
}

#[test]
fn test_repeated_toggle_taps_alternate() {
    let (mut state, _links) = test_state();
    let toggle = row_of(&state, "Dark Mode");

    let mut themes = Vec::new();
    for _ in 0..5 {
        update(&mut state, Message::TapRow(toggle));
        themes.push(state.shared.theme());
    }
    assert_eq!(
        themes,
        vec![
            Theme::Dark,
            Theme::Light,
            Theme::Dark,
            Theme::Light,
            Theme::Dark
        ]
    );
}

#[test]
fn test_status_row_reflects_transport_writes() {
    let (mut state, links) = test_state();
    let glasses = row_of(&state, "Glasses");
    assert_eq!(state.rows()[glasses].label(), "Glasses disconnected");

    links.report(Peripheral::Glasses, true);
    update(
        &mut state,
        Message::ConnectionChanged {
            peripheral: Peripheral::Glasses,
            connected: true,
        },
    );

    assert_eq!(state.rows()[glasses].label(), "Glasses connected");
    assert_eq!(state.announcement.as_deref(), Some("Glasses connected"));

    // Tapping a status row does nothing
    let result = update(&mut state, Message::TapRow(glasses));
    assert!(result.action.is_none());
}

#[test]
fn test_accordion_select_option_scenario() {
    let (mut state, _links) = test_state();
    let voice = row_of(&state, "Voice Speed");

    assert_eq!(accordion_row(&state, voice).caption, "Normal");

    update(&mut state, Message::ToggleAccordion(voice));
    update(&mut state, Message::SelectOption { row: voice, option: 2 });

    let acc = accordion_row(&state, voice);
    assert_eq!(acc.caption, "Fast");
    assert!(acc.expanded);
    let marked: Vec<usize> = acc
        .options
        .iter()
        .enumerate()
        .filter(|(_, o)| o.selected)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(marked, vec![2]);
    assert_eq!(state.announcement.as_deref(), Some("Fast selected"));
}

#[test]
fn test_accordion_toggle_never_changes_selection() {
    let (mut state, _links) = test_state();
    let voice = row_of(&state, "Voice Speed");
    update(&mut state, Message::SelectOption { row: voice, option: 1 });

    for _ in 0..3 {
        update(&mut state, Message::ToggleAccordion(voice));
        assert_eq!(accordion_row(&state, voice).caption, "Slow");
    }
}

#[test]
fn test_accordion_out_of_range_option_ignored() {
    let (mut state, _links) = test_state();
    let voice = row_of(&state, "Voice Speed");
    update(&mut state, Message::SelectOption { row: voice, option: 9 });
    assert_eq!(accordion_row(&state, voice).caption, "Normal");
}

#[test]
fn test_accordion_keys() {
    let (mut state, _links) = test_state();
    let voice = row_of(&state, "Voice Speed");
    state.list_view.selected_index = voice;

    // Collapsed: Enter opens, arrows do not move the option cursor
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::ToggleAccordion(voice))
    );
    assert_eq!(handle_key(&state, InputKey::Right), None);

    update(&mut state, Message::ToggleAccordion(voice));
    assert_eq!(
        handle_key(&state, InputKey::Right),
        Some(Message::OptionCursorNext(voice))
    );

    update(&mut state, Message::OptionCursorNext(voice));
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::SelectOption {
            row: voice,
            option: 1
        })
    );
    assert_eq!(
        handle_key(&state, InputKey::Char(' ')),
        Some(Message::ToggleAccordion(voice))
    );
}

#[test]
fn test_tap_row_on_accordion_toggles_it() {
    let (mut state, _links) = test_state();
    let voice = row_of(&state, "Voice Speed");
    let result = update(&mut state, Message::TapRow(voice));
    assert!(result.action.is_none());
    assert!(state.list_view.accordion(voice).unwrap().expanded);
}

#[test]
fn test_dropdown_precedence_end_to_end() {
    let (mut state, _links) = test_state();
    let layout = Layout::from_toml_str(
        r#"
[[rows]]
title = "Mixed"
destination = "/(tabs)/settings/profile"
status = true
dropdown = ["One", "Two"]
"#,
    )
    .unwrap();
    state.set_layout(layout);

    let result = update(&mut state, Message::TapRow(0));
    assert!(result.action.is_none());
    assert!(matches!(&state.rows()[0], RenderedRow::Accordion(acc) if acc.expanded));
}

#[test]
fn test_duplicate_rows_keep_independent_accordion_state() {
    let (mut state, _links) = test_state();
    state.set_layout(Layout::new(vec![
        LayoutEntry::accordion("Language", "globe", ["English", "Spanish"]),
        LayoutEntry::accordion("Language", "globe", ["English", "Spanish"]),
    ]));

    update(&mut state, Message::SelectOption { row: 1, option: 1 });
    assert_eq!(accordion_row(&state, 0).caption, "English");
    assert_eq!(accordion_row(&state, 1).caption, "Spanish");
}

#[test]
fn test_tap_missing_row_is_ignored() {
    let (mut state, _links) = test_state();
    let result = update(&mut state, Message::TapRow(99));
    assert!(result.action.is_none());
    assert!(result.message.is_none());
}
