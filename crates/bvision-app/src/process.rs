//! Message processing
//!
//! Runs a message through the TEA update loop and performs the resulting
//! actions against the navigator.

use std::collections::VecDeque;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::navigation::{self, Navigator};
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, navigator: &mut dyn Navigator) {
    let mut queue = VecDeque::from([message]);

    while let Some(msg) = queue.pop_front() {
        let result = handler::update(state, msg);

        if let Some(follow_up) = result.message {
            queue.push_back(follow_up);
        }

        if let Some(action) = result.action {
            if let Some(follow_up) = handle_action(action, navigator) {
                queue.push_back(follow_up);
            }
        }
    }
}

/// Execute an action, returning a message describing its outcome
fn handle_action(action: UpdateAction, navigator: &mut dyn Navigator) -> Option<Message> {
    match action {
        UpdateAction::Navigate(request) => {
            tracing::info!("Navigating to {}", request.route());
            navigation::apply(navigator, &request);
            Some(Message::RouteChanged(navigator.current()))
        }
        UpdateAction::GoBack => {
            if navigator.go_back() {
                Some(Message::RouteChanged(navigator.current()))
            } else {
                tracing::debug!("Already at root route");
                None
            }
        }
    }
}
