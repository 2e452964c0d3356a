//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `tap`: What a tap on a plain row does to shared state and navigation
//! - `list`: Settings list handlers (focus, taps, accordions)

pub(crate) mod keys;
pub(crate) mod list;
pub mod tap;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use crate::navigation::NavigationRequest;

// Re-export main entry point
pub use tap::{dispatch_tap, TapOutcome};
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Hand a request to the navigator
    Navigate(NavigationRequest),

    /// Ask the navigator for the previous screen
    GoBack,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
