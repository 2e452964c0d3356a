//! Tap dispatch for plain rows
//!
//! Navigation rows ask for a route (sign-out rows clear the identity first
//! and always go to sign-in), toggle rows flip the theme, status rows do
//! nothing. Accordion rows never come through here.

use bvision_core::{routes, ItemKind, LayoutEntry, RowKind, Theme};

use crate::navigation::NavigationRequest;
use crate::store::SharedState;

/// Effect of tapping a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// The host must navigate
    Navigate(NavigationRequest),
    /// The theme flag was flipped to this value
    ThemeToggled(Theme),
    /// Nothing happens (status rows, accordions)
    Ignored,
}

/// Apply a tap on `entry` to the shared state
pub fn dispatch_tap(entry: &LayoutEntry, shared: &SharedState) -> TapOutcome {
    match &entry.kind {
        RowKind::Accordion { .. } => {
            tracing::debug!("Tap on accordion {:?} ignored by dispatcher", entry.title);
            TapOutcome::Ignored
        }
        RowKind::Item(ItemKind::Navigation {
            sign_out: true,
            destination,
        }) => {
            if destination != routes::SIGN_IN {
                tracing::debug!(
                    "Sign-out row {:?} ignores destination {:?}",
                    entry.title,
                    destination
                );
            }
            shared.set_identity(None);
            tracing::info!("Signed out via {:?}", entry.title);
            TapOutcome::Navigate(NavigationRequest::Navigate(routes::SIGN_IN.to_string()))
        }
        RowKind::Item(ItemKind::Navigation { destination, .. }) => {
            TapOutcome::Navigate(NavigationRequest::Push(destination.clone()))
        }
        RowKind::Item(ItemKind::Status { .. }) => TapOutcome::Ignored,
        RowKind::Item(ItemKind::Toggle) => TapOutcome::ThemeToggled(shared.toggle_theme()),
    }
}
