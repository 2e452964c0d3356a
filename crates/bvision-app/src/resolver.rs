//! Row variant resolution
//!
//! Turns a plain (non-accordion) row plus the current shared state into the
//! control it shows and the strings a screen reader announces for it.

use bvision_core::{ItemKind, Theme};

use crate::store::ConnectionSnapshot;

/// Titles whose hint names the action itself instead of a page
const ACTION_TITLES: [&str; 2] = ["log out", "delete account"];

/// Hint announced for toggle rows
pub const TOGGLE_HINT: &str = "Double tap to toggle dark mode";

/// Trailing control of a plain row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    /// Forward arrow of a navigation row
    Forward,
    /// Connected/disconnected banner of a status row
    StatusBanner { connected: bool },
    /// Dark-mode switch
    Switch { on: bool },
}

impl RowControl {
    /// Whether tapping the row does anything
    pub fn is_actionable(&self) -> bool {
        !matches!(self, RowControl::StatusBanner { .. })
    }
}

/// Control and accessibility strings for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRow {
    pub hint: String,
    pub label: String,
    pub control: RowControl,
}

fn is_action_title(title: &str) -> bool {
    let lower = title.to_lowercase();
    ACTION_TITLES.contains(&lower.as_str())
}

/// Accessibility hint for a navigation row
pub fn navigation_hint(title: &str) -> String {
    if is_action_title(title) {
        format!("Double tap to {}", title)
    } else {
        format!("Double tap to navigate to {} page", title)
    }
}

/// Resolve a plain row against the current theme and connection flags
pub fn resolve(
    title: &str,
    kind: &ItemKind,
    theme: Theme,
    connections: ConnectionSnapshot,
) -> ResolvedRow {
    match kind {
        ItemKind::Navigation { .. } => ResolvedRow {
            hint: navigation_hint(title),
            label: format!("{} button", title),
            control: RowControl::Forward,
        },
        ItemKind::Status { peripheral } => {
            let connected = connections.connected(*peripheral);
            ResolvedRow {
                hint: String::new(),
                label: format!(
                    "{} {}",
                    title,
                    if connected { "connected" } else { "disconnected" }
                ),
                control: RowControl::StatusBanner { connected },
            }
        }
        ItemKind::Toggle => ResolvedRow {
            hint: TOGGLE_HINT.to_string(),
            label: format!("{} switch", title),
            control: RowControl::Switch {
                on: theme.is_dark(),
            },
        },
    }
}
