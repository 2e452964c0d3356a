//! Message types for the application (TEA pattern)

use bvision_core::Peripheral;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately
    Quit,

    // ─────────────────────────────────────────────────────────
    // Settings List Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next row
    SelectNext,

    /// Move focus to the previous row
    SelectPrevious,

    /// Move focus to the first row
    SelectFirst,

    /// Move focus to the last row
    SelectLast,

    /// Tap a plain row (navigation, status or toggle)
    TapRow(usize),

    /// Tap an accordion header
    ToggleAccordion(usize),

    /// Tap an option inside an accordion
    SelectOption { row: usize, option: usize },

    /// Move the option cursor inside an open accordion
    OptionCursorNext(usize),
    OptionCursorPrevious(usize),

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Return to the previous screen
    GoBack,

    /// The navigator moved to a new route
    RouteChanged(String),

    // ─────────────────────────────────────────────────────────
    // Shared State Messages
    // ─────────────────────────────────────────────────────────
    /// A peripheral connection flag changed (external transport)
    ConnectionChanged {
        peripheral: Peripheral,
        connected: bool,
    },

    /// The theme or identity changed; only forces a redraw
    SharedStateChanged,
}
