//! bvision-tui - Terminal UI for Blind Vision
//!
//! This crate provides the ratatui-based rendering of the settings list,
//! terminal event polling, and the event loop that wires shared-state
//! watchers into the TEA update cycle from bvision-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry points
pub use runner::run;
