//! Blind Vision Library
//!
//! Terminal companion for the Blind Vision smart glasses and smart stick:
//! a declarative, screen-reader-first settings list over shared theme,
//! auth and connection state.

pub mod app;
pub mod simulator;

// Re-export the workspace crates for integration tests and embedders
pub use bvision_app as engine;
pub use bvision_core as core;
pub use bvision_tui as tui;

// Re-export main entry points
pub use app::{run, Options};
