//! bvision-app - Application state and settings-list engine for Blind Vision
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management around a declarative settings list: row resolution,
//! accordion state, observable shared state, navigation and configuration.

pub mod accordion;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod list;
pub mod message;
pub mod navigation;
pub mod process;
pub mod resolver;
pub mod signals;
pub mod state;
pub mod store;
pub mod watcher;

// Re-export primary types
pub use accordion::AccordionState;
pub use handler::{dispatch_tap, TapOutcome, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use list::{render_list, ListViewState, RenderedAccordion, RenderedItem, RenderedRow};
pub use message::Message;
pub use navigation::{NavigationRequest, Navigator, RouteStack};
pub use process::process_message;
pub use resolver::{resolve, ResolvedRow, RowControl};
pub use state::AppState;
pub use store::{
    connection_channels, ConnectionLinks, ConnectionSnapshot, ConnectionState, Observable,
    SharedState,
};
