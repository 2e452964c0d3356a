//! Custom widget components

mod footer;
mod header;
mod placeholder;
pub mod settings_list;

pub use footer::AccessibilityBar;
pub use header::MainHeader;
pub use placeholder::PlaceholderScreen;
pub use settings_list::SettingsList;
