//! Application state (Model in TEA pattern)

use bvision_core::{routes, Layout};

use crate::config::Settings;
use crate::list::{render_list, ListViewState, RenderedRow};
use crate::store::SharedState;

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Loaded preferences
    pub settings: Settings,

    /// Rows of the settings screen
    pub layout: Layout,

    /// Theme, identity and connection flags
    pub shared: SharedState,

    /// Cursor and per-row accordion state
    pub list_view: ListViewState,

    /// Route shown by the navigator
    pub current_route: String,

    /// Current application phase
    pub phase: AppPhase,

    /// Last thing announced to the user after an interaction
    pub announcement: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings, layout: Layout, shared: SharedState) -> Self {
        let mut list_view = ListViewState::new();
        list_view.mount(&layout);
        Self {
            settings,
            layout,
            shared,
            list_view,
            current_route: routes::SETTINGS.to_string(),
            phase: AppPhase::Running,
            announcement: None,
        }
    }

    /// Replace the layout and remount all row state
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.list_view.mount(&self.layout);
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn on_settings_screen(&self) -> bool {
        self.current_route == routes::SETTINGS
    }

    /// Render the list against the current shared state
    pub fn rows(&self) -> Vec<RenderedRow> {
        render_list(
            &self.layout,
            self.shared.theme(),
            self.shared.connections.snapshot(),
            &self.list_view,
        )
    }

    pub fn announce(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!("announce: {}", text);
        self.announcement = Some(text);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::store::{connection_channels, ConnectionLinks};
    use bvision_core::Theme;

    /// State over the built-in layout plus the transport half of its connections
    pub fn test_state() -> (AppState, ConnectionLinks) {
        let (links, connections) = connection_channels(false, false);
        let shared = SharedState::new(Theme::Light, None, connections);
        (
            AppState::new(Settings::default(), Layout::default_settings(), shared),
            links,
        )
    }
}
