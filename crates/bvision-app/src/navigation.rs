//! Screen navigation service
//!
//! The settings list only asks for navigation; the host decides what a
//! route means. [`RouteStack`] is the in-memory history used by the TUI.

use bvision_core::routes;

/// How a navigation request treats the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Open `route` on top of the current screen
    Push(String),
    /// Go to `route`, unwinding to it if it is already in the history
    Navigate(String),
}

impl NavigationRequest {
    pub fn route(&self) -> &str {
        match self {
            NavigationRequest::Push(route) | NavigationRequest::Navigate(route) => route,
        }
    }
}

/// Screen router consumed by the settings list
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Open `route` on top of the current screen
    fn push(&mut self, route: &str);

    /// Go to `route`, unwinding to it if already in the history
    fn navigate(&mut self, route: &str);

    /// Return to the previous screen; false when already at the root
    fn go_back(&mut self) -> bool;

    /// Route currently shown
    fn current(&self) -> String;
}

/// Apply a request to any navigator
pub fn apply(navigator: &mut dyn Navigator, request: &NavigationRequest) {
    match request {
        NavigationRequest::Push(route) => navigator.push(route),
        NavigationRequest::Navigate(route) => navigator.navigate(route),
    }
}

/// In-memory navigation history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStack {
    stack: Vec<String>,
}

impl Default for RouteStack {
    fn default() -> Self {
        Self::new(routes::SETTINGS)
    }
}

impl RouteStack {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            stack: vec![root.into()],
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn history(&self) -> &[String] {
        &self.stack
    }
}

impl Navigator for RouteStack {
    fn push(&mut self, route: &str) {
        tracing::debug!("push {}", route);
        self.stack.push(route.to_string());
    }

    fn navigate(&mut self, route: &str) {
        tracing::debug!("navigate {}", route);
        if let Some(pos) = self.stack.iter().position(|r| r == route) {
            self.stack.truncate(pos + 1);
        } else {
            self.stack.push(route.to_string());
        }
    }

    fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    fn current(&self) -> String {
        // The root is never popped
        self.stack.last().cloned().unwrap_or_default()
    }
}
