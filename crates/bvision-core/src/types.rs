//! Shared domain types: peripherals, theme and the signed-in identity

use serde::{Deserialize, Serialize};

/// One of the two physical devices paired with the companion app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Peripheral {
    Glasses,
    Stick,
}

impl Peripheral {
    /// All peripherals, in display order
    pub const ALL: [Peripheral; 2] = [Peripheral::Glasses, Peripheral::Stick];

    /// Fixed display name, also used to match status rows by title
    pub fn name(&self) -> &'static str {
        match self {
            Peripheral::Glasses => "Glasses",
            Peripheral::Stick => "Stick",
        }
    }

    /// Peripheral a status row with this title reports on.
    ///
    /// Only an exact "Glasses" selects the glasses; every other title reads
    /// the stick connection.
    pub fn for_title(title: &str) -> Self {
        if title == Peripheral::Glasses.name() {
            Peripheral::Glasses
        } else {
            Peripheral::Stick
        }
    }
}

impl std::fmt::Display for Peripheral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// App-wide color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub nickname: String,
}

impl Identity {
    pub fn new(email: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            nickname: nickname.into(),
        }
    }

    /// Identity derived from an email alone; nickname is the local part
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let nickname = email.split('@').next().unwrap_or_default().to_string();
        Self { email, nickname }
    }
}
