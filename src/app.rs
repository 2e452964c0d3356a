//! Application entry point and wiring
//!
//! Builds the shared state from configuration and command-line overrides,
//! starts the optional device simulator, and hands over to the TUI.

use std::path::PathBuf;
use std::time::Duration;

use bvision_app::config;
use bvision_app::store::{connection_channels, SharedState};
use bvision_core::prelude::*;
use bvision_core::{logging, Identity};

use crate::simulator::DeviceSimulator;

/// Runtime options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Directory holding `config.toml` and `layout.toml`
    pub config_dir: Option<PathBuf>,

    /// Start in dark mode regardless of `config.toml`
    pub dark: bool,

    /// Email of the signed-in user
    pub user: Option<String>,

    /// Flip device connections periodically, in milliseconds
    pub simulate_devices: Option<u64>,
}

impl Options {
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir
            .clone()
            .unwrap_or_else(config::default_config_dir)
    }
}

/// Main application entry point
pub async fn run(options: Options) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let config_dir = options.config_dir();
    info!("Config directory: {}", config_dir.display());

    let mut settings = config::load_settings(&config_dir);
    if options.dark {
        settings.ui.dark_mode = true;
    }
    let layout = config::load_layout(&config_dir)?;

    let (links, connections) = connection_channels(false, false);
    let identity = options.user.as_deref().map(Identity::from_email);
    let shared = SharedState::new(settings.initial_theme(), identity, connections);

    // Without a simulator the links stay idle so both flags read disconnected
    let (simulator, _idle_links) = match options.simulate_devices {
        Some(ms) => {
            info!("Simulating device transport every {}ms", ms);
            let handle = DeviceSimulator::new(links, Duration::from_millis(ms)).spawn();
            (Some(handle), None)
        }
        None => (None, Some(links)),
    };

    let result = bvision_tui::run(settings, layout, shared).await;

    if let Some(handle) = simulator {
        handle.abort();
    }

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!("Logs: {}", logging::log_directory().display());
    }

    info!("Blind Vision exiting");
    result
}
