//! Configuration file parsing for Blind Vision
//!
//! Supports:
//! - `<config_dir>/config.toml` - UI preferences
//! - `<config_dir>/layout.toml` - Settings list layout

use std::path::{Path, PathBuf};

use bvision_core::prelude::*;
use bvision_core::{Layout, Theme};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const LAYOUT_FILENAME: &str = "layout.toml";

/// Glyph set used for row icons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

/// UI preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Start in dark mode
    pub dark_mode: bool,
    pub icons: IconMode,
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
}

impl Settings {
    pub fn initial_theme(&self) -> Theme {
        Theme::from_dark(self.ui.dark_mode)
    }
}

/// Default configuration directory (`~/.config/blind-vision`)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("blind-vision")
}

/// Load settings from `config.toml`, falling back to defaults
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load the settings layout from `layout.toml`.
///
/// A missing file yields the built-in layout. A file that exists but does
/// not parse, or contains an invalid explicit row, is an error.
pub fn load_layout(config_dir: &Path) -> Result<Layout> {
    let layout_path = config_dir.join(LAYOUT_FILENAME);

    if !layout_path.exists() {
        debug!("No layout file at {:?}, using built-in layout", layout_path);
        return Ok(Layout::default_settings());
    }

    let content = std::fs::read_to_string(&layout_path)
        .with_context(|| format!("Failed to read {}", layout_path.display()))?;
    let layout = Layout::from_toml_str(&content)
        .with_context(|| format!("Failed to load {}", layout_path.display()))?;

    info!("Loaded {} layout rows from {:?}", layout.len(), layout_path);
    Ok(layout)
}

const DEFAULT_CONFIG: &str = r#"# Blind Vision Configuration

[ui]
dark_mode = false       # Start in dark mode
icons = "unicode"       # "unicode" or "nerd_fonts"
"#;

const DEFAULT_LAYOUT: &str = r#"# Blind Vision settings layout
#
# Rows render in file order. Set `kind` explicitly ("navigation", "status",
# "toggle", "accordion") or let it be inferred: dropdown > destination >
# status > toggle.

[[rows]]
kind = "navigation"
title = "Profile"
image_source = "profile"
destination = "/(tabs)/settings/profile"

[[rows]]
kind = "toggle"
title = "Dark Mode"
image_source = "moon"

[[rows]]
kind = "status"
title = "Glasses"
image_source = "glasses"

[[rows]]
kind = "status"
title = "Stick"
image_source = "stick"

[[rows]]
kind = "accordion"
title = "Voice Speed"
image_source = "speaker"
dropdown = ["Normal", "Slow", "Fast"]

[[rows]]
kind = "accordion"
title = "Language"
image_source = "globe"
dropdown = ["English", "Spanish", "French"]

[[rows]]
kind = "navigation"
title = "Log Out"
image_source = "logout"
destination = "/(auth)/sign-in"
replace = true

[[rows]]
kind = "navigation"
title = "Delete Account"
image_source = "trash"
destination = "/(tabs)/settings/delete-account"
"#;

/// Create default config files in the config directory
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    for (name, content) in [
        (CONFIG_FILENAME, DEFAULT_CONFIG),
        (LAYOUT_FILENAME, DEFAULT_LAYOUT),
    ] {
        let path = config_dir.join(name);
        if !path.exists() {
            std::fs::write(&path, content)?;
            info!("Created default {:?}", path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bvision_core::{ItemKind, RowKind};
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_load_settings_from_file() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILENAME),
            "[ui]\ndark_mode = true\nicons = \"nerd_fonts\"\n",
        )
        .unwrap();

        let settings = load_settings(temp.path());
        assert!(settings.ui.dark_mode);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.initial_theme(), Theme::Dark);
    }

    #[test]
    fn test_load_settings_invalid_falls_back() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "[ui\n").unwrap();
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_load_layout_missing_uses_builtin() {
        let temp = tempdir().unwrap();
        let layout = load_layout(temp.path()).unwrap();
        assert_eq!(layout, Layout::default_settings());
    }

    #[test]
    fn test_load_layout_invalid_row_is_error() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join(LAYOUT_FILENAME),
            "[[rows]]\nkind = \"navigation\"\ntitle = \"Profile\"\n",
        )
        .unwrap();

        let err = load_layout(temp.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { .. }));
    }

    #[test]
    fn test_init_config_dir_writes_loadable_defaults() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("blind-vision");
        init_config_dir(&dir).unwrap();

        assert_eq!(load_settings(&dir), Settings::default());

        let layout = load_layout(&dir).unwrap();
        assert_eq!(layout, Layout::default_settings());
        assert!(matches!(
            layout.entries()[6].kind,
            RowKind::Item(ItemKind::Navigation { sign_out: true, .. })
        ));
    }

    #[test]
    fn test_init_config_dir_keeps_existing_files() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(LAYOUT_FILENAME), "rows = []\n").unwrap();
        init_config_dir(temp.path()).unwrap();

        let layout = load_layout(temp.path()).unwrap();
        assert!(layout.is_empty());
    }
}
