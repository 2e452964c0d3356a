//! Centralized theme system for the settings screen.
//!
//! This module provides:
//! - `palette` - Light and dark color sets keyed on the shared `Theme`
//! - `styles` - Semantic style builder functions
//! - `icons` - Row glyphs with Nerd Font and Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;
