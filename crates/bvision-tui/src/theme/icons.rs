//! Icon set for the settings rows.
//!
//! Row descriptors name their icon through `image_source`; `IconSet`
//! resolves that key to a glyph for the configured `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use bvision_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a row's `image_source` key
    ///
    /// Unknown keys fall back to a neutral bullet.
    pub fn for_image(&self, image_source: &str) -> &'static str {
        let key = image_source
            .rsplit('/')
            .next()
            .unwrap_or(image_source)
            .split('.')
            .next()
            .unwrap_or_default();

        match (key, self.mode) {
            ("profile" | "user", IconMode::NerdFonts) => "\u{f007}", // nf-fa-user
            ("profile" | "user", IconMode::Unicode) => "\u{263a}",   // ☺
            ("moon" | "theme", IconMode::NerdFonts) => "\u{f186}",   // nf-fa-moon_o
            ("moon" | "theme", IconMode::Unicode) => "\u{263e}",     // ☾
            ("glasses", IconMode::NerdFonts) => "\u{f06e}",          // nf-fa-eye
            ("glasses", IconMode::Unicode) => "\u{25ce}",            // ◎
            ("stick", IconMode::NerdFonts) => "\u{f29d}",            // nf-fa-blind
            ("stick", IconMode::Unicode) => "\u{2502}",              // │
            ("speaker" | "voice", IconMode::NerdFonts) => "\u{f028}", // nf-fa-volume_up
            ("speaker" | "voice", IconMode::Unicode) => "\u{266a}",  // ♪
            ("globe" | "language", IconMode::NerdFonts) => "\u{f0ac}", // nf-fa-globe
            ("globe" | "language", IconMode::Unicode) => "\u{2641}", // ♁
            ("logout", IconMode::NerdFonts) => "\u{f08b}",           // nf-fa-sign_out
            ("logout", IconMode::Unicode) => "\u{21a9}",             // ↩
            ("trash", IconMode::NerdFonts) => "\u{f1f8}",            // nf-fa-trash
            ("trash", IconMode::Unicode) => "\u{2717}",              // ✗
            (_, IconMode::NerdFonts) => "\u{f444}",                  // nf-oct-dot_fill
            (_, IconMode::Unicode) => "\u{2022}",                    // •
        }
    }

    /// Forward arrow of navigation rows
    pub fn forward(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    /// Accordion chevron
    pub fn chevron(&self, expanded: bool) -> &'static str {
        match (self.mode, expanded) {
            (IconMode::NerdFonts, true) => "\u{f077}",  // nf-fa-chevron_up
            (IconMode::NerdFonts, false) => "\u{f078}", // nf-fa-chevron_down
            (IconMode::Unicode, true) => "\u{25b4}",    // ▴
            (IconMode::Unicode, false) => "\u{25be}",   // ▾
        }
    }

    /// Mark on the selected accordion option
    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    /// Connection indicator dot
    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    /// Focus marker at the start of the focused row
    pub fn focus(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0da}", // nf-fa-caret_right
            IconMode::Unicode => "\u{25b8}",   // ▸
        }
    }
}
