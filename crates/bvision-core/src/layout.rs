//! Declarative settings layout
//!
//! A layout is an ordered list of rows. Each row is authored as a
//! [`RowDescriptor`] and resolved once into a [`LayoutEntry`] whose
//! [`RowKind`] is an explicit sum type, so nothing downstream has to
//! re-derive the kind from which optional fields happen to be set.
//!
//! Two authoring styles are accepted:
//!
//! ```toml
//! # Explicit: `kind` is authoritative and validated
//! [[rows]]
//! kind = "navigation"
//! title = "Profile"
//! destination = "/(tabs)/settings/profile"
//!
//! # Implicit: kind inferred from field presence
//! [[rows]]
//! title = "Voice Speed"
//! dropdown = ["Normal", "Slow", "Fast"]
//! ```
//!
//! Implicit rows never fail: precedence is dropdown, destination, status,
//! and anything else falls back to a dark-mode toggle.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::routes;
use crate::types::Peripheral;

/// Explicit row kind tag used in the authoring format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKindTag {
    Navigation,
    Status,
    Toggle,
    Accordion,
}

/// One row as written by a configuration author
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowDescriptor {
    /// Display name
    pub title: String,

    /// Icon reference, passed through untouched
    #[serde(default, alias = "imageSource")]
    pub image_source: String,

    /// Explicit kind; when absent the kind is inferred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RowKindTag>,

    /// Navigation target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Presence marks a status row; the value itself is never displayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,

    /// Peripheral a status row reports on (defaults to matching the title)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peripheral: Option<Peripheral>,

    /// With a destination: sign the user out before navigating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,

    /// Options of an accordion row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<Vec<String>>,
}

/// Behavior of a plain (non-accordion) row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Forward arrow; tapping navigates
    Navigation {
        destination: String,
        /// Clears the identity and always routes to the sign-in screen
        sign_out: bool,
    },
    /// Read-only connection banner for a peripheral
    Status { peripheral: Peripheral },
    /// Switch bound to the dark-mode flag
    Toggle,
}

/// Resolved kind of a layout row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Item(ItemKind),
    /// Collapsible single-select list
    Accordion { options: Vec<String> },
}

/// A resolved row of the layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    pub title: String,
    pub image_source: String,
    pub kind: RowKind,
}

impl LayoutEntry {
    pub fn navigation(
        title: impl Into<String>,
        image_source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image_source: image_source.into(),
            kind: RowKind::Item(ItemKind::Navigation {
                destination: destination.into(),
                sign_out: false,
            }),
        }
    }

    pub fn sign_out(title: impl Into<String>, image_source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_source: image_source.into(),
            kind: RowKind::Item(ItemKind::Navigation {
                destination: routes::SIGN_IN.to_string(),
                sign_out: true,
            }),
        }
    }

    pub fn status(title: impl Into<String>, image_source: impl Into<String>) -> Self {
        let title = title.into();
        let peripheral = Peripheral::for_title(&title);
        Self {
            title,
            image_source: image_source.into(),
            kind: RowKind::Item(ItemKind::Status { peripheral }),
        }
    }

    pub fn toggle(title: impl Into<String>, image_source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_source: image_source.into(),
            kind: RowKind::Item(ItemKind::Toggle),
        }
    }

    pub fn accordion<S: Into<String>>(
        title: impl Into<String>,
        image_source: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            title: title.into(),
            image_source: image_source.into(),
            kind: RowKind::Accordion {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn is_accordion(&self) -> bool {
        matches!(self.kind, RowKind::Accordion { .. })
    }
}

impl RowDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Any `replace` value, even `false`, makes a navigation row sign out
    fn is_sign_out(&self) -> bool {
        self.replace.is_some()
    }

    /// Infer the row kind from field presence.
    ///
    /// Total over every descriptor: dropdown wins over destination, which
    /// wins over status; anything else is a toggle.
    pub fn inferred_kind(&self) -> RowKind {
        if let Some(options) = &self.dropdown {
            return RowKind::Accordion {
                options: options.clone(),
            };
        }

        if let Some(destination) = &self.destination {
            return RowKind::Item(ItemKind::Navigation {
                destination: destination.clone(),
                sign_out: self.is_sign_out(),
            });
        }

        if self.status.is_some() {
            return RowKind::Item(ItemKind::Status {
                peripheral: self
                    .peripheral
                    .unwrap_or_else(|| Peripheral::for_title(&self.title)),
            });
        }

        if self.replace.is_some() {
            tracing::warn!(
                "Row {:?} sets `replace` without a destination; rendering as toggle",
                self.title
            );
        }

        RowKind::Item(ItemKind::Toggle)
    }

    /// Resolve into a [`LayoutEntry`].
    ///
    /// `index` is only used for error reporting. Implicit rows never fail;
    /// rows with an explicit `kind` must carry the data that kind needs.
    pub fn into_entry(self, index: usize) -> Result<LayoutEntry> {
        let kind = match self.kind {
            None => self.inferred_kind(),
            Some(tag) => self.explicit_kind(tag, index)?,
        };

        Ok(LayoutEntry {
            title: self.title,
            image_source: self.image_source,
            kind,
        })
    }

    fn explicit_kind(&self, tag: RowKindTag, index: usize) -> Result<RowKind> {
        if self.title.trim().is_empty() {
            return Err(Error::invalid_row(index, &self.title, "title must not be empty"));
        }

        match tag {
            RowKindTag::Navigation => {
                let destination = self.destination.clone().ok_or_else(|| {
                    Error::invalid_row(index, &self.title, "navigation row needs a destination")
                })?;
                Ok(RowKind::Item(ItemKind::Navigation {
                    destination,
                    sign_out: self.is_sign_out(),
                }))
            }
            RowKindTag::Status => Ok(RowKind::Item(ItemKind::Status {
                peripheral: self
                    .peripheral
                    .unwrap_or_else(|| Peripheral::for_title(&self.title)),
            })),
            RowKindTag::Toggle => Ok(RowKind::Item(ItemKind::Toggle)),
            RowKindTag::Accordion => match &self.dropdown {
                Some(options) if !options.is_empty() => Ok(RowKind::Accordion {
                    options: options.clone(),
                }),
                _ => Err(Error::invalid_row(
                    index,
                    &self.title,
                    "accordion row needs at least one dropdown option",
                )),
            },
        }
    }
}

/// On-disk shape of `layout.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(default)]
    pub rows: Vec<RowDescriptor>,
}

/// Ordered list of resolved rows; order and duplicates are preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    entries: Vec<LayoutEntry>,
}

impl Layout {
    pub fn new(entries: Vec<LayoutEntry>) -> Self {
        Self { entries }
    }

    /// Resolve authored descriptors in order
    pub fn from_descriptors(descriptors: Vec<RowDescriptor>) -> Result<Self> {
        let entries = descriptors
            .into_iter()
            .enumerate()
            .map(|(index, d)| d.into_entry(index))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Parse a `layout.toml` document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: LayoutFile = toml::from_str(content)?;
        Self::from_descriptors(file.rows)
    }

    /// Built-in layout of the settings screen
    pub fn default_settings() -> Self {
        Self::new(vec![
            LayoutEntry::navigation("Profile", "profile", routes::PROFILE),
            LayoutEntry::toggle("Dark Mode", "moon"),
            LayoutEntry::status("Glasses", "glasses"),
            LayoutEntry::status("Stick", "stick"),
            LayoutEntry::accordion("Voice Speed", "speaker", ["Normal", "Slow", "Fast"]),
            LayoutEntry::accordion("Language", "globe", ["English", "Spanish", "French"]),
            LayoutEntry::sign_out("Log Out", "logout"),
            LayoutEntry::navigation("Delete Account", "trash", routes::DELETE_ACCOUNT),
        ])
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LayoutEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayoutEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a LayoutEntry;
    type IntoIter = std::slice::Iter<'a, LayoutEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_dropdown_takes_precedence_over_everything() {
        let desc = RowDescriptor {
            destination: Some("/profile".into()),
            status: Some(true),
            replace: Some(true),
            dropdown: options(&["A", "B"]),
            ..RowDescriptor::new("Mixed")
        };

        assert_eq!(
            desc.inferred_kind(),
            RowKind::Accordion {
                options: vec!["A".into(), "B".into()]
            }
        );
    }

    #[test]
    fn test_destination_beats_status() {
        let desc = RowDescriptor {
            destination: Some("/profile".into()),
            status: Some(false),
            ..RowDescriptor::new("Profile")
        };

        assert_eq!(
            desc.inferred_kind(),
            RowKind::Item(ItemKind::Navigation {
                destination: "/profile".into(),
                sign_out: false,
            })
        );
    }

    #[test]
    fn test_status_presence_not_value() {
        for value in [true, false] {
            let desc = RowDescriptor {
                status: Some(value),
                ..RowDescriptor::new("Glasses")
            };
            assert_eq!(
                desc.inferred_kind(),
                RowKind::Item(ItemKind::Status {
                    peripheral: Peripheral::Glasses
                })
            );
        }
    }

    #[test]
    fn test_bare_descriptor_falls_back_to_toggle() {
        assert_eq!(
            RowDescriptor::new("Dark Mode").inferred_kind(),
            RowKind::Item(ItemKind::Toggle)
        );

        // `replace` alone is an authoring mistake, still a toggle
        let desc = RowDescriptor {
            replace: Some(true),
            ..RowDescriptor::new("Oops")
        };
        assert_eq!(desc.inferred_kind(), RowKind::Item(ItemKind::Toggle));
    }

    #[test]
    fn test_replace_marks_sign_out() {
        let desc = RowDescriptor {
            destination: Some("/(auth)/sign-in".into()),
            replace: Some(true),
            ..RowDescriptor::new("Log Out")
        };
        assert!(matches!(
            desc.inferred_kind(),
            RowKind::Item(ItemKind::Navigation { sign_out: true, .. })
        ));
    }

    #[test]
    fn test_replace_false_still_marks_sign_out() {
        let desc = RowDescriptor {
            destination: Some(routes::DELETE_ACCOUNT.into()),
            replace: Some(false),
            ..RowDescriptor::new("Log Out")
        };
        assert_eq!(
            desc.inferred_kind(),
            RowKind::Item(ItemKind::Navigation {
                destination: routes::DELETE_ACCOUNT.to_string(),
                sign_out: true,
            })
        );
    }

    #[test]
    fn test_explicit_navigation_requires_destination() {
        let desc = RowDescriptor {
            kind: Some(RowKindTag::Navigation),
            ..RowDescriptor::new("Profile")
        };
        let err = desc.into_entry(3).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { index: 3, .. }));
    }

    #[test]
    fn test_explicit_accordion_requires_options() {
        let desc = RowDescriptor {
            kind: Some(RowKindTag::Accordion),
            dropdown: Some(vec![]),
            ..RowDescriptor::new("Voice")
        };
        assert!(desc.into_entry(0).is_err());
    }

    #[test]
    fn test_explicit_kind_is_authoritative() {
        // An explicit toggle ignores a stray dropdown
        let desc = RowDescriptor {
            kind: Some(RowKindTag::Toggle),
            dropdown: options(&["x"]),
            ..RowDescriptor::new("Dark Mode")
        };
        let entry = desc.into_entry(0).unwrap();
        assert_eq!(entry.kind, RowKind::Item(ItemKind::Toggle));
    }

    #[test]
    fn test_explicit_status_with_peripheral_override() {
        let desc = RowDescriptor {
            kind: Some(RowKindTag::Status),
            peripheral: Some(Peripheral::Glasses),
            ..RowDescriptor::new("Smart Glasses")
        };
        let entry = desc.into_entry(0).unwrap();
        assert_eq!(
            entry.kind,
            RowKind::Item(ItemKind::Status {
                peripheral: Peripheral::Glasses
            })
        );
    }

    #[test]
    fn test_layout_from_toml_preserves_order_and_duplicates() {
        let content = r#"
[[rows]]
title = "Profile"
imageSource = "profile"
destination = "/(tabs)/settings/profile"

[[rows]]
title = "Dark Mode"

[[rows]]
title = "Dark Mode"

[[rows]]
kind = "status"
title = "Glasses"

[[rows]]
title = "Voice Speed"
dropdown = ["Normal", "Slow"]
"#;
        let layout = Layout::from_toml_str(content).unwrap();
        let titles: Vec<&str> = layout.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Profile", "Dark Mode", "Dark Mode", "Glasses", "Voice Speed"]
        );
        assert_eq!(layout.entries()[0].image_source, "profile");
        assert!(layout.entries()[4].is_accordion());
    }

    #[test]
    fn test_layout_from_invalid_toml() {
        let err = Layout::from_toml_str("[[rows]\ntitle =").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_default_settings_layout() {
        let layout = Layout::default_settings();
        assert_eq!(layout.len(), 8);
        assert!(layout.iter().any(|e| e.title == "Log Out"
            && matches!(e.kind, RowKind::Item(ItemKind::Navigation { sign_out: true, .. }))));
        assert!(layout.iter().filter(|e| e.is_accordion()).count() == 2);
    }
}
