//! Settings list rendering
//!
//! [`render_list`] walks the layout in order and produces one
//! [`RenderedRow`] per entry: plain rows go through the resolver,
//! accordion rows read their own [`AccordionState`]. Nothing is skipped,
//! reordered or deduplicated.

use bvision_core::{Layout, LayoutEntry, RowKind, Theme};

use crate::accordion::AccordionState;
use crate::resolver::{resolve, ResolvedRow};
use crate::store::ConnectionSnapshot;

/// View state of the list: cursor plus the accordion state of each row
#[derive(Debug, Clone, Default)]
pub struct ListViewState {
    /// Focused row
    pub selected_index: usize,

    /// One slot per layout row; `Some` only for accordion rows
    accordions: Vec<Option<AccordionState>>,
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create fresh row state for `layout`, discarding any previous state
    pub fn mount(&mut self, layout: &Layout) {
        self.accordions = layout
            .iter()
            .map(|entry| entry.is_accordion().then(AccordionState::new))
            .collect();
        if self.selected_index >= layout.len() {
            self.selected_index = 0;
        }
        tracing::debug!(
            "Mounted list with {} rows ({} accordions)",
            layout.len(),
            self.accordions.iter().flatten().count()
        );
    }

    pub fn accordion(&self, row: usize) -> Option<&AccordionState> {
        self.accordions.get(row).and_then(Option::as_ref)
    }

    pub fn accordion_mut(&mut self, row: usize) -> Option<&mut AccordionState> {
        self.accordions.get_mut(row).and_then(Option::as_mut)
    }

    /// Select next row
    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_index = (self.selected_index + 1) % row_count;
        }
    }

    /// Select previous row
    pub fn select_previous(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_index = if self.selected_index == 0 {
                row_count - 1
            } else {
                self.selected_index - 1
            };
        }
    }
}

/// A plain row ready to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub title: String,
    pub image_source: String,
    pub resolved: ResolvedRow,
    pub focused: bool,
}

/// One option inside an open accordion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    pub title: String,
    pub label: String,
    pub selected: bool,
    pub focused: bool,
}

/// An accordion row ready to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAccordion {
    pub title: String,
    pub image_source: String,
    pub caption: String,
    pub label: String,
    pub expanded: bool,
    pub focused: bool,
    /// Empty while collapsed
    pub options: Vec<RenderedOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedRow {
    Item(RenderedItem),
    Accordion(RenderedAccordion),
}

impl RenderedRow {
    pub fn title(&self) -> &str {
        match self {
            RenderedRow::Item(item) => &item.title,
            RenderedRow::Accordion(acc) => &acc.title,
        }
    }

    /// Accessibility label of the row itself
    pub fn label(&self) -> &str {
        match self {
            RenderedRow::Item(item) => &item.resolved.label,
            RenderedRow::Accordion(acc) => &acc.label,
        }
    }

    /// Accessibility hint of the row itself
    pub fn hint(&self) -> &str {
        match self {
            RenderedRow::Item(item) => &item.resolved.hint,
            RenderedRow::Accordion(_) => "",
        }
    }

    pub fn is_focused(&self) -> bool {
        match self {
            RenderedRow::Item(item) => item.focused,
            RenderedRow::Accordion(acc) => acc.focused,
        }
    }
}

fn render_accordion(
    entry: &LayoutEntry,
    options: &[String],
    state: &AccordionState,
    focused: bool,
) -> RenderedAccordion {
    let rendered_options = if state.expanded {
        options
            .iter()
            .enumerate()
            .map(|(index, option)| RenderedOption {
                title: option.clone(),
                label: state.option_label(option, index),
                selected: state.is_selected(index),
                focused: focused && state.cursor == index,
            })
            .collect()
    } else {
        Vec::new()
    };

    RenderedAccordion {
        title: entry.title.clone(),
        image_source: entry.image_source.clone(),
        caption: state.caption(options).to_string(),
        label: state.header_label(&entry.title, options),
        expanded: state.expanded,
        focused,
        options: rendered_options,
    }
}

/// Render every layout row against the current shared state
pub fn render_list(
    layout: &Layout,
    theme: Theme,
    connections: ConnectionSnapshot,
    view: &ListViewState,
) -> Vec<RenderedRow> {
    layout
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let focused = index == view.selected_index;
            match &entry.kind {
                RowKind::Accordion { options } => {
                    let unmounted = AccordionState::default();
                    let state = view.accordion(index).unwrap_or(&unmounted);
                    RenderedRow::Accordion(render_accordion(entry, options, state, focused))
                }
                RowKind::Item(kind) => RenderedRow::Item(RenderedItem {
                    title: entry.title.clone(),
                    image_source: entry.image_source.clone(),
                    resolved: resolve(&entry.title, kind, theme, connections),
                    focused,
                }),
            }
        })
        .collect()
}
