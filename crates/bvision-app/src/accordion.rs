//! Per-row accordion state
//!
//! Each accordion row owns one [`AccordionState`]: which option is chosen
//! and whether the option list is open. Expanding never touches the
//! choice, and choosing never collapses.

/// Selection and expansion of one accordion row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    /// Chosen option; always a valid index while options exist
    pub selected_index: usize,

    /// Whether the option list is shown
    pub expanded: bool,

    /// Keyboard focus within the open option list
    pub cursor: usize,
}

impl AccordionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header tap: open or close the option list
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
        if self.expanded {
            self.cursor = self.selected_index;
        }
    }

    /// Option tap: choose `index`.
    ///
    /// An index outside `option_count` is a caller bug; it is ignored.
    pub fn select(&mut self, index: usize, option_count: usize) -> bool {
        debug_assert!(
            index < option_count,
            "accordion option {index} out of range ({option_count} options)"
        );
        if index >= option_count {
            tracing::warn!(
                "Ignoring accordion selection {} ({} options)",
                index,
                option_count
            );
            return false;
        }

        self.selected_index = index;
        self.cursor = index;
        true
    }

    pub fn cursor_next(&mut self, option_count: usize) {
        if option_count > 0 {
            self.cursor = (self.cursor + 1) % option_count;
        }
    }

    pub fn cursor_previous(&mut self, option_count: usize) {
        if option_count > 0 {
            self.cursor = if self.cursor == 0 {
                option_count - 1
            } else {
                self.cursor - 1
            };
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == index
    }

    /// Currently chosen option, shown in the header whether open or not
    pub fn caption<'a>(&self, options: &'a [String]) -> &'a str {
        options
            .get(self.selected_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Accessibility label of the header
    pub fn header_label(&self, title: &str, options: &[String]) -> String {
        format!("{} dropdown, {} selected", title, self.caption(options))
    }

    /// Accessibility label of the option at `index`
    pub fn option_label(&self, option: &str, index: usize) -> String {
        if self.is_selected(index) {
            format!("{} selected", option)
        } else {
            option.to_string()
        }
    }
}
