#![forbid(unsafe_code)]

//! Accordion state machine.
//!
//! Sections are independent booleans: toggling one never collapses a
//! sibling. The initial expanded set is honored at bind time.

use axui_core::event::KeyEvent;

/// Accessibility attributes for one section header and its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionAttrs {
    /// `aria-expanded` on the header button.
    pub expanded: bool,
    /// `hidden` on the section panel.
    pub panel_hidden: bool,
}

/// A group of independently collapsible sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Vec<bool>,
}

impl Accordion {
    /// Bind an accordion of `section_count` collapsed sections.
    #[must_use]
    pub fn bind(section_count: usize) -> Self {
        Self {
            expanded: vec![false; section_count],
        }
    }

    /// Bind with the listed sections initially expanded.
    ///
    /// Out-of-range indices in `initially_expanded` are ignored.
    #[must_use]
    pub fn bind_expanded(section_count: usize, initially_expanded: &[usize]) -> Self {
        let mut accordion = Self::bind(section_count);
        for &index in initially_expanded {
            if let Some(slot) = accordion.expanded.get_mut(index) {
                *slot = true;
            }
        }
        accordion
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Whether section `index` is expanded.
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Flip section `index` only. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.expanded.get_mut(index) {
            Some(slot) => {
                *slot = !*slot;
                *slot
            }
            None => {
                tracing::warn!(index, sections = self.expanded.len(), "accordion toggle out of range");
                false
            }
        }
    }

    /// Set section `index` to an explicit state.
    pub fn set_expanded(&mut self, index: usize, expanded: bool) {
        if let Some(slot) = self.expanded.get_mut(index) {
            *slot = expanded;
        }
    }

    /// Handle a key on the header of section `index`.
    ///
    /// Enter and Space toggle, same as a pointer press. Release events are
    /// ignored so one physical keypress toggles once.
    pub fn handle_key(&mut self, index: usize, key: &KeyEvent) -> bool {
        if key.is_down() && key.is_activation() {
            self.toggle(index);
            true
        } else {
            false
        }
    }

    /// Attributes for section `index`.
    #[must_use]
    pub fn attrs(&self, index: usize) -> SectionAttrs {
        let expanded = self.is_expanded(index);
        SectionAttrs {
            expanded,
            panel_hidden: !expanded,
        }
    }

    /// Attributes for every section in order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SectionAttrs> {
        (0..self.expanded.len()).map(|i| self.attrs(i)).collect()
    }
}
