#![forbid(unsafe_code)]

//! Mobile navigation toggle.
//!
//! A boolean open state behind a burger/cross toggle. A press outside the
//! menu closes it silently; Escape closes it and asks the host to return
//! focus to the toggle button.

use axui_core::event::{Event, KeyCode};

/// Attributes for the nav toggle and menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavAttrs {
    /// `aria-expanded` on the toggle button.
    pub expanded: bool,
    /// Toggle glyph: burger while closed, cross while open.
    pub glyph: &'static str,
    /// `hidden` on the menu.
    pub menu_hidden: bool,
}

/// Outcome of [`MobileNav::handle_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Event not handled.
    Ignored,
    /// Menu closed; `focus_toggle` asks the host to refocus the toggle.
    Closed { focus_toggle: bool },
}

const BURGER: &str = "\u{2630}";
const CROSS: &str = "\u{2715}";

/// Mobile navigation menu state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    /// Create a closed menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Handle a document-level event while the menu may be open.
    ///
    /// Outside presses close without moving focus; Escape closes and
    /// requests focus return to the toggle.
    pub fn handle_event(&mut self, event: &Event) -> NavEvent {
        if !self.open {
            return NavEvent::Ignored;
        }
        match event {
            Event::OutsidePress => {
                self.close();
                NavEvent::Closed {
                    focus_toggle: false,
                }
            }
            Event::Key(key) if key.is_down() && key.code == KeyCode::Escape => {
                self.close();
                NavEvent::Closed { focus_toggle: true }
            }
            _ => NavEvent::Ignored,
        }
    }

    /// Attributes for the toggle and menu.
    #[must_use]
    pub const fn attrs(&self) -> NavAttrs {
        NavAttrs {
            expanded: self.open,
            glyph: if self.open { CROSS } else { BURGER },
            menu_hidden: !self.open,
        }
    }
}
