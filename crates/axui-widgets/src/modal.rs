#![forbid(unsafe_code)]

//! Modal dialog with a live focus trap.
//!
//! Opening records the trigger as the return-focus target and moves focus
//! to the first focusable descendant, falling back to the container when
//! there is none. While open, Tab and Shift+Tab cycle the visible members
//! of the dialog's [`FocusRing`] with wraparound at both ends; the ring is
//! consulted live, so descendants hidden or shown mid-dialog are respected
//! on the next Tab. Escape always closes. Closing restores focus to the
//! recorded target only if it is still focusable.

use axui_core::event::{KeyCode, KeyEvent};

use crate::focus::{FocusId, FocusRing};

/// A modal dialog state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dialog {
    container: Option<FocusId>,
    ring: FocusRing,
    open: bool,
    return_to: Option<FocusId>,
}

impl Dialog {
    /// Create a closed dialog with an empty focus ring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container element focused when no descendant is focusable.
    #[must_use]
    pub fn container(mut self, id: FocusId) -> Self {
        self.container = Some(id);
        self
    }

    /// The dialog's focus ring, for registering focusable descendants.
    pub fn ring_mut(&mut self) -> &mut FocusRing {
        &mut self.ring
    }

    /// Whether the dialog is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// `aria-hidden` for the dialog element.
    #[must_use]
    pub const fn aria_hidden(&self) -> bool {
        !self.open
    }

    /// Where focus currently sits inside the dialog.
    #[must_use]
    pub fn focused(&self) -> Option<FocusId> {
        self.ring.focused().or(if self.open { self.container } else { None })
    }

    /// Open the dialog, recording `trigger` as the return-focus target.
    ///
    /// Focus moves to the first focusable descendant, or the container
    /// when the ring has no visible member. Opening an open dialog only
    /// updates the return target.
    pub fn open(&mut self, trigger: Option<FocusId>) {
        self.return_to = trigger;
        if self.open {
            return;
        }
        self.open = true;
        match self.ring.first() {
            Some(first) => {
                self.ring.focus(first);
            }
            None => self.ring.clear_focus(),
        }
    }

    /// Close the dialog.
    ///
    /// Returns the element that should regain focus: the recorded trigger
    /// when it is still focusable in `page`, otherwise `None`.
    pub fn close(&mut self, page: &FocusRing) -> Option<FocusId> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.ring.clear_focus();
        self.return_to.take().filter(|&id| page.is_focusable(id))
    }

    /// Handle a key while the dialog may be open.
    ///
    /// Tab and Shift+Tab are trapped inside the ring; Escape closes.
    /// Returns the consumed flag and, for Escape, the return-focus target
    /// through `closed_focus`.
    pub fn handle_key(&mut self, key: &KeyEvent, page: &FocusRing) -> DialogKey {
        if !self.open || !key.is_down() {
            return DialogKey::Ignored;
        }
        match key.code {
            KeyCode::Escape => DialogKey::Closed(self.close(page)),
            KeyCode::Tab if key.shift() => DialogKey::Moved(self.trap_previous()),
            KeyCode::Tab => DialogKey::Moved(self.trap_next()),
            KeyCode::BackTab => DialogKey::Moved(self.trap_previous()),
            _ => DialogKey::Ignored,
        }
    }

    fn trap_next(&mut self) -> Option<FocusId> {
        self.ring.next().or(self.container)
    }

    fn trap_previous(&mut self) -> Option<FocusId> {
        self.ring.previous().or(self.container)
    }
}

/// Outcome of [`Dialog::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    /// Key not handled by the dialog.
    Ignored,
    /// Focus moved inside the trap; carries the new holder.
    Moved(Option<FocusId>),
    /// Dialog closed; carries the element to restore focus to.
    Closed(Option<FocusId>),
}
