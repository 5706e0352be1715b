#![forbid(unsafe_code)]

//! Ordered focus ring with live visibility filtering.
//!
//! [`FocusRing`] tracks focusable members in registration order and cycles
//! focus over the currently visible subset with wraparound at both ends.
//! Membership and visibility may change at any time; every navigation step
//! recomputes the visible subset, so a member hidden after registration is
//! skipped without any explicit invalidation call.
//!
//! Dialogs use a ring as their Tab trap; dropdown menus use one for
//! arrow-key item cycling.

/// Opaque identifier for a focusable element, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocusId(u64);

impl FocusId {
    /// Create an id from a host-chosen value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    id: FocusId,
    visible: bool,
}

/// An ordered set of focusable members with one optional focus holder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    entries: Vec<Entry>,
    focused: Option<FocusId>,
}

impl FocusRing {
    /// Create an empty ring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visible member. Re-registering an existing id is a no-op.
    pub fn register(&mut self, id: FocusId) {
        if self.entries.iter().any(|e| e.id == id) {
            return;
        }
        self.entries.push(Entry { id, visible: true });
    }

    /// Remove a member. Focus held by the removed member is cleared.
    pub fn remove(&mut self, id: FocusId) {
        self.entries.retain(|e| e.id != id);
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Change a member's visibility. Hiding the focus holder clears focus.
    pub fn set_visible(&mut self, id: FocusId, visible: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.visible = visible;
            if !visible && self.focused == Some(id) {
                self.focused = None;
            }
        }
    }

    /// Number of registered members, visible or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ring has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The member currently holding focus, if any.
    #[must_use]
    pub fn focused(&self) -> Option<FocusId> {
        self.focused
    }

    /// Whether `id` is registered and visible.
    #[must_use]
    pub fn is_focusable(&self, id: FocusId) -> bool {
        self.entries.iter().any(|e| e.id == id && e.visible)
    }

    /// First visible member in registration order.
    #[must_use]
    pub fn first(&self) -> Option<FocusId> {
        self.entries.iter().find(|e| e.visible).map(|e| e.id)
    }

    /// Last visible member in registration order.
    #[must_use]
    pub fn last(&self) -> Option<FocusId> {
        self.entries.iter().rev().find(|e| e.visible).map(|e| e.id)
    }

    /// Move focus to `id` if it is registered and visible.
    pub fn focus(&mut self, id: FocusId) -> bool {
        if self.is_focusable(id) {
            self.focused = Some(id);
            true
        } else {
            false
        }
    }

    /// Drop focus without removing any member.
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Move focus to the next visible member, wrapping past the end.
    ///
    /// With no focus holder (or a holder that became hidden) focus lands on
    /// the first visible member. Returns the new holder, `None` when no
    /// member is visible.
    pub fn next(&mut self) -> Option<FocusId> {
        self.advance(true)
    }

    /// Move focus to the previous visible member, wrapping past the start.
    pub fn previous(&mut self) -> Option<FocusId> {
        self.advance(false)
    }

    fn advance(&mut self, forward: bool) -> Option<FocusId> {
        let visible: Vec<FocusId> = self
            .entries
            .iter()
            .filter(|e| e.visible)
            .map(|e| e.id)
            .collect();
        if visible.is_empty() {
            self.focused = None;
            return None;
        }
        let next = match self.focused.and_then(|f| visible.iter().position(|&id| id == f)) {
            Some(pos) if forward => visible[(pos + 1) % visible.len()],
            Some(pos) => visible[(pos + visible.len() - 1) % visible.len()],
            None => visible[0],
        };
        self.focused = Some(next);
        Some(next)
    }
}
