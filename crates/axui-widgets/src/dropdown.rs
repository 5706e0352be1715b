#![forbid(unsafe_code)]

//! Dropdown menus and their family coordinator.
//!
//! Each [`Dropdown`] is a boolean `open` plus arrow-key item cycling.
//! [`DropdownGroup`] coordinates a family of instances: a press outside any
//! menu, or Escape, closes every open instance at once. Opening schedules a
//! deferred move-focus-to-first-item task through the group's
//! [`Scheduler`]; the task is keyed by instance so closing or reopening
//! cancels the stale one and a timer can never focus a closed menu.

use ahash::AHashMap;
use axui_core::event::{Event, KeyCode, KeyEvent};
use axui_core::schedule::Scheduler;
use std::time::Duration;
use web_time::Instant;

/// Identifier for a dropdown instance within its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DropdownId(u64);

impl DropdownId {
    /// The raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Accessibility attributes for a dropdown toggle and its menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownAttrs {
    /// `aria-expanded` on the toggle button.
    pub expanded: bool,
    /// `hidden` on the menu.
    pub menu_hidden: bool,
}

/// One dropdown instance: open flag plus focused menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
    item_count: usize,
    focused_item: Option<usize>,
}

impl Dropdown {
    fn new(item_count: usize) -> Self {
        Self {
            open: false,
            item_count,
            focused_item: None,
        }
    }

    /// Whether the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Number of menu items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Index of the focused menu item, if any.
    #[must_use]
    pub const fn focused_item(&self) -> Option<usize> {
        self.focused_item
    }

    /// Attributes for the toggle and menu.
    #[must_use]
    pub const fn attrs(&self) -> DropdownAttrs {
        DropdownAttrs {
            expanded: self.open,
            menu_hidden: !self.open,
        }
    }

    /// Cycle item focus with ArrowDown / ArrowUp, wrapping at both ends.
    ///
    /// Only meaningful while open; a closed menu consumes nothing and
    /// release events are ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !key.is_down() || !self.open || self.item_count == 0 {
            return false;
        }
        let n = self.item_count;
        match key.code {
            KeyCode::Down => {
                self.focused_item = Some(match self.focused_item {
                    Some(i) => (i + 1) % n,
                    None => 0,
                });
                true
            }
            KeyCode::Up => {
                self.focused_item = Some(match self.focused_item {
                    Some(i) => (i + n - 1) % n,
                    None => n - 1,
                });
                true
            }
            _ => false,
        }
    }
}

/// A family of dropdowns sharing dismissal and deferred-focus scheduling.
#[derive(Debug)]
pub struct DropdownGroup {
    dropdowns: AHashMap<DropdownId, Dropdown>,
    order: Vec<DropdownId>,
    scheduler: Scheduler<DropdownId>,
    focus_delay: Duration,
    next_id: u64,
}

impl Default for DropdownGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl DropdownGroup {
    /// Create an empty group with immediate deferred focus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dropdowns: AHashMap::new(),
            order: Vec::new(),
            scheduler: Scheduler::new(),
            focus_delay: Duration::ZERO,
            next_id: 0,
        }
    }

    /// Set the delay before an opened menu focuses its first item.
    #[must_use]
    pub fn focus_delay(mut self, delay: Duration) -> Self {
        self.focus_delay = delay;
        self
    }

    /// Register a dropdown with `item_count` menu items.
    pub fn bind(&mut self, item_count: usize) -> DropdownId {
        let id = DropdownId(self.next_id);
        self.next_id += 1;
        self.dropdowns.insert(id, Dropdown::new(item_count));
        self.order.push(id);
        id
    }

    /// Look up an instance.
    #[must_use]
    pub fn get(&self, id: DropdownId) -> Option<&Dropdown> {
        self.dropdowns.get(&id)
    }

    /// Mutable access to an instance, for item-focus key handling.
    pub fn get_mut(&mut self, id: DropdownId) -> Option<&mut Dropdown> {
        self.dropdowns.get_mut(&id)
    }

    /// Ids of every open instance, in bind order.
    #[must_use]
    pub fn open_ids(&self) -> Vec<DropdownId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.dropdowns.get(id).is_some_and(Dropdown::is_open))
            .collect()
    }

    /// Open `id`, scheduling the deferred first-item focus.
    ///
    /// Reopening an already-open instance reschedules the focus task.
    pub fn open(&mut self, id: DropdownId, now: Instant) -> bool {
        let Some(dropdown) = self.dropdowns.get_mut(&id) else {
            tracing::warn!(id = id.0, "dropdown open: unknown instance");
            return false;
        };
        dropdown.open = true;
        dropdown.focused_item = None;
        self.scheduler.cancel_key(id.0);
        self.scheduler.schedule_at(id.0, now + self.focus_delay, id);
        true
    }

    /// Close `id` and cancel its pending focus task.
    pub fn close(&mut self, id: DropdownId) -> bool {
        let Some(dropdown) = self.dropdowns.get_mut(&id) else {
            return false;
        };
        let was_open = dropdown.open;
        dropdown.open = false;
        dropdown.focused_item = None;
        self.scheduler.cancel_key(id.0);
        was_open
    }

    /// Flip `id` between open and closed.
    pub fn toggle(&mut self, id: DropdownId, now: Instant) -> bool {
        match self.dropdowns.get(&id) {
            Some(d) if d.open => {
                self.close(id);
                false
            }
            Some(_) => self.open(id, now),
            None => false,
        }
    }

    /// Close every open instance; returns the ids that were open.
    pub fn close_all(&mut self) -> Vec<DropdownId> {
        let open = self.open_ids();
        for &id in &open {
            self.close(id);
        }
        open
    }

    /// Handle a family-level event.
    ///
    /// An outside press or Escape closes all open instances; the returned
    /// ids let the host restore focus to the matching toggles. Arrow keys
    /// are routed to the single open instance when there is exactly one.
    pub fn handle_event(&mut self, event: &Event) -> Vec<DropdownId> {
        match event {
            Event::OutsidePress => self.close_all(),
            Event::Key(key) if key.is_down() && key.code == KeyCode::Escape => self.close_all(),
            Event::Key(key) => {
                let open = self.open_ids();
                if open.len() == 1
                    && let Some(dropdown) = self.dropdowns.get_mut(&open[0])
                {
                    dropdown.handle_key(key);
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Deliver due deferred-focus tasks.
    ///
    /// Returns the instances whose first item just received focus. Tasks
    /// for instances closed since scheduling were canceled and never
    /// appear here.
    pub fn tick(&mut self, now: Instant) -> Vec<DropdownId> {
        let mut focused = Vec::new();
        for id in self.scheduler.tick(now) {
            if let Some(dropdown) = self.dropdowns.get_mut(&id)
                && dropdown.open
            {
                dropdown.focused_item = Some(0);
                focused.push(id);
            }
        }
        focused
    }
}
