#![forbid(unsafe_code)]

//! Deterministic cancelable timer queue.
//!
//! UI interactions in this toolkit have exactly two asynchronous elements: a
//! deferred focus move after a dropdown opens, and toast auto-dismissal.
//! Both are modeled as entries in a [`Scheduler`] that the host drives with
//! explicit [`Scheduler::tick`] calls, so nothing fires behind the state
//! machines' backs and every pending task can be canceled when its widget
//! is torn down or superseded.
//!
//! Entries are keyed two ways: a unique [`TimerId`] per entry (cancel one
//! task) and a caller-chosen [`TaskKey`] (cancel everything belonging to a
//! widget instance).
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use axui_core::schedule::Scheduler;
//! use web_time::Instant;
//!
//! let mut timers: Scheduler<&'static str> = Scheduler::new();
//! let now = Instant::now();
//! timers.schedule_at(7, now + Duration::from_millis(100), "focus-first-item");
//! assert!(timers.tick(now).is_empty());
//! assert_eq!(timers.tick(now + Duration::from_millis(100)), vec!["focus-first-item"]);
//! ```

use std::time::Duration;

use web_time::Instant;

/// Caller-chosen grouping key, typically a widget instance id.
pub type TaskKey = u64;

/// Unique handle for one scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    key: TaskKey,
    deadline: Instant,
    task: T,
}

/// Deterministic timer queue.
///
/// Tasks are delivered from [`Scheduler::tick`] in deadline order; ties are
/// broken by scheduling order. The queue never fires on its own.
#[derive(Debug)]
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `task` to become due `delay` from now.
    pub fn schedule(&mut self, key: TaskKey, delay: Duration, task: T) -> TimerId {
        self.schedule_at(key, Instant::now() + delay, task)
    }

    /// Schedule `task` with an explicit deadline.
    pub fn schedule_at(&mut self, key: TaskKey, deadline: Instant, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            key,
            deadline,
            task,
        });
        id
    }

    /// Cancel a single entry. Returns `true` if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every entry scheduled under `key`. Returns how many were
    /// dropped. Call this from widget teardown so nothing fires against a
    /// dead instance.
    pub fn cancel_key(&mut self, key: TaskKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        before - self.entries.len()
    }

    /// Drain every entry whose deadline is at or before `now`, in deadline
    /// order (scheduling order for equal deadlines).
    pub fn tick(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<Entry<T>> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].deadline <= now {
                due.push(self.entries.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.id.cmp(&b.id)));
        due.into_iter().map(|e| e.task).collect()
    }

    /// Whether an entry is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of pending entries under `key`.
    #[must_use]
    pub fn pending_for(&self, key: TaskKey) -> usize {
        self.entries.iter().filter(|e| e.key == key).count()
    }

    /// Total pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn base() -> Instant {
        Instant::now()
    }

    #[test]
    fn tick_before_deadline_delivers_nothing() {
        let mut timers = Scheduler::new();
        let now = base();
        timers.schedule_at(1, now + Duration::from_millis(50), "a");
        assert!(timers.tick(now).is_empty());
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn tick_delivers_in_deadline_order() {
        let mut timers = Scheduler::new();
        let now = base();
        timers.schedule_at(1, now + Duration::from_millis(30), "late");
        timers.schedule_at(1, now + Duration::from_millis(10), "early");
        timers.schedule_at(2, now + Duration::from_millis(20), "middle");
        let due = timers.tick(now + Duration::from_millis(30));
        assert_eq!(due, vec!["early", "middle", "late"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn equal_deadlines_keep_schedule_order() {
        let mut timers = Scheduler::new();
        let now = base();
        let deadline = now + Duration::from_millis(5);
        timers.schedule_at(1, deadline, "first");
        timers.schedule_at(1, deadline, "second");
        assert_eq!(timers.tick(deadline), vec!["first", "second"]);
    }

    #[test]
    fn canceled_entry_never_fires() {
        let mut timers = Scheduler::new();
        let now = base();
        let id = timers.schedule_at(1, now, "never");
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.tick(now).is_empty());
    }

    #[test]
    fn cancel_key_drops_only_that_instance() {
        let mut timers = Scheduler::new();
        let now = base();
        timers.schedule_at(1, now, "a");
        timers.schedule_at(1, now, "b");
        timers.schedule_at(2, now, "kept");
        assert_eq!(timers.cancel_key(1), 2);
        assert_eq!(timers.pending_for(1), 0);
        assert_eq!(timers.tick(now), vec!["kept"]);
    }

    #[test]
    fn is_pending_tracks_lifecycle() {
        let mut timers = Scheduler::new();
        let now = base();
        let id = timers.schedule_at(9, now + Duration::from_millis(1), "x");
        assert!(timers.is_pending(id));
        timers.tick(now + Duration::from_millis(1));
        assert!(!timers.is_pending(id));
    }

    #[test]
    fn later_entries_survive_partial_drain() {
        let mut timers = Scheduler::new();
        let now = base();
        timers.schedule_at(1, now + Duration::from_millis(10), "due");
        timers.schedule_at(1, now + Duration::from_millis(100), "waiting");
        assert_eq!(timers.tick(now + Duration::from_millis(10)), vec!["due"]);
        assert_eq!(timers.pending_for(1), 1);
    }

    proptest! {
        // Interleaved schedule/cancel/cancel_key/tick steps: a canceled
        // task is never delivered, and an expired one is delivered once.
        #[test]
        fn canceled_tasks_are_never_delivered(
            steps in prop::collection::vec((0u8..4, 0u64..4, 0u64..50), 1..64),
        ) {
            let mut timers: Scheduler<u64> = Scheduler::new();
            let base = base();
            let mut next_task = 0u64;
            let mut live: Vec<(TimerId, u64)> = Vec::new();
            let mut canceled: Vec<u64> = Vec::new();
            let mut delivered: Vec<u64> = Vec::new();
            let mut clock = base;

            for (op, key, offset) in steps {
                match op {
                    0 => {
                        let deadline = base + Duration::from_millis(offset);
                        let id = timers.schedule_at(key, deadline, next_task);
                        live.push((id, next_task));
                        next_task += 1;
                    }
                    1 => {
                        if let Some(&(id, task)) = live.first() {
                            timers.cancel(id);
                            live.retain(|&(i, _)| i != id);
                            canceled.push(task);
                        }
                    }
                    2 => {
                        timers.cancel_key(key);
                        // Group cancel applies to every pending entry under
                        // the key, mirrored via pending_for going to zero.
                        prop_assert_eq!(timers.pending_for(key), 0);
                        live.retain(|&(id, task)| {
                            if timers.is_pending(id) {
                                true
                            } else {
                                canceled.push(task);
                                false
                            }
                        });
                    }
                    _ => {
                        clock += Duration::from_millis(offset);
                        let due = timers.tick(clock);
                        for task in &due {
                            live.retain(|&(_, t)| t != *task);
                        }
                        delivered.extend(due);
                    }
                }
            }
            delivered.extend(timers.tick(clock + Duration::from_millis(100)));

            for task in &canceled {
                prop_assert!(!delivered.contains(task));
            }
            let mut seen = delivered.clone();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), delivered.len());
        }
    }
}
