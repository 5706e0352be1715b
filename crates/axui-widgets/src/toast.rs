#![forbid(unsafe_code)]

//! Toast host with cancelable auto-dismiss.
//!
//! [`ToastHost`] owns the active toasts and a timer queue. Every timed
//! toast gets a dismiss task keyed by its id; manual dismissal cancels the
//! task, so a timer can never remove a toast that was already replaced or
//! removed. Persistent toasts (`duration: None`) stay until dismissed.
//!
//! Deduplication is opt-in: with a non-zero window, a toast whose message
//! and title hash-match one shown inside the window is rejected.

use ahash::AHashMap;
use axui_core::schedule::Scheduler;
use std::hash::{Hash, Hasher};
use std::time::Duration;
use web_time::Instant;

/// Identifier for a toast within its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
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

/// Visual style tag for a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Neutral information (default).
    #[default]
    Info,
    /// Completed action.
    Success,
    /// Something needs attention.
    Warning,
    /// Failed action.
    Error,
}

/// Options for [`ToastHost::show`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastOptions {
    /// Explicit id; auto-assigned when absent.
    pub id: Option<ToastId>,
    /// Optional title line.
    pub title: Option<String>,
    /// Style tag.
    pub kind: ToastKind,
    /// Auto-dismiss delay; `None` keeps the toast until dismissed.
    pub duration: Option<Duration>,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            kind: ToastKind::Info,
            duration: Some(ToastHostConfig::DEFAULT_DURATION),
        }
    }
}

impl ToastOptions {
    /// Options with the default duration and no title.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit id instead of an auto-assigned one.
    #[must_use]
    pub fn id(mut self, id: ToastId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title line.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the style tag.
    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the auto-dismiss delay.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keep the toast until manually dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }
}

/// An active toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
    title: Option<String>,
    kind: ToastKind,
    duration: Option<Duration>,
}

impl Toast {
    /// The toast's id.
    #[must_use]
    pub const fn id(&self) -> ToastId {
        self.id
    }

    /// Body text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Title line, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Style tag.
    #[must_use]
    pub const fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Whether the toast stays until dismissed.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        self.duration.is_none()
    }

    fn content_hash(&self) -> u64 {
        let mut hasher = ahash::AHasher::default();
        self.message.hash(&mut hasher);
        self.title.hash(&mut hasher);
        hasher.finish()
    }
}

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastHostConfig {
    /// Duration used by [`ToastOptions::default`].
    pub default_duration: Duration,
    /// Dedup window; zero disables deduplication.
    pub dedup_window: Duration,
}

impl ToastHostConfig {
    /// Default auto-dismiss delay.
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

    /// Configuration with deduplication disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dedup window.
    #[must_use]
    pub fn dedup_window(mut self, window: Duration) -> Self {
        self.dedup_window = window;
        self
    }
}

impl Default for ToastHostConfig {
    fn default() -> Self {
        Self {
            default_duration: Self::DEFAULT_DURATION,
            dedup_window: Duration::ZERO,
        }
    }
}

/// Counters for monitoring a host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastStats {
    /// Toasts accepted by `show`.
    pub total_shown: u64,
    /// Toasts rejected by deduplication.
    pub dedup_rejected: u64,
    /// Toasts removed by `dismiss`.
    pub user_dismissed: u64,
    /// Toasts removed by timer expiry.
    pub auto_expired: u64,
}

/// Owns active toasts and their dismiss timers.
#[derive(Debug)]
pub struct ToastHost {
    active: Vec<Toast>,
    scheduler: Scheduler<ToastId>,
    config: ToastHostConfig,
    recent: AHashMap<u64, Instant>,
    stats: ToastStats,
    next_id: u64,
}

impl Default for ToastHost {
    fn default() -> Self {
        Self::new(ToastHostConfig::default())
    }
}

impl ToastHost {
    /// Create a host with the given configuration.
    #[must_use]
    pub fn new(config: ToastHostConfig) -> Self {
        Self {
            active: Vec::new(),
            scheduler: Scheduler::new(),
            config,
            recent: AHashMap::new(),
            stats: ToastStats::default(),
            next_id: 0,
        }
    }

    /// Active toasts in arrival order.
    #[must_use]
    pub fn active(&self) -> &[Toast] {
        &self.active
    }

    /// Look up an active toast.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.active.iter().find(|t| t.id == id)
    }

    /// Number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no toast is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Host counters.
    #[must_use]
    pub const fn stats(&self) -> ToastStats {
        self.stats
    }

    /// Show a toast.
    ///
    /// Returns `None` when rejected by the dedup window. A timed toast
    /// gets a dismiss task; showing with an id that is already active
    /// replaces that toast and its timer.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        options: ToastOptions,
        now: Instant,
    ) -> Option<ToastId> {
        let id = options.id.unwrap_or_else(|| {
            let id = ToastId(self.next_id);
            self.next_id += 1;
            id
        });
        let toast = Toast {
            id,
            message: message.into(),
            title: options.title,
            kind: options.kind,
            duration: options.duration,
        };

        if self.config.dedup_window > Duration::ZERO {
            let hash = toast.content_hash();
            self.recent
                .retain(|_, shown| now.duration_since(*shown) < self.config.dedup_window);
            if self.recent.contains_key(&hash) {
                self.stats.dedup_rejected += 1;
                tracing::debug!(message = "toast.dedup", id = id.0);
                return None;
            }
            self.recent.insert(hash, now);
        }

        if let Some(pos) = self.active.iter().position(|t| t.id == id) {
            self.active.remove(pos);
            self.scheduler.cancel_key(id.0);
        }
        if let Some(duration) = toast.duration {
            self.scheduler.schedule_at(id.0, now + duration, id);
        }
        self.active.push(toast);
        self.stats.total_shown += 1;
        Some(id)
    }

    /// Dismiss a toast, canceling its pending timer.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.active.iter().position(|t| t.id == id) else {
            return false;
        };
        self.active.remove(pos);
        self.scheduler.cancel_key(id.0);
        self.stats.user_dismissed += 1;
        true
    }

    /// Deliver due dismiss timers; returns the expired toast ids.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        let mut expired = Vec::new();
        for id in self.scheduler.tick(now) {
            if let Some(pos) = self.active.iter().position(|t| t.id == id) {
                self.active.remove(pos);
                self.stats.auto_expired += 1;
                expired.push(id);
            }
        }
        expired
    }
}
