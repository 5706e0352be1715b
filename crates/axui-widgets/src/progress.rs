#![forbid(unsafe_code)]

//! Step-wise progress control.
//!
//! Value is an integer percentage. Each activation advances by a fixed
//! step, clamped at 100; at 100 the control reports itself disabled with
//! its completed label and further advances are no-ops.

use axui_core::event::KeyEvent;

/// Attributes for the progress bar and its trigger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressAttrs {
    /// `aria-valuenow`, 0 to 100.
    pub value: u8,
    /// `disabled` on the trigger button.
    pub disabled: bool,
    /// Current trigger label.
    pub label: &'static str,
}

/// An integer progress value driven by repeated activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressControl {
    value: u8,
    step: u8,
    active_label: &'static str,
    complete_label: &'static str,
}

impl Default for ProgressControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressControl {
    /// Create a control at 0 with a step of 10.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: 0,
            step: 10,
            active_label: "Click to Load",
            complete_label: "Loading Complete!",
        }
    }

    /// Set the per-activation step.
    #[must_use]
    pub fn step(mut self, step: u8) -> Self {
        self.step = step;
        self
    }

    /// Set the label shown while loading.
    #[must_use]
    pub fn active_label(mut self, label: &'static str) -> Self {
        self.active_label = label;
        self
    }

    /// Set the label shown at 100.
    #[must_use]
    pub fn complete_label(mut self, label: &'static str) -> Self {
        self.complete_label = label;
        self
    }

    /// Current value, 0 to 100.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Whether the value reached 100.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.value >= 100
    }

    /// Advance one step, clamped at 100. No-op once complete.
    pub fn advance(&mut self) -> u8 {
        if !self.is_complete() {
            self.value = self.value.saturating_add(self.step).min(100);
        }
        self.value
    }

    /// Enter and Space advance, same as a pointer press. Release events
    /// are ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.is_down() && key.is_activation() && !self.is_complete() {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Attributes for the bar and trigger.
    #[must_use]
    pub const fn attrs(&self) -> ProgressAttrs {
        let complete = self.is_complete();
        ProgressAttrs {
            value: self.value,
            disabled: complete,
            label: if complete {
                self.complete_label
            } else {
                self.active_label
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axui_core::event::{KeyCode, KeyEvent};

    #[test]
    fn advance_steps_by_ten() {
        let mut progress = ProgressControl::new();
        assert_eq!(progress.advance(), 10);
        assert_eq!(progress.advance(), 20);
    }

    #[test]
    fn value_clamps_at_one_hundred() {
        let mut progress = ProgressControl::new().step(33);
        for _ in 0..10 {
            progress.advance();
        }
        assert_eq!(progress.value(), 100);
    }

    #[test]
    fn complete_control_is_disabled_and_relabeled() {
        let mut progress = ProgressControl::new();
        for _ in 0..10 {
            progress.advance();
        }
        let attrs = progress.attrs();
        assert!(attrs.disabled);
        assert_eq!(attrs.label, "Loading Complete!");
        // Further advances are no-ops.
        assert_eq!(progress.advance(), 100);
    }

    #[test]
    fn incomplete_control_is_enabled_with_active_label() {
        let progress = ProgressControl::new();
        let attrs = progress.attrs();
        assert_eq!(attrs.value, 0);
        assert!(!attrs.disabled);
        assert_eq!(attrs.label, "Click to Load");
    }

    #[test]
    fn key_release_does_not_advance() {
        use axui_core::event::KeyEventKind;
        let mut progress = ProgressControl::new();
        let release = KeyEvent::new(KeyCode::Enter).with_kind(KeyEventKind::Release);
        assert!(!progress.handle_key(&release));
        assert_eq!(progress.value(), 0);
    }

    #[test]
    fn keys_advance_until_complete() {
        let mut progress = ProgressControl::new().step(50);
        assert!(progress.handle_key(&KeyEvent::new(KeyCode::Enter)));
        assert!(progress.handle_key(&KeyEvent::new(KeyCode::Char(' '))));
        assert!(progress.is_complete());
        assert!(!progress.handle_key(&KeyEvent::new(KeyCode::Enter)));
        assert!(!progress.handle_key(&KeyEvent::new(KeyCode::Escape)));
    }
}
