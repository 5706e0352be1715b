#![forbid(unsafe_code)]

//! Loading-indicator toggle.

use axui_core::event::KeyEvent;

/// Attributes for the indicator and its paired toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrobberAttrs {
    /// `aria-hidden` on the indicator element.
    pub aria_hidden: bool,
    /// Current toggle label.
    pub button_label: &'static str,
}

/// A boolean loading indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throbber {
    running: bool,
    start_label: &'static str,
    stop_label: &'static str,
}

impl Default for Throbber {
    fn default() -> Self {
        Self::new()
    }
}

impl Throbber {
    /// Create a stopped indicator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            running: false,
            start_label: "Start Loading",
            stop_label: "Stop Loading",
        }
    }

    /// Set the labels shown while stopped and while running.
    #[must_use]
    pub fn labels(mut self, start: &'static str, stop: &'static str) -> Self {
        self.start_label = start;
        self.stop_label = stop;
        self
    }

    /// Whether the indicator is spinning.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Flip the indicator; returns the new running state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Enter and Space toggle, same as a pointer press. Release events
    /// are ignored so one physical keypress toggles once.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.is_down() && key.is_activation() {
            self.toggle();
            true
        } else {
            false
        }
    }

    /// Attributes for the indicator and toggle.
    #[must_use]
    pub const fn attrs(&self) -> ThrobberAttrs {
        ThrobberAttrs {
            aria_hidden: !self.running,
            button_label: if self.running {
                self.stop_label
            } else {
                self.start_label
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axui_core::event::{KeyCode, KeyEvent};

    #[test]
    fn toggle_alternates_running_state() {
        let mut throbber = Throbber::new();
        assert!(!throbber.is_running());
        assert!(throbber.toggle());
        assert!(!throbber.toggle());
    }

    #[test]
    fn attrs_pair_visibility_with_label() {
        let mut throbber = Throbber::new();
        let stopped = throbber.attrs();
        assert!(stopped.aria_hidden);
        assert_eq!(stopped.button_label, "Start Loading");

        throbber.toggle();
        let running = throbber.attrs();
        assert!(!running.aria_hidden);
        assert_eq!(running.button_label, "Stop Loading");
    }

    #[test]
    fn custom_labels_are_used() {
        let mut throbber = Throbber::new().labels("Spin", "Halt");
        assert_eq!(throbber.attrs().button_label, "Spin");
        throbber.toggle();
        assert_eq!(throbber.attrs().button_label, "Halt");
    }

    #[test]
    fn key_release_does_not_toggle_again() {
        use axui_core::event::KeyEventKind;
        let mut throbber = Throbber::new();
        let press = KeyEvent::new(KeyCode::Enter);
        let release = press.with_kind(KeyEventKind::Release);
        assert!(throbber.handle_key(&press));
        assert!(!throbber.handle_key(&release));
        assert!(throbber.is_running());
    }

    #[test]
    fn activation_keys_toggle() {
        let mut throbber = Throbber::new();
        assert!(throbber.handle_key(&KeyEvent::new(KeyCode::Enter)));
        assert!(throbber.is_running());
        assert!(throbber.handle_key(&KeyEvent::new(KeyCode::Char(' '))));
        assert!(!throbber.is_running());
        assert!(!throbber.handle_key(&KeyEvent::new(KeyCode::Tab)));
    }
}
