#![forbid(unsafe_code)]

//! Tab group state machine.
//!
//! An exclusive selection group: exactly one tab is selected at all times
//! and its paired panel is the only one visible. Keyboard focus roves
//! separately from selection so arrow keys can move the focus ring without
//! committing a selection (the `Manual` policy); the `FollowFocus` policy
//! activates on every focus move instead.

use axui_core::event::{KeyCode, KeyEvent};

/// What arrow-key focus movement does to the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivationPolicy {
    /// Arrows move focus only; Enter or Space activates the focused tab.
    #[default]
    Manual,
    /// Arrows activate the tab they move focus to.
    FollowFocus,
}

/// Accessibility attributes for one tab and its paired panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabAttrs {
    /// `aria-selected` on the tab.
    pub selected: bool,
    /// `tabindex` on the tab: 0 for the roving tab stop, -1 otherwise.
    pub tab_index: i32,
    /// `hidden` on the paired panel.
    pub panel_hidden: bool,
}

/// An exclusive group of tabs paired 1:1 with panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    labels: Vec<String>,
    policy: ActivationPolicy,
    selected: usize,
    focused: usize,
}

impl TabGroup {
    /// Bind a group from tab labels and their panel count.
    ///
    /// A count mismatch rejects the whole group; there is no partial
    /// initialization. Empty groups are rejected too.
    pub fn bind(
        labels: impl IntoIterator<Item = impl Into<String>>,
        panel_count: usize,
        policy: ActivationPolicy,
    ) -> Option<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            tracing::warn!("tab group rejected: no tabs");
            return None;
        }
        if labels.len() != panel_count {
            tracing::warn!(
                tabs = labels.len(),
                panels = panel_count,
                "tab group rejected: tab/panel count mismatch"
            );
            return None;
        }
        Some(Self {
            labels,
            policy,
            selected: 0,
            focused: 0,
        })
    }

    /// Number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; empty groups are rejected at bind time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Tab labels in order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the selected tab.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the tab holding the roving tab stop.
    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    /// The group's activation policy.
    #[must_use]
    pub const fn policy(&self) -> ActivationPolicy {
        self.policy
    }

    /// Select tab `index`, moving focus with it.
    ///
    /// Out-of-range indices are ignored. Returns whether the selection
    /// changed.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.labels.len() {
            tracing::warn!(index, tabs = self.labels.len(), "tab activation out of range");
            return false;
        }
        self.focused = index;
        if self.selected == index {
            return false;
        }
        let from = self.selected;
        self.selected = index;
        tracing::debug!(message = "tabs.switch", from, to = index);
        true
    }

    /// Move the roving focus to `index` without changing it further.
    fn focus_to(&mut self, index: usize) -> bool {
        self.focused = index;
        if self.policy == ActivationPolicy::FollowFocus {
            self.activate(index);
        }
        true
    }

    /// Handle tab-bar keyboard navigation.
    ///
    /// Supported:
    /// - `Right` / `Down` and `Left` / `Up` move focus with wraparound
    /// - `Home` / `End` jump to the first / last tab
    /// - `Enter` / `Space` activate the focused tab
    ///
    /// Release events are ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !key.is_down() {
            return false;
        }
        let n = self.labels.len();
        match key.code {
            KeyCode::Right | KeyCode::Down => self.focus_to((self.focused + 1) % n),
            KeyCode::Left | KeyCode::Up => self.focus_to((self.focused + n - 1) % n),
            KeyCode::Home => self.focus_to(0),
            KeyCode::End => self.focus_to(n - 1),
            _ if key.is_activation() => {
                self.activate(self.focused);
                true
            }
            _ => false,
        }
    }

    /// Attributes for tab `index` and its paired panel.
    #[must_use]
    pub fn attrs(&self, index: usize) -> TabAttrs {
        let selected = index == self.selected;
        TabAttrs {
            selected,
            tab_index: if index == self.focused { 0 } else { -1 },
            panel_hidden: !selected,
        }
    }

    /// Attributes for every tab in order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TabAttrs> {
        (0..self.labels.len()).map(|i| self.attrs(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axui_core::event::{KeyCode, KeyEvent};
    use proptest::prelude::*;

    fn group(n: usize, policy: ActivationPolicy) -> TabGroup {
        TabGroup::bind((0..n).map(|i| format!("Tab {i}")), n, policy).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    #[test]
    fn bind_rejects_count_mismatch() {
        assert!(TabGroup::bind(["a", "b", "c"], 2, ActivationPolicy::Manual).is_none());
        assert!(TabGroup::bind(Vec::<String>::new(), 0, ActivationPolicy::Manual).is_none());
        assert!(TabGroup::bind(["a", "b"], 2, ActivationPolicy::Manual).is_some());
    }

    #[test]
    fn activate_is_exclusive() {
        let mut tabs = group(3, ActivationPolicy::Manual);
        assert!(tabs.activate(2));
        let snap = tabs.snapshot();
        assert_eq!(snap.iter().filter(|a| a.selected).count(), 1);
        assert!(snap[2].selected);
        assert!(!snap[2].panel_hidden);
        assert!(snap[0].panel_hidden);
        assert!(snap[1].panel_hidden);
    }

    #[test]
    fn activate_same_tab_returns_false() {
        let mut tabs = group(3, ActivationPolicy::Manual);
        assert!(!tabs.activate(0));
    }

    #[test]
    fn activate_out_of_range_is_ignored() {
        let mut tabs = group(2, ActivationPolicy::Manual);
        assert!(!tabs.activate(5));
        assert_eq!(tabs.selected(), 0);
    }

    #[test]
    fn roving_tab_stop_is_single() {
        let mut tabs = group(4, ActivationPolicy::Manual);
        tabs.handle_key(&key(KeyCode::Right));
        tabs.handle_key(&key(KeyCode::Right));
        let snap = tabs.snapshot();
        assert_eq!(snap.iter().filter(|a| a.tab_index == 0).count(), 1);
        assert_eq!(snap[2].tab_index, 0);
        assert_eq!(snap[0].tab_index, -1);
    }

    #[test]
    fn manual_policy_moves_focus_without_selecting() {
        let mut tabs = group(3, ActivationPolicy::Manual);
        assert!(tabs.handle_key(&key(KeyCode::Right)));
        assert_eq!(tabs.focused(), 1);
        assert_eq!(tabs.selected(), 0);
        assert!(tabs.handle_key(&key(KeyCode::Enter)));
        assert_eq!(tabs.selected(), 1);
    }

    #[test]
    fn space_activates_like_enter() {
        let mut tabs = group(3, ActivationPolicy::Manual);
        tabs.handle_key(&key(KeyCode::Right));
        assert!(tabs.handle_key(&key(KeyCode::Char(' '))));
        assert_eq!(tabs.selected(), 1);
    }

    #[test]
    fn follow_focus_policy_activates_on_movement() {
        let mut tabs = group(3, ActivationPolicy::FollowFocus);
        tabs.handle_key(&key(KeyCode::Right));
        assert_eq!(tabs.selected(), 1);
        tabs.handle_key(&key(KeyCode::Left));
        assert_eq!(tabs.selected(), 0);
    }

    #[test]
    fn arrows_wrap_both_directions() {
        let mut tabs = group(3, ActivationPolicy::Manual);
        tabs.handle_key(&key(KeyCode::Left));
        assert_eq!(tabs.focused(), 2);
        tabs.handle_key(&key(KeyCode::Down));
        assert_eq!(tabs.focused(), 0);
        tabs.handle_key(&key(KeyCode::Up));
        assert_eq!(tabs.focused(), 2);
    }

    #[test]
    fn home_and_end_jump() {
        let mut tabs = group(5, ActivationPolicy::Manual);
        tabs.handle_key(&key(KeyCode::End));
        assert_eq!(tabs.focused(), 4);
        tabs.handle_key(&key(KeyCode::Home));
        assert_eq!(tabs.focused(), 0);
    }

    #[test]
    fn key_release_moves_nothing() {
        use axui_core::event::KeyEventKind;
        let mut tabs = group(3, ActivationPolicy::Manual);
        let release = key(KeyCode::Right).with_kind(KeyEventKind::Release);
        assert!(!tabs.handle_key(&release));
        assert_eq!(tabs.focused(), 0);
        // Auto-repeat still moves focus.
        let repeat = key(KeyCode::Right).with_kind(KeyEventKind::Repeat);
        assert!(tabs.handle_key(&repeat));
        assert_eq!(tabs.focused(), 1);
    }

    #[test]
    fn unhandled_keys_return_false() {
        let mut tabs = group(3, ActivationPolicy::Manual);
        assert!(!tabs.handle_key(&key(KeyCode::Escape)));
        assert!(!tabs.handle_key(&key(KeyCode::Char('x'))));
    }

    proptest! {
        #[test]
        fn selection_stays_exclusive_for_any_sequence(
            n in 2usize..8,
            actions in prop::collection::vec(0u8..6, 1..32),
        ) {
            let mut tabs = group(n, ActivationPolicy::Manual);
            for action in actions {
                match action {
                    0 => { tabs.handle_key(&key(KeyCode::Right)); }
                    1 => { tabs.handle_key(&key(KeyCode::Left)); }
                    2 => { tabs.handle_key(&key(KeyCode::Home)); }
                    3 => { tabs.handle_key(&key(KeyCode::End)); }
                    4 => { tabs.handle_key(&key(KeyCode::Enter)); }
                    _ => { tabs.activate(usize::from(action) % (n + 2)); }
                }
                let snap = tabs.snapshot();
                prop_assert_eq!(snap.iter().filter(|a| a.selected).count(), 1);
                prop_assert_eq!(snap.iter().filter(|a| a.tab_index == 0).count(), 1);
                prop_assert_eq!(snap.iter().filter(|a| !a.panel_hidden).count(), 1);
                prop_assert!(!snap[tabs.selected()].panel_hidden);
            }
        }
    }
}
