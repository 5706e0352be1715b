#![forbid(unsafe_code)]

//! axui public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use axui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use axui_core::schedule::{Scheduler, TaskKey, TimerId};

// --- Theme re-exports ------------------------------------------------------

pub use axui_theme::catalog::{Category, SelectGroup, ThemeCatalog, ThemeDescriptor};
pub use axui_theme::controller::{ThemeController, ThemeHandle, ThemeSnapshot, ThemeSync};
pub use axui_theme::store::{JsonFileStore, MemoryStore, PreferenceStore, StoreError};

// --- Widget re-exports -----------------------------------------------------

pub use axui_widgets::{
    Accordion, ActivationPolicy, Dialog, DialogKey, Dropdown, DropdownGroup, DropdownId, FocusId,
    FocusRing, MobileNav, NavEvent, ProgressControl, TabGroup, Throbber, Toast, ToastHost,
    ToastHostConfig, ToastId, ToastKind, ToastOptions,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Accordion, ActivationPolicy, Category, Dialog, DropdownGroup, Event, FocusId, FocusRing,
        KeyCode, KeyEvent, MemoryStore, MobileNav, Modifiers, ProgressControl, TabGroup,
        ThemeCatalog, ThemeController, ThemeSync, Throbber, ToastHost, ToastOptions,
    };

    pub use crate::{core, theme, widgets};
}

pub use axui_core as core;
pub use axui_theme as theme;
pub use axui_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    // End-to-end pass over the surface a host wires together.
    #[test]
    fn facade_surface_is_usable_together() {
        let mut controller = ThemeController::with_defaults(MemoryStore::new());
        let sync = controller.toggle();
        assert_eq!(sync.data_theme, "dark");

        let mut tabs = TabGroup::bind(["One", "Two"], 2, ActivationPolicy::Manual).unwrap();
        assert!(tabs.handle_key(&KeyEvent::new(KeyCode::Right)));

        let mut nav = MobileNav::new();
        nav.toggle();
        assert_eq!(
            nav.handle_event(&Event::OutsidePress),
            crate::NavEvent::Closed {
                focus_toggle: false
            }
        );
    }
}
