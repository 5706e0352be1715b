#![forbid(unsafe_code)]

//! Headless widget state machines.
//!
//! Each widget owns its activation state and exposes it through typed
//! accessors plus a small attribute snapshot mirroring the accessibility
//! contract (`aria-selected`, `aria-expanded`, `aria-hidden`, `tabindex`).
//! Nothing here renders; a host binds real controls to these machines and
//! applies the snapshots after each transition.
//!
//! Keyboard handling follows one convention throughout: widgets take a
//! `&KeyEvent` and return `true` when the key was consumed.

pub mod accordion;
pub mod dropdown;
pub mod focus;
pub mod modal;
pub mod nav;
pub mod progress;
pub mod tabs;
pub mod throbber;
pub mod toast;

pub use accordion::{Accordion, SectionAttrs};
pub use dropdown::{Dropdown, DropdownAttrs, DropdownGroup, DropdownId};
pub use focus::{FocusId, FocusRing};
pub use modal::{Dialog, DialogKey};
pub use nav::{MobileNav, NavAttrs, NavEvent};
pub use progress::{ProgressAttrs, ProgressControl};
pub use tabs::{ActivationPolicy, TabAttrs, TabGroup};
pub use throbber::{Throbber, ThrobberAttrs};
pub use toast::{Toast, ToastHost, ToastHostConfig, ToastId, ToastKind, ToastOptions, ToastStats};
