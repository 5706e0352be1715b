#![forbid(unsafe_code)]

//! Theme catalog, cycling state machine, and preference persistence.
//!
//! # Role in axui
//! `axui-theme` owns the current theme: which catalog entry is active, which
//! category it belongs to, and how the toggle control should look. Hosts
//! feed user actions into [`ThemeController`] and apply the returned
//! [`ThemeSync`] to their presentation layer (`data-theme` attribute, toggle
//! icon, select value).
//!
//! # This crate provides
//! - [`ThemeCatalog`] and [`ThemeDescriptor`] for the immutable theme set.
//! - [`Category`] buckets that define cycling order.
//! - [`ThemeController`] for apply/toggle/cycle transitions with persistence.
//! - [`PreferenceStore`] with in-memory and JSON-file backends.
//!
//! # Failure semantics
//! Nothing here is fatal. Unknown theme ids fall back to the catalog
//! default with a `tracing` warning; store failures degrade the controller
//! to in-memory operation.

/// Theme catalog and category buckets.
pub mod catalog;
/// Theme state machine and visual-sync side effects.
pub mod controller;
/// Key-value preference persistence.
pub mod store;

pub use catalog::{Category, SelectGroup, ThemeCatalog, ThemeDescriptor};
pub use controller::{ThemeController, ThemeHandle, ThemeSnapshot, ThemeSync};
pub use store::{JsonFileStore, MemoryStore, PreferenceStore, StoreError};

/// Store key holding the active theme id.
pub const THEME_KEY: &str = "theme";
/// Store key holding the active theme's category, used by `toggle`.
pub const CATEGORY_KEY: &str = "themeCategory";
