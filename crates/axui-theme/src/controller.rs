#![forbid(unsafe_code)]

//! Theme state machine and visual-sync side effects.
//!
//! [`ThemeController`] owns the active theme. Every transition returns a
//! [`ThemeSync`] describing the presentational side effects the host should
//! apply: the `data-theme` attribute value, the toggle control's icon glyph
//! and accessible label, and the select control's value. The controller
//! persists the active theme and its category after every change; store
//! failures degrade to in-memory operation and are never surfaced to the
//! caller.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::catalog::{Category, ThemeCatalog};
use crate::store::PreferenceStore;
use crate::{CATEGORY_KEY, THEME_KEY};

/// Toggle-control glyphs, one per category family.
mod icon {
    pub const SUN: &str = "\u{2600}";
    pub const MOON: &str = "\u{1F319}";
    pub const SPARKLES: &str = "\u{2728}";
    pub const FILM: &str = "\u{1F3AC}";
    pub const COLLISION: &str = "\u{1F4A5}";
    pub const PALETTE: &str = "\u{1F3A8}";
}

/// Presentational side effects of a theme transition.
///
/// The controller never touches a document; it hands the host this value
/// and the host applies it (root attribute, button icon/label, select).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSync {
    /// Value for the document root's `data-theme` attribute.
    pub data_theme: &'static str,
    /// Glyph for the theme toggle control.
    pub icon: &'static str,
    /// Title / `aria-label` for the theme toggle control.
    pub label: &'static str,
    /// Value the theme select control should show.
    pub select_value: &'static str,
}

/// Immutable view of the active theme, published through [`ThemeHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSnapshot {
    /// Active theme id.
    pub id: &'static str,
    /// Its category.
    pub category: Category,
}

/// Cheap shared reader for the active theme.
///
/// Clones share one slot; [`ThemeController`] swaps it on every transition
/// so readers never observe a torn state and never block the writer.
#[derive(Debug, Clone)]
pub struct ThemeHandle {
    slot: Arc<ArcSwap<ThemeSnapshot>>,
}

impl ThemeHandle {
    fn new(snapshot: ThemeSnapshot) -> Self {
        Self {
            slot: Arc::new(ArcSwap::from_pointee(snapshot)),
        }
    }

    fn publish(&self, snapshot: ThemeSnapshot) {
        self.slot.store(Arc::new(snapshot));
    }

    /// Current snapshot.
    #[must_use]
    pub fn get(&self) -> Arc<ThemeSnapshot> {
        self.slot.load_full()
    }
}

/// Owns current theme state, persists it, and maps state to side effects.
///
/// There is exactly one controller per host session. All mutation goes
/// through [`apply`](Self::apply), [`toggle`](Self::toggle), and
/// [`cycle`](Self::cycle); there is no other writer.
#[derive(Debug)]
pub struct ThemeController<S> {
    catalog: ThemeCatalog,
    store: S,
    current: &'static str,
    last_category: Category,
    handle: ThemeHandle,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Create a controller over `catalog`, restoring the persisted theme.
    ///
    /// A missing or invalid persisted id restores the catalog fallback. The
    /// restored theme is re-applied immediately, so the returned controller
    /// has already synced the store and published its handle.
    pub fn new(catalog: ThemeCatalog, store: S) -> Self {
        let persisted = match store.get(THEME_KEY) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "theme preference unreadable; using default");
                None
            }
        };
        let initial = persisted.unwrap_or_else(|| catalog.fallback().to_owned());
        let fallback = catalog.fallback();
        let handle = ThemeHandle::new(ThemeSnapshot {
            id: fallback,
            category: catalog.category_of(fallback),
        });
        let mut controller = Self {
            current: fallback,
            last_category: catalog.category_of(fallback),
            catalog,
            store,
            handle,
        };
        controller.apply(&initial);
        controller
    }

    /// Create a controller over the builtin catalog.
    pub fn with_defaults(store: S) -> Self {
        Self::new(ThemeCatalog::builtin(), store)
    }

    /// Active theme id.
    #[must_use]
    pub fn current(&self) -> &'static str {
        self.current
    }

    /// Category of the active theme.
    #[must_use]
    pub fn category(&self) -> Category {
        self.catalog.category_of(self.current)
    }

    /// The catalog this controller cycles over.
    #[must_use]
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// Shared reader for the active theme.
    #[must_use]
    pub fn handle(&self) -> ThemeHandle {
        self.handle.clone()
    }

    /// The underlying preference store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a theme by id.
    ///
    /// Unknown ids fall back to the catalog default with a warning; the
    /// document never ends up with an out-of-catalog `data-theme`. The new
    /// id and its category are persisted; store failures are logged and
    /// swallowed.
    pub fn apply(&mut self, id: &str) -> ThemeSync {
        let resolved = if self.catalog.contains(id) {
            // Borrow the catalog's 'static id rather than the caller's.
            self.catalog.get(id).map(|t| t.id).unwrap_or(self.current)
        } else {
            tracing::warn!(theme = %id, fallback = self.catalog.fallback(),
                "unknown theme id; falling back to default");
            self.catalog.fallback()
        };

        let from = self.current;
        let category = self.catalog.category_of(resolved);
        self.current = resolved;
        self.last_category = category;
        self.handle.publish(ThemeSnapshot {
            id: resolved,
            category,
        });
        self.persist(resolved, category);
        if from != resolved {
            tracing::debug!(message = "theme.switch", from, to = resolved);
        }
        self.sync()
    }

    /// Advance to the next theme within `category`, wrapping past the end.
    ///
    /// When the active theme is not a member, the bucket's first entry is
    /// chosen.
    pub fn cycle(&mut self, category: Category) -> ThemeSync {
        let next = self.catalog.next_in(category, self.current);
        self.apply(next)
    }

    /// [`cycle`](Self::cycle) by bucket name; unrecognized names cycle the
    /// whole catalog.
    pub fn cycle_named(&mut self, name: &str) -> ThemeSync {
        self.cycle(Category::parse(name))
    }

    /// Context-sensitive theme toggle.
    ///
    /// Core themes flip between their two members; aesthetic themes cycle
    /// within the aesthetic family; anything else cycles within the last
    /// remembered non-core, non-aesthetic category, defaulting to the whole
    /// catalog.
    pub fn toggle(&mut self) -> ThemeSync {
        match self.category() {
            Category::Core => self.cycle(Category::Core),
            Category::Aesthetic => self.cycle(Category::Aesthetic),
            _ => {
                let bucket = match self.last_category {
                    Category::Core | Category::Aesthetic => Category::All,
                    other => other,
                };
                self.cycle(bucket)
            }
        }
    }

    /// Current side-effect description without changing state.
    #[must_use]
    pub fn sync(&self) -> ThemeSync {
        let (icon, label) = match self.category() {
            Category::Core if self.current == "dark" => (icon::MOON, "Switch to Light Mode"),
            Category::Core => (icon::SUN, "Switch to Dark Mode"),
            Category::Aesthetic => (icon::SPARKLES, "Cycle Theme Mode"),
            Category::Cinematic => (icon::FILM, "Cycle Cinematic Themes"),
            Category::Vibrant => (icon::COLLISION, "Cycle Vibrant Themes"),
            Category::All => (icon::PALETTE, "Cycle Theme Mode"),
        };
        ThemeSync {
            data_theme: self.current,
            icon,
            label,
            select_value: self.current,
        }
    }

    fn persist(&mut self, id: &str, category: Category) {
        if let Err(err) = self.store.set(THEME_KEY, id) {
            tracing::warn!(error = %err, "theme preference not persisted; continuing in memory");
            return;
        }
        if let Err(err) = self.store.set(CATEGORY_KEY, category.as_str()) {
            tracing::warn!(error = %err, "theme category not persisted; continuing in memory");
        }
    }
}
