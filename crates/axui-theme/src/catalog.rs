#![forbid(unsafe_code)]

//! Theme catalog and category buckets.
//!
//! A [`ThemeCatalog`] is an immutable, ordered set of [`ThemeDescriptor`]
//! entries. Each descriptor belongs to one [`Category`]; categories define
//! the cycling order used by the theme toggle. [`Category::All`] is the
//! fallback bucket covering every catalog entry, so category lookup is a
//! total function.

use serde::{Deserialize, Serialize};

/// A named subset of themes that defines cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The binary light/dark pair.
    Core,
    /// The aesthetic family, cycled as a ring.
    Aesthetic,
    /// High-energy color themes.
    Vibrant,
    /// Film-inspired themes.
    Cinematic,
    /// Fallback bucket: every theme, in catalog order.
    #[default]
    All,
}

impl Category {
    /// Stable name used in the preference store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Aesthetic => "aesthetic",
            Self::Vibrant => "vibrant",
            Self::Cinematic => "cinematic",
            Self::All => "all",
        }
    }

    /// Parse a category name; unrecognized names map to [`Category::All`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "core" => Self::Core,
            "aesthetic" => Self::Aesthetic,
            "vibrant" => Self::Vibrant,
            "cinematic" => Self::Cinematic,
            _ => Self::All,
        }
    }
}

/// Immutable catalog entry: a named visual variant and its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// Value used for the `data-theme` attribute and the preference store.
    pub id: &'static str,
    /// Human-readable name for select controls.
    pub name: &'static str,
    /// Optional longer description.
    pub description: Option<&'static str>,
    /// Category membership.
    pub category: Category,
}

impl ThemeDescriptor {
    const fn new(id: &'static str, name: &'static str, category: Category) -> Self {
        Self {
            id,
            name,
            description: None,
            category,
        }
    }

    const fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// One option group for a theme select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectGroup {
    /// Group label.
    pub label: &'static str,
    /// Theme ids in catalog order.
    pub ids: Vec<&'static str>,
}

/// An ordered, immutable set of themes.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<ThemeDescriptor>,
    fallback: &'static str,
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeCatalog {
    /// The builtin catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let themes = vec![
            ThemeDescriptor::new("light", "Light Theme", Category::Core),
            ThemeDescriptor::new("dark", "Dark Theme", Category::Core),
            ThemeDescriptor::new("aesthetic", "Aesthetic", Category::Aesthetic),
            ThemeDescriptor::new("light-aesthetic", "Light Aesthetic", Category::Aesthetic),
            ThemeDescriptor::new("dark-aesthetic", "Dark Aesthetic", Category::Aesthetic),
            ThemeDescriptor::new("purple-haze", "Purple Haze", Category::Vibrant)
                .describe("Rich purple and pink gradient with vibrant colors"),
            ThemeDescriptor::new("electric-neon", "Electric Neon", Category::Vibrant)
                .describe("Vibrant, high-contrast neon colors on a dark background"),
            ThemeDescriptor::new("cyberpunk", "Cyberpunk", Category::Vibrant)
                .describe("High-tech, dystopian aesthetic with bright accent colors"),
            ThemeDescriptor::new("blue", "Blue Theme", Category::All),
            ThemeDescriptor::new("gray", "Gray Theme", Category::All),
            ThemeDescriptor::new("sunset", "Sunset Theme", Category::Vibrant)
                .describe("Warm orange and purple gradients reminiscent of dusk"),
            ThemeDescriptor::new("forest", "Forest Theme", Category::All)
                .describe("Natural greens and earth tones for a calming nature-inspired look"),
            ThemeDescriptor::new("metallic-chic", "Metallic Chic", Category::All)
                .describe("Sophisticated silver and gold accents with subtle gradients"),
            ThemeDescriptor::new("deep-vintage", "Deep Vintage", Category::All)
                .describe("Rich, aged colors with classic styling and warm undertones"),
            ThemeDescriptor::new("mechanical-floaty", "Mechanical Floaty", Category::All)
                .describe("Industrial tones with airy, lightweight accents"),
            ThemeDescriptor::new("cool-collected", "Cool Collected", Category::All)
                .describe("Balanced cool tones with thoughtful color placement"),
            ThemeDescriptor::new("cinematic-dark", "Cinematic Dark", Category::Cinematic)
                .describe("Film-noir inspired dark theme with dramatic contrast"),
            ThemeDescriptor::new("cinematic-red", "Cinematic Red", Category::Cinematic)
                .describe("Bold red accents against dark backgrounds for visual impact"),
            ThemeDescriptor::new("monotone", "Monotone", Category::All)
                .describe("Single-hue design with varying shades and tints"),
            ThemeDescriptor::new("sepia", "Sepia", Category::All)
                .describe("Warm brown tones reminiscent of vintage photographs"),
        ];
        Self {
            themes,
            fallback: "light",
        }
    }

    /// Build a custom catalog. `fallback` must name an entry; when it does
    /// not, the first entry's id is used instead.
    #[must_use]
    pub fn new(themes: Vec<ThemeDescriptor>, fallback: &'static str) -> Self {
        let fallback = if themes.iter().any(|t| t.id == fallback) {
            fallback
        } else {
            themes.first().map_or("light", |t| t.id)
        };
        Self { themes, fallback }
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn themes(&self) -> &[ThemeDescriptor] {
        &self.themes
    }

    /// Look up a descriptor by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ThemeDescriptor> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Whether `id` names a catalog entry.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Designated fallback theme id.
    #[must_use]
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Category of `id`. Total: unknown ids map to [`Category::All`].
    #[must_use]
    pub fn category_of(&self, id: &str) -> Category {
        self.get(id).map_or(Category::All, |t| t.category)
    }

    /// Cycling order for a bucket: member ids in catalog order, or every id
    /// for [`Category::All`].
    #[must_use]
    pub fn cycle_order(&self, category: Category) -> Vec<&'static str> {
        self.themes
            .iter()
            .filter(|t| category == Category::All || t.category == category)
            .map(|t| t.id)
            .collect()
    }

    /// Next theme after `current` within the bucket, wrapping past the end.
    /// When `current` is not a member, the bucket's first entry is returned.
    /// An empty bucket yields the fallback id.
    #[must_use]
    pub fn next_in(&self, category: Category, current: &str) -> &'static str {
        let order = self.cycle_order(category);
        if order.is_empty() {
            return self.fallback;
        }
        match order.iter().position(|id| *id == current) {
            Some(i) if i + 1 < order.len() => order[i + 1],
            _ => order[0],
        }
    }

    /// Option groups for a theme select control: core, aesthetic, and a
    /// specialty group holding everything else.
    #[must_use]
    pub fn select_groups(&self) -> Vec<SelectGroup> {
        let mut core = Vec::new();
        let mut aesthetic = Vec::new();
        let mut specialty = Vec::new();
        for theme in &self.themes {
            match theme.category {
                Category::Core => core.push(theme.id),
                Category::Aesthetic => aesthetic.push(theme.id),
                _ => specialty.push(theme.id),
            }
        }
        vec![
            SelectGroup {
                label: "Core Themes",
                ids: core,
            },
            SelectGroup {
                label: "Aesthetic Themes",
                ids: aesthetic,
            },
            SelectGroup {
                label: "Specialty Themes",
                ids: specialty,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn builtin_has_twenty_entries_with_unique_ids() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.themes().len(), 20);
        let mut ids: Vec<_> = catalog.themes().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn category_of_is_total() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.category_of("light"), Category::Core);
        assert_eq!(catalog.category_of("dark-aesthetic"), Category::Aesthetic);
        assert_eq!(catalog.category_of("sunset"), Category::Vibrant);
        assert_eq!(catalog.category_of("cinematic-red"), Category::Cinematic);
        assert_eq!(catalog.category_of("sepia"), Category::All);
        assert_eq!(catalog.category_of("no-such-theme"), Category::All);
    }

    #[test]
    fn core_cycle_wraps_at_length_two() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.next_in(Category::Core, "light"), "dark");
        assert_eq!(catalog.next_in(Category::Core, "dark"), "light");
    }

    #[test]
    fn non_member_starts_at_bucket_head() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.next_in(Category::Aesthetic, "light"), "aesthetic");
        assert_eq!(catalog.next_in(Category::Vibrant, "bogus"), "purple-haze");
    }

    #[test]
    fn vibrant_order_includes_sunset_last() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(
            catalog.cycle_order(Category::Vibrant),
            vec!["purple-haze", "electric-neon", "cyberpunk", "sunset"]
        );
    }

    #[test]
    fn all_bucket_covers_whole_catalog() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.cycle_order(Category::All).len(), 20);
        assert_eq!(catalog.next_in(Category::All, "sepia"), "light");
    }

    #[test]
    fn category_parse_round_trip_and_fallback() {
        for cat in [
            Category::Core,
            Category::Aesthetic,
            Category::Vibrant,
            Category::Cinematic,
            Category::All,
        ] {
            assert_eq!(Category::parse(cat.as_str()), cat);
        }
        assert_eq!(Category::parse("specialty"), Category::All);
        assert_eq!(Category::parse(""), Category::All);
    }

    #[test]
    fn select_groups_partition_the_catalog() {
        let catalog = ThemeCatalog::builtin();
        let groups = catalog.select_groups();
        assert_eq!(groups.len(), 3);
        let total: usize = groups.iter().map(|g| g.ids.len()).sum();
        assert_eq!(total, catalog.themes().len());
        assert_eq!(groups[0].ids, vec!["light", "dark"]);
        assert_eq!(
            groups[1].ids,
            vec!["aesthetic", "light-aesthetic", "dark-aesthetic"]
        );
    }

    #[test]
    fn custom_catalog_bad_fallback_uses_first_entry() {
        let themes = vec![ThemeDescriptor::new("ink", "Ink", Category::Core)];
        let catalog = ThemeCatalog::new(themes, "missing");
        assert_eq!(catalog.fallback(), "ink");
    }

    #[test]
    fn empty_bucket_yields_fallback() {
        let themes = vec![ThemeDescriptor::new("ink", "Ink", Category::Core)];
        let catalog = ThemeCatalog::new(themes, "ink");
        assert_eq!(catalog.next_in(Category::Cinematic, "ink"), "ink");
    }

    proptest! {
        #[test]
        fn next_in_stays_inside_the_bucket(idx in 0usize..20, cat in 0u8..4) {
            let catalog = ThemeCatalog::builtin();
            let current = catalog.themes()[idx].id;
            let category = match cat {
                0 => Category::Core,
                1 => Category::Aesthetic,
                2 => Category::Vibrant,
                _ => Category::Cinematic,
            };
            let next = catalog.next_in(category, current);
            prop_assert_eq!(catalog.category_of(next), category);
        }

        #[test]
        fn next_in_all_is_total_over_catalog(idx in 0usize..20) {
            let catalog = ThemeCatalog::builtin();
            let current = catalog.themes()[idx].id;
            let next = catalog.next_in(Category::All, current);
            prop_assert!(catalog.contains(next));
        }
    }
}
