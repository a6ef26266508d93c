//! Per-category visibility toggles and the filter they drive.
//!
//! `Layers` is a value: toggling returns a new configuration and leaves the
//! original untouched, so a render can be reproduced from the inputs alone.

use serde::{Deserialize, Serialize};

use crate::category::EntryCategory;
use crate::entry::TimelineEntry;
use crate::labels::Locale;

/// One toggleable visibility group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub category: EntryCategory,
    pub label: String,
    pub icon: String,
    pub visible: bool,
}

impl LayerConfig {
    pub fn new(category: EntryCategory, locale: Locale) -> Self {
        Self {
            category,
            label: locale.category(category).to_string(),
            icon: category.icon().to_string(),
            visible: true,
        }
    }
}

/// Ordered layer configuration for a timeline session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layers {
    layers: Vec<LayerConfig>,
}

impl Layers {
    /// The mount-time default: one layer per category, all visible.
    pub fn new(locale: Locale) -> Self {
        Self {
            layers: EntryCategory::ALL
                .into_iter()
                .map(|category| LayerConfig::new(category, locale))
                .collect(),
        }
    }

    /// Builds a configuration from an explicit list supplied by the host.
    ///
    /// A category missing from the list counts as hidden.
    pub const fn from_configs(layers: Vec<LayerConfig>) -> Self {
        Self { layers }
    }

    /// Returns a copy with one category's visibility flipped.
    #[must_use]
    pub fn toggled(&self, category: EntryCategory) -> Self {
        self.with_visibility(category, !self.is_visible(category))
    }

    /// Returns a copy with one category's visibility set.
    #[must_use]
    pub fn with_visibility(&self, category: EntryCategory, visible: bool) -> Self {
        let layers = self
            .layers
            .iter()
            .map(|layer| {
                if layer.category == category {
                    LayerConfig {
                        visible,
                        ..layer.clone()
                    }
                } else {
                    layer.clone()
                }
            })
            .collect();
        Self { layers }
    }

    pub fn is_visible(&self, category: EntryCategory) -> bool {
        self.layers
            .iter()
            .any(|layer| layer.category == category && layer.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.layers.iter().filter(|layer| layer.visible).count()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// True when nothing can be shown; the view must then say so explicitly.
    pub fn all_hidden(&self) -> bool {
        self.visible_count() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerConfig> {
        self.layers.iter()
    }

    /// Keeps the entries whose category is visible, in their original order.
    pub fn filter<'a>(&self, entries: &'a [TimelineEntry]) -> Vec<&'a TimelineEntry> {
        entries
            .iter()
            .filter(|entry| self.is_visible(entry.category()))
            .collect()
    }

    /// Panel header count, e.g. `2/3 visibles`.
    pub fn summary(&self, locale: Locale) -> String {
        locale.visible_summary(self.visible_count(), self.len())
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
