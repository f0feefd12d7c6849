// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-provided rendering configuration.
//!
//! None of these settings affect reconciliation except `return_events`, which
//! gates click notifications, and `settle_delay_ms`, which sizes the window in
//! which a post-drop click is suppressed. The rest is passed through to the
//! item renderer.

use alloc::string::String;
use core::hash::Hash;

use hashbrown::HashMap;

/// Default settle window after a drop, in milliseconds.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 150;

/// Layout axis for the item renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Items flow left to right.
    #[default]
    Horizontal,
    /// Items flow top to bottom.
    Vertical,
}

/// Configuration supplied by the host alongside the containers.
///
/// With the `serde` feature this reads the host's camelCase keys
/// (`direction`, `customStyle`, `returnEvents`, `itemLabels`); any missing key
/// takes its default.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        rename_all = "camelCase",
        default,
        bound(
            serialize = "K: serde::Serialize + Eq + core::hash::Hash",
            deserialize = "K: serde::Deserialize<'de> + Eq + core::hash::Hash"
        )
    )
)]
pub struct SortableConfig<K = String> {
    /// Layout axis hint.
    pub direction: Direction,
    /// Opaque style sheet for the renderer.
    pub custom_style: Option<String>,
    /// Report item clicks to the host in addition to reorders.
    pub return_events: bool,
    /// Display labels keyed by item id.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub item_labels: HashMap<K, String>,
    /// How long after a drop clicks are still treated as part of the drag.
    pub settle_delay_ms: u64,
}

impl<K> Default for SortableConfig<K> {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            custom_style: None,
            return_events: false,
            item_labels: HashMap::new(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl<K> SortableConfig<K> {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layout axis.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the opaque renderer style.
    #[must_use]
    pub fn with_custom_style(mut self, style: impl Into<String>) -> Self {
        self.custom_style = Some(style.into());
        self
    }

    /// Opts in to (or out of) click notifications.
    #[must_use]
    pub fn with_return_events(mut self, return_events: bool) -> Self {
        self.return_events = return_events;
        self
    }

    /// Sets the settle window in milliseconds.
    #[must_use]
    pub fn with_settle_delay_ms(mut self, delay: u64) -> Self {
        self.settle_delay_ms = delay;
        self
    }
}

impl<K: Hash + Eq> SortableConfig<K> {
    /// Adds a display label for `item`.
    #[must_use]
    pub fn with_item_label(mut self, item: K, label: impl Into<String>) -> Self {
        self.item_labels.insert(item, label.into());
        self
    }

    /// Returns the display label registered for `item`, if any.
    #[must_use]
    pub fn label_for(&self, item: &K) -> Option<&str> {
        self.item_labels.get(item).map(String::as_str)
    }

    /// Returns the text the renderer should show for `item`: its label when
    /// one is registered, otherwise the id itself.
    #[must_use]
    pub fn display_label<'a>(&'a self, item: &'a K) -> &'a str
    where
        K: AsRef<str>,
    {
        self.label_for(item).unwrap_or_else(|| item.as_ref())
    }
}

impl<K: Hash + Eq> PartialEq for SortableConfig<K> {
    fn eq(&self, other: &Self) -> bool {
        self.direction == other.direction
            && self.custom_style == other.custom_style
            && self.return_events == other.return_events
            && self.item_labels == other.item_labels
            && self.settle_delay_ms == other.settle_delay_ms
    }
}

impl<K: Hash + Eq> Eq for SortableConfig<K> {}

#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    use serde::Deserialize;
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_defaults() {
        let config = SortableConfig::<String>::new();
        assert_eq!(config.direction, Direction::Horizontal);
        assert_eq!(config.custom_style, None);
        assert!(!config.return_events);
        assert!(config.item_labels.is_empty());
        assert_eq!(config.settle_delay_ms, DEFAULT_SETTLE_DELAY_MS);
    }

    #[test]
    fn display_label_falls_back_to_id() {
        let config = SortableConfig::new().with_item_label("a", "Apple");
        assert_eq!(config.display_label(&"a"), "Apple");
        assert_eq!(config.display_label(&"b"), "b");
        assert_eq!(config.label_for(&"b"), None);
    }

    #[test]
    fn builders_compose() {
        let config = SortableConfig::<&str>::new()
            .with_direction(Direction::Vertical)
            .with_custom_style(".sortable-item { color: red; }")
            .with_return_events(true)
            .with_settle_delay_ms(200);
        assert_eq!(config.direction, Direction::Vertical);
        assert!(config.return_events);
        assert_eq!(config.settle_delay_ms, 200);
        assert_ne!(config, SortableConfig::new());
    }
}
