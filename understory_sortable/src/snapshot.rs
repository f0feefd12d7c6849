// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containers, snapshots, and the relocation primitives used by the reconciler.
//!
//! A [`Snapshot`] is the full ordered set of [`Container`]s, each holding an
//! ordered list of item ids. Item ids are unique across the whole snapshot, not
//! per container, so an id alone is enough to find where an item lives.
//!
//! All mutation helpers here are order-preserving: they move exactly one item
//! and leave the relative order of every other item untouched. When an id does
//! not resolve they return `false` and leave the snapshot unchanged.
//!
//! ## Minimal example
//!
//! ```
//! use understory_sortable::{Container, Snapshot};
//!
//! let mut snapshot: Snapshot<&str> = Snapshot::new(vec![
//!     Container::new("A", ["x", "y"]),
//!     Container::new("B", ["z"]),
//! ]);
//!
//! // Labels resolve before items.
//! assert_eq!(snapshot.find_container(&"B"), Some(1));
//! assert_eq!(snapshot.find_container(&"y"), Some(0));
//!
//! // Hovering `x` over container `B` appends it there.
//! assert!(snapshot.move_across(&"x", &"B"));
//! assert_eq!(snapshot.containers()[0].items, ["y"]);
//! assert_eq!(snapshot.containers()[1].items, ["z", "x"]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::error::SnapshotError;

/// A labelled, ordered list of item ids.
///
/// The `header` doubles as the container's stable id and may be used as a drop
/// target in its own right (for example, dropping onto an empty list).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container<K = String> {
    /// Label shown above the list; also the container's id.
    pub header: K,
    /// Item ids in display order.
    pub items: Vec<K>,
}

impl<K> Container<K> {
    /// Creates a container from a label and its items.
    pub fn new<H, I, T>(header: H, items: I) -> Self
    where
        H: Into<K>,
        I: IntoIterator<Item = T>,
        T: Into<K>,
    {
        Self {
            header: header.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of items in this container.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the container holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: PartialEq> Container<K> {
    /// Returns the index of `item` within this container, if present.
    #[must_use]
    pub fn position(&self, item: &K) -> Option<usize> {
        self.items.iter().position(|k| k == item)
    }

    /// Returns `true` if `item` lives in this container.
    #[must_use]
    pub fn contains(&self, item: &K) -> bool {
        self.position(item).is_some()
    }
}

/// The ordered set of containers at a point in time.
///
/// Equality is structural: two snapshots are equal when they have the same
/// containers in the same order and every container lists the same items in
/// the same order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Snapshot<K = String> {
    containers: Vec<Container<K>>,
}

impl<K> Default for Snapshot<K> {
    fn default() -> Self {
        Self {
            containers: Vec::new(),
        }
    }
}

impl<K> Snapshot<K> {
    /// Creates a snapshot without validating it.
    ///
    /// Callers must guarantee unique labels and unique item ids; use
    /// [`Snapshot::try_new`] for untrusted input.
    #[must_use]
    pub fn new(containers: Vec<Container<K>>) -> Self {
        Self { containers }
    }

    /// Returns the containers in render order.
    #[must_use]
    pub fn containers(&self) -> &[Container<K>] {
        &self.containers
    }

    /// Consumes the snapshot, returning its containers.
    #[must_use]
    pub fn into_containers(self) -> Vec<Container<K>> {
        self.containers
    }

    /// Returns the container at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Container<K>> {
        self.containers.get(index)
    }

    /// Returns an iterator over the containers in render order.
    pub fn iter(&self) -> core::slice::Iter<'_, Container<K>> {
        self.containers.iter()
    }

    /// Returns the number of containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns `true` if there are no containers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Returns the total number of items across all containers.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }

    /// Moves the item at `from` to `to` within container `container`.
    ///
    /// Mirrors a remove-then-insert: every item between the two positions
    /// shifts by one. Returns `true` if the order changed; out-of-range indices
    /// leave the snapshot untouched.
    pub fn move_within(&mut self, container: usize, from: usize, to: usize) -> bool {
        let Some(target) = self.containers.get_mut(container) else {
            return false;
        };
        let len = target.items.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let item = target.items.remove(from);
        target.items.insert(to, item);
        true
    }
}

impl<K: PartialEq> Snapshot<K> {
    /// Resolves an id to the index of the container it names or lives in.
    ///
    /// Container labels are checked first, then each container's items. Returns
    /// `None` when `id` matches neither, which callers treat as a drop outside
    /// every container.
    #[must_use]
    pub fn find_container(&self, id: &K) -> Option<usize> {
        self.containers
            .iter()
            .position(|c| &c.header == id)
            .or_else(|| self.containers.iter().position(|c| c.contains(id)))
    }

    /// Returns `(container, index)` for an item id.
    ///
    /// Unlike [`Snapshot::find_container`], this never matches labels.
    #[must_use]
    pub fn locate(&self, item: &K) -> Option<(usize, usize)> {
        self.containers
            .iter()
            .enumerate()
            .find_map(|(ci, c)| c.position(item).map(|ii| (ci, ii)))
    }

    /// Returns the container holding `item`.
    #[must_use]
    pub fn container_of(&self, item: &K) -> Option<&Container<K>> {
        self.locate(item).map(|(ci, _)| &self.containers[ci])
    }

    /// Moves `active` out of its container and into the container `over`
    /// resolves to.
    ///
    /// The insertion index is the position of `over` in the destination when
    /// `over` is an item there, otherwise the end of the destination. Returns
    /// `false` without touching anything when `active` is not an item, `over`
    /// does not resolve, or both already share a container.
    pub fn move_across(&mut self, active: &K, over: &K) -> bool {
        let Some((source, from)) = self.locate(active) else {
            return false;
        };
        let Some(dest) = self.find_container(over) else {
            return false;
        };
        if source == dest {
            return false;
        }
        let index = self.containers[dest]
            .position(over)
            .unwrap_or(self.containers[dest].items.len());
        let item = self.containers[source].items.remove(from);
        self.containers[dest].items.insert(index, item);
        true
    }
}

impl<K: Hash + Eq + Clone> Snapshot<K> {
    /// Creates a snapshot after checking that labels and item ids are unique
    /// and that no id is both a label and an item.
    pub fn try_new(containers: Vec<Container<K>>) -> Result<Self, SnapshotError<K>> {
        let snapshot = Self { containers };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks the uniqueness invariants on an existing snapshot.
    pub fn validate(&self) -> Result<(), SnapshotError<K>> {
        let mut headers: HashSet<&K> = HashSet::with_capacity(self.containers.len());
        for container in &self.containers {
            if !headers.insert(&container.header) {
                return Err(SnapshotError::DuplicateHeader(container.header.clone()));
            }
        }

        let mut items: HashSet<&K> = HashSet::with_capacity(self.item_count());
        for item in self.containers.iter().flat_map(|c| c.items.iter()) {
            if headers.contains(item) {
                return Err(SnapshotError::AmbiguousId(item.clone()));
            }
            if !items.insert(item) {
                return Err(SnapshotError::DuplicateItem(item.clone()));
            }
        }
        Ok(())
    }
}

impl<K> From<Vec<Container<K>>> for Snapshot<K> {
    fn from(containers: Vec<Container<K>>) -> Self {
        Self::new(containers)
    }
}

impl<K> FromIterator<Container<K>> for Snapshot<K> {
    fn from_iter<I: IntoIterator<Item = Container<K>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, K> IntoIterator for &'a Snapshot<K> {
    type Item = &'a Container<K>;
    type IntoIter = core::slice::Iter<'a, Container<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.containers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn board() -> Snapshot<&'static str> {
        Snapshot::new(vec![
            Container::new("A", ["a1", "a2", "a3"]),
            Container::new("B", ["b1"]),
            Container::new("C", Vec::<&str>::new()),
        ])
    }

    #[test]
    fn find_container_prefers_labels() {
        let s = board();
        assert_eq!(s.find_container(&"A"), Some(0));
        assert_eq!(s.find_container(&"C"), Some(2));
        assert_eq!(s.find_container(&"a3"), Some(0));
        assert_eq!(s.find_container(&"b1"), Some(1));
        assert_eq!(s.find_container(&"nope"), None);
    }

    #[test]
    fn locate_ignores_labels() {
        let s = board();
        assert_eq!(s.locate(&"a2"), Some((0, 1)));
        assert_eq!(s.locate(&"B"), None);
        assert_eq!(s.container_of(&"b1").map(|c| c.header), Some("B"));
    }

    #[test]
    fn move_within_relocates_forward_and_backward() {
        let mut s = board();
        assert!(s.move_within(0, 0, 2));
        assert_eq!(s.containers()[0].items, ["a2", "a3", "a1"]);
        assert!(s.move_within(0, 2, 0));
        assert_eq!(s.containers()[0].items, ["a1", "a2", "a3"]);
    }

    #[test]
    fn move_within_rejects_noops_and_bad_indices() {
        let mut s = board();
        let before = s.clone();
        assert!(!s.move_within(0, 1, 1));
        assert!(!s.move_within(0, 3, 0));
        assert!(!s.move_within(0, 0, 3));
        assert!(!s.move_within(9, 0, 0));
        assert_eq!(s, before);
    }

    #[test]
    fn move_across_inserts_at_hovered_item() {
        let mut s = board();
        assert!(s.move_across(&"b1", &"a2"));
        assert_eq!(s.containers()[0].items, ["a1", "b1", "a2", "a3"]);
        assert!(s.containers()[1].is_empty());
    }

    #[test]
    fn move_across_appends_when_hovering_a_label() {
        let mut s = board();
        assert!(s.move_across(&"a1", &"C"));
        assert_eq!(s.containers()[0].items, ["a2", "a3"]);
        assert_eq!(s.containers()[2].items, ["a1"]);
    }

    #[test]
    fn move_across_is_a_noop_for_same_container_or_unknown_ids() {
        let mut s = board();
        let before = s.clone();
        assert!(!s.move_across(&"a1", &"a3"));
        assert!(!s.move_across(&"a1", &"A"));
        assert!(!s.move_across(&"ghost", &"B"));
        assert!(!s.move_across(&"a1", &"ghost"));
        // A label is not a draggable item.
        assert!(!s.move_across(&"A", &"B"));
        assert_eq!(s, before);
    }

    #[test]
    fn validate_catches_duplicates_and_ambiguity() {
        let dup_header = Snapshot::<&str>::try_new(vec![
            Container::new("A", ["x"]),
            Container::new("A", ["y"]),
        ]);
        assert_eq!(dup_header, Err(SnapshotError::DuplicateHeader("A")));

        let dup_item = Snapshot::<&str>::try_new(vec![
            Container::new("A", ["x"]),
            Container::new("B", ["x"]),
        ]);
        assert_eq!(dup_item, Err(SnapshotError::DuplicateItem("x")));

        let ambiguous = Snapshot::<&str>::try_new(vec![
            Container::new("A", ["B"]),
            Container::new("B", ["y"]),
        ]);
        assert_eq!(ambiguous, Err(SnapshotError::AmbiguousId("B")));

        assert!(Snapshot::try_new(board().into_containers()).is_ok());
    }

    #[test]
    fn item_count_spans_containers() {
        assert_eq!(board().item_count(), 4);
        assert_eq!(Snapshot::<&str>::default().item_count(), 0);
    }
}
