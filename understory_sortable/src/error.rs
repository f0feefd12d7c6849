// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors for host-provided snapshots.

use core::fmt;

/// Error returned when host input does not form a well-formed [`Snapshot`].
///
/// Gesture handling never produces errors; only validation of incoming
/// container data does.
///
/// [`Snapshot`]: crate::Snapshot
#[derive(Clone, PartialEq, Eq)]
pub enum SnapshotError<K> {
    /// Two containers share the same label.
    DuplicateHeader(K),
    /// An item id appears more than once, in the same or different containers.
    DuplicateItem(K),
    /// An id is used both as a container label and as an item id.
    AmbiguousId(K),
}

impl<K> SnapshotError<K> {
    /// Returns the offending id.
    pub fn id(&self) -> &K {
        match self {
            Self::DuplicateHeader(id) | Self::DuplicateItem(id) | Self::AmbiguousId(id) => id,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for SnapshotError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateHeader(id) => write!(f, "SnapshotError::DuplicateHeader({id:?})"),
            Self::DuplicateItem(id) => write!(f, "SnapshotError::DuplicateItem({id:?})"),
            Self::AmbiguousId(id) => write!(f, "SnapshotError::AmbiguousId({id:?})"),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for SnapshotError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateHeader(id) => write!(f, "container label {id:?} is used more than once"),
            Self::DuplicateItem(id) => write!(f, "item id {id:?} appears more than once"),
            Self::AmbiguousId(id) => {
                write!(f, "id {id:?} is used both as a container label and as an item")
            }
        }
    }
}

impl<K: fmt::Debug> core::error::Error for SnapshotError<K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_offending_id() {
        let err = SnapshotError::DuplicateItem("x");
        assert_eq!(err.to_string(), "item id \"x\" appears more than once");
        assert_eq!(err.id(), &"x");
    }

    #[test]
    fn debug_includes_variant() {
        let err = SnapshotError::AmbiguousId(7_u32);
        assert_eq!(alloc::format!("{err:?}"), "SnapshotError::AmbiguousId(7)");
    }
}
