// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host side of the bridge: normalizing input and shaping what the embedding
//! application reads back.
//!
//! The component only ever speaks in containers. Hosts that sort a single flat
//! list pass [`SortableInput::Single`] and get plain items back; hosts that
//! opted in to events get the containers together with the latest click.
//!
//! ```
//! use understory_sortable::host::{HostAdapter, HostResponse, SortableInput};
//! use understory_sortable::{Container, HostValue, Snapshot};
//!
//! let input = SortableInput::Single {
//!     header: None,
//!     items: vec![String::from("a"), String::from("b")],
//! };
//! let mut adapter = HostAdapter::from_input(input, false).unwrap();
//!
//! let reordered: Snapshot = Snapshot::new(vec![Container::new("", ["b", "a"])]);
//! let response = adapter.receive(Some(HostValue::Reorder(reordered)));
//! assert_eq!(response, HostResponse::Items(vec!["b".into(), "a".into()]));
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use crate::error::SnapshotError;
use crate::notify::HostValue;
use crate::snapshot::{Container, Snapshot};

/// Containers as supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortableInput<K = String> {
    /// One flat list with an optional header.
    Single {
        /// Header shown above the list; the empty id when absent.
        header: Option<K>,
        /// Items in display order.
        items: Vec<K>,
    },
    /// Several named containers.
    Multi(Vec<Container<K>>),
}

impl<K> SortableInput<K> {
    /// Returns `true` for multi-container input.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Multi(_))
    }
}

impl<K: Hash + Eq + Clone + Default> SortableInput<K> {
    /// Normalizes into a validated snapshot.
    ///
    /// Single-list input becomes one container labelled with the header, or
    /// with `K::default()` when there is none.
    pub fn into_snapshot(self) -> Result<Snapshot<K>, SnapshotError<K>> {
        let containers = match self {
            Self::Single { header, items } => alloc::vec![Container {
                header: header.unwrap_or_default(),
                items,
            }],
            Self::Multi(containers) => containers,
        };
        Snapshot::try_new(containers)
    }
}

/// The click part of a [`HostResponse::WithEvents`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "event", rename = "click")
)]
pub struct ClickNotice<K = String> {
    /// Label of the clicked item's container.
    pub header: K,
    /// The clicked item.
    pub item: K,
}

/// What the host application reads after each round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum HostResponse<K = String> {
    /// Single-list mode without events: the list's items.
    Items(Vec<K>),
    /// Multi-container mode without events.
    Containers(Snapshot<K>),
    /// Event mode: the containers plus the click that produced this round
    /// trip, if any.
    WithEvents {
        /// Current containers.
        containers: Snapshot<K>,
        /// The click, or `None` after a reorder or a plain rerun.
        event: Option<ClickNotice<K>>,
    },
}

/// Remembers the last known containers across round trips and turns
/// component values into [`HostResponse`]s.
#[derive(Clone, Debug)]
pub struct HostAdapter<K = String> {
    last_known: Snapshot<K>,
    multi_containers: bool,
    return_events: bool,
}

impl<K: Clone> HostAdapter<K> {
    /// Creates an adapter seeded with `snapshot`.
    pub fn new(snapshot: Snapshot<K>, multi_containers: bool, return_events: bool) -> Self {
        Self {
            last_known: snapshot,
            multi_containers,
            return_events,
        }
    }

    /// Creates an adapter from raw host input, validating it.
    pub fn from_input(input: SortableInput<K>, return_events: bool) -> Result<Self, SnapshotError<K>>
    where
        K: Hash + Eq + Default,
    {
        let multi = input.is_multi();
        Ok(Self::new(input.into_snapshot()?, multi, return_events))
    }

    /// The containers the host last saw.
    #[must_use]
    pub fn last_known(&self) -> &Snapshot<K> {
        &self.last_known
    }

    /// Returns `true` when click events are surfaced.
    #[must_use]
    pub fn return_events(&self) -> bool {
        self.return_events
    }

    /// Replaces the remembered containers with fresh host input.
    pub fn set_input(&mut self, snapshot: Snapshot<K>) {
        self.last_known = snapshot;
    }

    /// Turns the component's latest value into a response.
    ///
    /// `None` means the component has not sent anything since the last round
    /// trip. Without events, clicks are ignored and the last known containers
    /// are returned.
    pub fn receive(&mut self, value: Option<HostValue<K>>) -> HostResponse<K> {
        if self.return_events {
            let (containers, event) = match value {
                Some(HostValue::Click(click)) => {
                    let notice = ClickNotice {
                        header: click.header,
                        item: click.item,
                    };
                    let containers = if click.containers.is_empty() {
                        self.last_known.clone()
                    } else {
                        click.containers
                    };
                    (containers, Some(notice))
                }
                Some(HostValue::Reorder(snapshot)) => (snapshot, None),
                None => (self.last_known.clone(), None),
            };
            self.last_known = containers.clone();
            return HostResponse::WithEvents { containers, event };
        }

        if let Some(HostValue::Reorder(snapshot)) = value {
            self.last_known = snapshot;
        }
        if self.multi_containers {
            HostResponse::Containers(self.last_known.clone())
        } else {
            HostResponse::Items(
                self.last_known
                    .get(0)
                    .map(|c| c.items.clone())
                    .unwrap_or_default(),
            )
        }
    }
}
