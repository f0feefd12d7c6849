// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound values and the injected host bridge.
//!
//! The reconciler never talks to a global channel. It is handed a [`Notifier`]
//! and pushes [`HostValue`]s through it, each followed by a layout request so
//! the host can re-measure the component after the change.

use alloc::string::String;
use alloc::vec::Vec;

use crate::snapshot::Snapshot;

/// A click on an item's content area, reported when the host opted in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "event", rename = "click")
)]
pub struct ClickEvent<K = String> {
    /// Label of the container holding the clicked item.
    pub header: K,
    /// The clicked item.
    pub item: K,
    /// Full snapshot at the time of the click.
    pub containers: Snapshot<K>,
}

/// A value sent from the component to the host.
///
/// With the `serde` feature a reorder serializes as a bare array of
/// `{header, items}` objects and a click as an object tagged
/// `"event": "click"`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum HostValue<K = String> {
    /// A committed reorder carrying the full snapshot.
    Reorder(Snapshot<K>),
    /// An item click.
    Click(ClickEvent<K>),
}

impl<K> HostValue<K> {
    /// Returns the snapshot carried by this value.
    #[must_use]
    pub fn containers(&self) -> &Snapshot<K> {
        match self {
            Self::Reorder(snapshot) => snapshot,
            Self::Click(click) => &click.containers,
        }
    }
}

/// Capability for pushing values to the host application.
pub trait Notifier<K> {
    /// Sends one value to the host.
    fn send(&mut self, value: HostValue<K>);

    /// Asks the host to re-measure the component's layout.
    ///
    /// The default does nothing, for hosts that size the component themselves.
    fn request_layout(&mut self) {}
}

impl<K, N: Notifier<K> + ?Sized> Notifier<K> for &mut N {
    fn send(&mut self, value: HostValue<K>) {
        (**self).send(value);
    }

    fn request_layout(&mut self) {
        (**self).request_layout();
    }
}

/// Adapts a closure into a [`Notifier`]. Layout requests are ignored.
#[derive(Clone, Copy, Debug)]
pub struct FnNotifier<F>(pub F);

impl<K, F> Notifier<K> for FnNotifier<F>
where
    F: FnMut(HostValue<K>),
{
    fn send(&mut self, value: HostValue<K>) {
        (self.0)(value);
    }
}

/// A notifier that records everything it is given.
///
/// Useful as a test double, or for hosts that drain pending values once per
/// frame.
#[derive(Clone, Debug)]
pub struct RecordingNotifier<K = String> {
    values: Vec<HostValue<K>>,
    layout_requests: usize,
}

impl<K> Default for RecordingNotifier<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RecordingNotifier<K> {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            layout_requests: 0,
        }
    }

    /// Values sent so far, oldest first.
    #[must_use]
    pub fn values(&self) -> &[HostValue<K>] {
        &self.values
    }

    /// Number of layout requests received.
    #[must_use]
    pub fn layout_requests(&self) -> usize {
        self.layout_requests
    }

    /// Removes and returns all recorded values.
    pub fn take(&mut self) -> Vec<HostValue<K>> {
        core::mem::take(&mut self.values)
    }

    /// Forgets recorded values and layout requests.
    pub fn clear(&mut self) {
        self.values.clear();
        self.layout_requests = 0;
    }
}

impl<K> Notifier<K> for RecordingNotifier<K> {
    fn send(&mut self, value: HostValue<K>) {
        self.values.push(value);
    }

    fn request_layout(&mut self) {
        self.layout_requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Container;
    use alloc::vec;

    #[test]
    fn recording_notifier_tracks_values_and_layout() {
        let mut rec = RecordingNotifier::<&str>::new();
        rec.send(HostValue::Reorder(Snapshot::new(vec![Container::new("A", ["x"])])));
        rec.request_layout();
        assert_eq!(rec.values().len(), 1);
        assert_eq!(rec.layout_requests(), 1);

        let taken = rec.take();
        assert_eq!(taken.len(), 1);
        assert!(rec.values().is_empty());
        assert_eq!(rec.layout_requests(), 1);

        rec.clear();
        assert_eq!(rec.layout_requests(), 0);
    }

    #[test]
    fn fn_notifier_forwards_through_mut_ref() {
        fn push<N: Notifier<&'static str>>(mut notifier: N) {
            notifier.send(HostValue::Reorder(Snapshot::default()));
            notifier.request_layout();
        }

        let mut seen = Vec::new();
        {
            let mut notifier = FnNotifier(|v: HostValue<&'static str>| seen.push(v));
            push(&mut notifier);
        }
        assert_eq!(seen, [HostValue::Reorder(Snapshot::default())]);
    }

    #[test]
    fn containers_reads_either_variant() {
        let snapshot = Snapshot::new(vec![Container::new("A", ["x"])]);
        let click = HostValue::Click(ClickEvent {
            header: "A",
            item: "x",
            containers: snapshot.clone(),
        });
        assert_eq!(click.containers(), &snapshot);
        assert_eq!(HostValue::Reorder(snapshot.clone()).containers(), &snapshot);
    }
}
