// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder reconciler: turns gesture events into snapshot changes and host
//! notifications.
//!
//! ## Usage
//!
//! 1) Seed a [`Reconciler`] with the host's containers and a [`Notifier`].
//! 2) Forward the gesture layer's callbacks: [`Reconciler::drag_start`],
//!    [`Reconciler::drag_over`] for every hover change, then exactly one of
//!    [`Reconciler::drag_end`] or [`Reconciler::drag_cancel`].
//! 3) Forward content-area clicks to [`Reconciler::click`].
//! 4) Render from [`Reconciler::snapshot`] and [`Reconciler::active_item`].
//!
//! Drag-over moves only touch local render state. The host hears about a drag
//! once, at drag-end, and only if the arrangement differs from the one
//! captured at drag-start.
//!
//! ## Settling
//!
//! The pointer layer can emit a click right after a drop. To keep that click
//! from being reported, the reconciler stays "in progress" for
//! [`SortableConfig::settle_delay_ms`] after drag-end or cancel. The crate has
//! no clock of its own; callers pass a monotonic millisecond timestamp to the
//! methods that need one. Starting a new drag discards any pending deadline.
//!
//! ## Minimal example
//!
//! ```
//! use understory_sortable::{Container, DragOutcome, Reconciler, RecordingNotifier, Snapshot};
//!
//! let snapshot: Snapshot<&str> = Snapshot::new(vec![
//!     Container::new("A", ["x", "y"]),
//!     Container::new("B", ["z"]),
//! ]);
//! let mut reconciler = Reconciler::new(snapshot, RecordingNotifier::new());
//!
//! assert!(reconciler.drag_start("x"));
//! assert_eq!(reconciler.drag_over(&"x", &"B"), DragOutcome::Moved);
//! assert_eq!(reconciler.drag_end(&"x", &"x", 1_000), DragOutcome::Committed);
//!
//! assert_eq!(reconciler.snapshot().containers()[1].items, ["z", "x"]);
//! assert_eq!(reconciler.notifier().values().len(), 1);
//! ```

use core::mem;

use crate::config::SortableConfig;
use crate::notify::{ClickEvent, HostValue, Notifier};
use crate::snapshot::Snapshot;

/// State held between drag-start and drag-end/cancel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession<K> {
    active: K,
    baseline: Snapshot<K>,
}

impl<K> DragSession<K> {
    /// The item being dragged.
    pub fn active(&self) -> &K {
        &self.active
    }

    /// The snapshot captured at drag-start.
    pub fn baseline(&self) -> &Snapshot<K> {
        &self.baseline
    }
}

#[derive(Clone, Debug)]
enum Phase<K> {
    Idle,
    Dragging(DragSession<K>),
    /// The drop has been processed but clicks are still suppressed until
    /// `until`.
    Settling {
        until: u64,
    },
}

/// Result of a drag gesture event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// No session was open or the event did not apply; nothing changed.
    Ignored,
    /// A drag-over moved the active item into another container.
    Moved,
    /// The drop resolved outside every container; nothing changed and the
    /// host was not notified.
    Aborted,
    /// The final arrangement equals the baseline; the host was not notified.
    Unchanged,
    /// The final arrangement differs from the baseline; the host was notified.
    Committed,
    /// The session was rolled back to its baseline.
    Cancelled,
}

/// Which part of an item received a click.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ClickTarget {
    /// The item's content area.
    #[default]
    Content,
    /// The drag handle; only ever starts drags.
    Handle,
}

/// Result of forwarding a click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was sent to the host.
    Reported,
    /// A drag is open or still settling.
    DragInProgress,
    /// The host did not opt in to click events.
    EventsDisabled,
    /// The click landed on the drag handle.
    Handle,
    /// The id does not name an item.
    UnknownItem,
}

/// Owns the current snapshot and gates host notifications for drag gestures.
///
/// See the [module docs](self) for the event flow.
#[derive(Debug)]
pub struct Reconciler<K, N> {
    current: Snapshot<K>,
    config: SortableConfig<K>,
    phase: Phase<K>,
    notifier: N,
}

impl<K, N> Reconciler<K, N> {
    /// Returns the current snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot<K> {
        &self.current
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &SortableConfig<K> {
        &self.config
    }

    /// Replaces the configuration. Takes effect for the next event.
    pub fn set_config(&mut self, config: SortableConfig<K>) {
        self.config = config;
    }

    /// Returns the open drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<K>> {
        match &self.phase {
            Phase::Dragging(session) => Some(session),
            Phase::Idle | Phase::Settling { .. } => None,
        }
    }

    /// Returns the item being dragged, if a session is open.
    #[must_use]
    pub fn active_item(&self) -> Option<&K> {
        self.session().map(DragSession::active)
    }

    /// Returns `true` while a drag session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Returns `true` while a drag is open or its settle window has not yet
    /// elapsed at `now`.
    #[must_use]
    pub fn is_drag_in_progress(&self, now: u64) -> bool {
        match self.phase {
            Phase::Idle => false,
            Phase::Dragging(_) => true,
            Phase::Settling { until } => now < until,
        }
    }

    /// Finishes an elapsed settle window. Returns `true` if the state changed.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.phase {
            Phase::Settling { until } if now >= until => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Returns the notifier.
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the notifier mutably, for example to drain recorded values.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Consumes the reconciler, returning its snapshot and notifier.
    pub fn into_parts(self) -> (Snapshot<K>, N) {
        (self.current, self.notifier)
    }

    /// Closes the open session, leaving any other phase untouched.
    fn take_session(&mut self) -> Option<DragSession<K>> {
        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging(session) => Some(session),
            other => {
                self.phase = other;
                None
            }
        }
    }

    fn settle(&mut self, now: u64) {
        self.phase = Phase::Settling {
            until: now.saturating_add(self.config.settle_delay_ms),
        };
    }
}

impl<K, N> Reconciler<K, N>
where
    K: Clone + PartialEq,
    N: Notifier<K>,
{
    /// Creates a reconciler with the default configuration.
    pub fn new(snapshot: Snapshot<K>, notifier: N) -> Self {
        Self::with_config(snapshot, SortableConfig::default(), notifier)
    }

    /// Creates a reconciler with an explicit configuration.
    pub fn with_config(snapshot: Snapshot<K>, config: SortableConfig<K>, notifier: N) -> Self {
        Self {
            current: snapshot,
            config,
            phase: Phase::Idle,
            notifier,
        }
    }

    /// Replaces the current snapshot with fresh host input.
    ///
    /// The host is authoritative between sessions. While a drag is open the
    /// input is dropped and `false` is returned; the host resends its value
    /// after the commit.
    pub fn set_input(&mut self, snapshot: Snapshot<K>) -> bool {
        if self.is_dragging() {
            #[cfg(feature = "tracing")]
            tracing::debug!("host input ignored: drag in progress");
            return false;
        }
        self.current = snapshot;
        true
    }

    /// Opens a drag session for `item`, capturing the baseline.
    ///
    /// Returns `false` if `item` is not in the snapshot or a session is
    /// already open. Any pending settle deadline is discarded.
    pub fn drag_start(&mut self, item: K) -> bool {
        if self.is_dragging() || self.current.locate(&item).is_none() {
            #[cfg(feature = "tracing")]
            tracing::debug!(dragging = self.is_dragging(), "drag start rejected");
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(items = self.current.item_count(), "drag start");
        self.phase = Phase::Dragging(DragSession {
            active: item,
            baseline: self.current.clone(),
        });
        true
    }

    /// Handles a hover change during a drag.
    ///
    /// Moves `active` into `over`'s container when that differs from the
    /// container `active` is currently in. Never notifies the host.
    pub fn drag_over(&mut self, active: &K, over: &K) -> DragOutcome {
        if !self.is_dragging() {
            return DragOutcome::Ignored;
        }
        if self.current.move_across(active, over) {
            #[cfg(feature = "tracing")]
            tracing::trace!("drag over: moved across containers");
            DragOutcome::Moved
        } else {
            DragOutcome::Ignored
        }
    }

    /// Handles the drop.
    ///
    /// Both ids are resolved against the current snapshot. A drop inside the
    /// active item's container relocates it to the dropped-on item's index; a
    /// cross-container drop keeps the placement drag-over already applied. The
    /// host is notified once if the result differs from the baseline.
    pub fn drag_end(&mut self, active: &K, over: &K, now: u64) -> DragOutcome {
        let Some(session) = self.take_session() else {
            return DragOutcome::Ignored;
        };
        self.settle(now);

        let (Some(from_container), Some(over_container)) = (
            self.current.find_container(active),
            self.current.find_container(over),
        ) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("drag end aborted: drop outside every container");
            return DragOutcome::Aborted;
        };

        if from_container == over_container
            && let Some(container) = self.current.get(from_container)
            && let (Some(from), Some(to)) = (container.position(active), container.position(over))
        {
            self.current.move_within(from_container, from, to);
        }

        if self.current == session.baseline {
            #[cfg(feature = "tracing")]
            tracing::debug!("drag end: arrangement unchanged");
            return DragOutcome::Unchanged;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(containers = self.current.len(), "drag end: committing reorder");
        self.notifier.send(HostValue::Reorder(self.current.clone()));
        self.notifier.request_layout();
        DragOutcome::Committed
    }

    /// Rolls back every drag-over move of the open session.
    pub fn drag_cancel(&mut self, now: u64) -> DragOutcome {
        let Some(session) = self.take_session() else {
            return DragOutcome::Ignored;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!("drag cancelled: restoring baseline");
        self.current = session.baseline;
        self.settle(now);
        DragOutcome::Cancelled
    }

    /// Handles a click on `item`.
    ///
    /// Reported only when it hits the content area, no drag is in progress at
    /// `now`, and the host opted in with `return_events`.
    pub fn click(&mut self, item: &K, target: ClickTarget, now: u64) -> ClickOutcome {
        self.poll(now);
        let outcome = if target == ClickTarget::Handle {
            ClickOutcome::Handle
        } else if self.is_drag_in_progress(now) {
            ClickOutcome::DragInProgress
        } else if !self.config.return_events {
            ClickOutcome::EventsDisabled
        } else if let Some(container) = self.current.container_of(item) {
            let event = ClickEvent {
                header: container.header.clone(),
                item: item.clone(),
                containers: self.current.clone(),
            };
            self.notifier.send(HostValue::Click(event));
            self.notifier.request_layout();
            ClickOutcome::Reported
        } else {
            ClickOutcome::UnknownItem
        };
        #[cfg(feature = "tracing")]
        if outcome != ClickOutcome::Reported {
            tracing::trace!(?outcome, "click suppressed");
        }
        outcome
    }
}
