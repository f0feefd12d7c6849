// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sortable --heading-base-level=0

//! Understory Sortable: reorder reconciliation for drag-and-drop sortable lists.
//!
//! This crate is the logic half of a sortable list component: one or more
//! named containers whose items can be reordered within a container or moved
//! between containers by dragging. It does **not** detect gestures, hit-test
//! drop targets, or draw anything. A gesture layer reports three events with
//! the ids involved, and the crate keeps the canonical arrangement and decides
//! what the host application needs to hear about.
//!
//! The core pieces are:
//!
//! - [`Snapshot`] and [`Container`]: the ordered containers and their item ids,
//!   with order-preserving relocation helpers.
//! - [`Reconciler`]: the drag state machine. It captures a baseline at
//!   drag-start, applies cross-container moves on drag-over, and at drag-end
//!   notifies the host once if the arrangement actually changed. Cancel rolls
//!   back to the baseline.
//! - [`Notifier`]: the injected capability used to push [`HostValue`]s (reorders
//!   and clicks) to the host, with [`RecordingNotifier`] and [`FnNotifier`] as
//!   ready-made implementations.
//! - [`SortableConfig`]: host configuration such as layout direction, item
//!   labels, and whether clicks are reported.
//! - [`host`]: the host-side adapter that turns component values into what the
//!   embedding application reads back.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_sortable::{
//!     ClickOutcome, ClickTarget, Container, DragOutcome, HostValue, Reconciler,
//!     RecordingNotifier, Snapshot, SortableConfig,
//! };
//!
//! let snapshot: Snapshot<&str> = Snapshot::new(vec![
//!     Container::new("Todo", ["write docs", "fix bug"]),
//!     Container::new("Done", ["ship"]),
//! ]);
//! let config = SortableConfig::new().with_return_events(true);
//! let mut board = Reconciler::with_config(snapshot, config, RecordingNotifier::new());
//!
//! // Drag "fix bug" over the "Done" container, then drop it on "ship".
//! board.drag_start("fix bug");
//! assert_eq!(board.drag_over(&"fix bug", &"Done"), DragOutcome::Moved);
//! assert_eq!(board.drag_end(&"fix bug", &"ship", 1_000), DragOutcome::Committed);
//! assert_eq!(board.snapshot().containers()[1].items, ["fix bug", "ship"]);
//!
//! // The click the pointer layer emits right after the drop is swallowed.
//! assert_eq!(
//!     board.click(&"ship", ClickTarget::Content, 1_010),
//!     ClickOutcome::DragInProgress
//! );
//!
//! // Exactly one value reached the host.
//! let sent = board.notifier_mut().take();
//! assert!(matches!(sent.as_slice(), [HostValue::Reorder(_)]));
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize snapshots, host values, and configuration in the
//!   host's JSON shapes.
//! - `tracing`: emit `tracing` events for drag transitions, commits, and
//!   suppressed clicks.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod host;
pub mod notify;
pub mod reconciler;
pub mod snapshot;

pub use config::{DEFAULT_SETTLE_DELAY_MS, Direction, SortableConfig};
pub use error::SnapshotError;
pub use notify::{ClickEvent, FnNotifier, HostValue, Notifier, RecordingNotifier};
pub use reconciler::{ClickOutcome, ClickTarget, DragOutcome, DragSession, Reconciler};
pub use snapshot::{Container, Snapshot};
