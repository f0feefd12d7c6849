// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_sortable` drag gestures on large boards.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_sortable::{Container, Reconciler, RecordingNotifier, Snapshot};

const HEADER_BASE: u32 = 1 << 30;

/// `containers` lists of `per_container` items each. Labels live above
/// `HEADER_BASE` so they never collide with item ids.
fn board(containers: u32, per_container: u32) -> Snapshot<u32> {
    (0..containers)
        .map(|ci| Container {
            header: HEADER_BASE + ci,
            items: (0..per_container).map(|i| ci * per_container + i).collect(),
        })
        .collect()
}

fn bench_same_container_drop(c: &mut Criterion) {
    let mut group = c.benchmark_group("sortable/same_container_drop");

    // Lookup is a linear scan, so the last item of the last container is the
    // worst case for both ids.
    for len in [64u32, 512, 4_096] {
        let snapshot = board(4, len);
        let active = 4 * len - 1;
        let over = 3 * len;
        group.throughput(Throughput::Elements(u64::from(4 * len)));

        group.bench_with_input(BenchmarkId::from_parameter(len), &snapshot, |b, snapshot| {
            b.iter_batched(
                || Reconciler::new(snapshot.clone(), RecordingNotifier::new()),
                |mut r| {
                    r.drag_start(active);
                    black_box(r.drag_end(&active, &over, 0));
                    black_box(r);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_hover_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sortable/hover_sweep");

    // One gesture that hovers across every container before being cancelled.
    for containers in [4u32, 16, 64] {
        let snapshot = board(containers, 256);
        group.throughput(Throughput::Elements(u64::from(containers)));

        group.bench_with_input(
            BenchmarkId::from_parameter(containers),
            &snapshot,
            |b, snapshot| {
                b.iter_batched(
                    || Reconciler::new(snapshot.clone(), RecordingNotifier::new()),
                    |mut r| {
                        r.drag_start(0);
                        for ci in 1..containers {
                            black_box(r.drag_over(&0, &(HEADER_BASE + ci)));
                        }
                        black_box(r.drag_cancel(0));
                        black_box(r);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_same_container_drop, bench_hover_sweep);
criterion_main!(benches);
