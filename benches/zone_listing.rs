// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast bookkeeping.
//!
//! Measures the performance of:
//! - Per-zone listing (derived grouping on every call)
//! - Ticking a manager with many live toasts

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use toastkit::domain::toast::{ToastDuration, Zone};
use toastkit::notifications::{ManualClock, Manager, ToastRegistry};

/// Builds a registry with `count` toasts spread over every zone.
fn populated_registry(count: usize) -> ToastRegistry {
    let mut registry = ToastRegistry::new();
    for (i, zone) in Zone::ALL.iter().cycle().take(count).enumerate() {
        registry.create(format!("toast {i}"), *zone, ToastDuration::default());
    }
    registry
}

/// Benchmark listing a bottom zone, which also reverses the stack.
fn bench_list_by_zone(c: &mut Criterion) {
    let mut group = c.benchmark_group("zone_listing");

    for count in [10, 100, 1000] {
        let registry = populated_registry(count);
        group.bench_function(format!("list_by_zone_{count}"), |b| {
            b.iter(|| black_box(registry.list_by_zone(black_box(Zone::BottomRight))));
        });
    }

    group.finish();
}

/// Benchmark one tick over many persistent toasts.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("zone_listing");

    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock.clone());
    for (i, zone) in Zone::ALL.iter().cycle().take(500).enumerate() {
        manager.show(format!("toast {i}"), *zone, ToastDuration::PERSISTENT);
    }

    group.bench_function("tick_500", |b| {
        b.iter(|| {
            clock.advance(Duration::from_millis(10));
            manager.tick();
            black_box(manager.drain_events());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_list_by_zone, bench_tick);
criterion_main!(benches);
