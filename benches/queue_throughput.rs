// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast queue operations.
//!
//! Measures the performance of:
//! - Pushing a burst of toasts
//! - Expiring a full queue through the virtual clock
//! - Dismissing toasts in reverse order

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_toasts::queue::{ManualScheduler, ToastQueue};
use iced_toasts::toast::Toast;
use std::hint::black_box;
use std::time::Duration;

const BURST: u64 = 256;

fn filled_queue() -> ToastQueue<ManualScheduler> {
    let mut queue = ToastQueue::new(ManualScheduler::new());
    for i in 0..BURST {
        queue.push(Toast::info(format!("toast-{i}")).with_duration_ms(100 + i));
    }
    queue
}

/// Benchmark pushing a burst of toasts into an empty queue.
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_queue");

    group.bench_function("push_burst", |b| {
        b.iter(|| black_box(filled_queue()));
    });

    group.finish();
}

/// Benchmark expiring every toast by advancing past the longest timer.
fn bench_expire_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_queue");

    group.bench_function("expire_all", |b| {
        b.iter_batched(
            filled_queue,
            |mut queue| {
                let expired = queue.advance(Duration::from_millis(100 + BURST));
                black_box(expired);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark dismissing from the back, the worst case for the linear lookup.
fn bench_dismiss_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_queue");

    group.bench_function("dismiss_reverse", |b| {
        b.iter_batched(
            filled_queue,
            |mut queue| {
                for id in queue.ids().into_iter().rev() {
                    black_box(queue.dismiss(id));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_expire_all, bench_dismiss_reverse);
criterion_main!(benches);
