// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_tooltip::anchor::{Alignment, Placement, compute_offset};
use understory_tooltip::{DeviceId, PointerKind, TooltipConfig, TooltipId, Tooltips};

fn mounted(n: usize) -> (Tooltips, Vec<TooltipId>) {
    let mut set = Tooltips::new();
    let config = TooltipConfig::default().with_wait_delay(Duration::from_millis(100));
    let ids = (0..n).map(|_| set.mount(config.clone())).collect();
    (set, ids)
}

fn bench_hover_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_chain");
    for n in [8_usize, 64] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("enter_exit_tick_n{}", n), |b| {
            b.iter_batched(
                || mounted(n),
                |(mut set, ids)| {
                    for id in &ids {
                        set.hover_enter(*id, DeviceId(0), PointerKind::Mouse);
                        set.tick(Duration::from_millis(16));
                        set.hover_exit(*id, DeviceId(0));
                    }
                    set.tick(Duration::from_secs(1));
                    black_box(set.take_events().len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_tick_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_open");
    let n = 256_usize;
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("frame_n256", |b| {
        b.iter_batched(
            || {
                let (mut set, ids) = mounted(n);
                for id in &ids {
                    set.ensure_visible(*id);
                }
                set
            },
            |mut set| {
                set.tick(black_box(Duration::from_millis(16)));
                set
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchor");
    group.throughput(Throughput::Elements(Alignment::ALL.len() as u64));
    group.bench_function("all_alignments", |b| {
        b.iter(|| {
            let mut acc = Point::ZERO;
            for alignment in Alignment::ALL {
                let p = compute_offset(
                    black_box(Point::new(100.0, 100.0)),
                    black_box(Size::new(40.0, 24.0)),
                    black_box(Size::new(120.0, 32.0)),
                    Placement::Aligned(alignment),
                );
                acc += p.to_vec2();
            }
            black_box(acc)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_hover_chain, bench_tick_open, bench_offsets);
criterion_main!(benches);
