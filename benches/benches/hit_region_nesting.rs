// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_hit_region::{HoverTracker, PointerId, Region, RegionId, RegionTree};

/// `depth` exclusive regions, each inset by one unit inside its parent.
fn gen_nested(depth: usize) -> (RegionTree, RegionId) {
    let mut tree = RegionTree::new();
    let size = depth as f64 * 2.0 + 10.0;
    let mut parent = tree.insert(None, Region::exclusive(Rect::new(0.0, 0.0, size, size)));
    for i in 1..depth {
        let inset = i as f64;
        parent = tree.insert(
            Some(parent),
            Region::exclusive(Rect::new(inset, inset, size - inset, size - inset)),
        );
    }
    (tree, parent)
}

/// `n * n` sibling exclusive cells under one non-exclusive root.
fn gen_grid(n: usize, cell: f64) -> RegionTree {
    let mut tree = RegionTree::new();
    let extent = n as f64 * cell;
    let root = tree.insert(None, Region {
        local_bounds: Rect::new(0.0, 0.0, extent, extent),
        ..Region::default()
    });
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            tree.insert(
                Some(root),
                Region::exclusive(Rect::new(x0, y0, x0 + cell, y0 + cell)),
            );
        }
    }
    tree
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_exclusive");
    for depth in [4_usize, 16, 64] {
        let (tree, _) = gen_nested(depth);
        let center = depth as f64 + 5.0;
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("hit_test_depth{}", depth), |b| {
            b.iter(|| black_box(tree.hit_test(black_box(Point::new(center, center)))));
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_exclusive");
    for n in [8_usize, 32] {
        let tree = gen_grid(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("hit_test_n{}", n), |b| {
            b.iter(|| black_box(tree.hit_test(black_box(Point::new(5.0, 5.0)))));
        });
    }
    group.finish();
}

fn bench_hover_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_sweep");
    let n = 16_usize;
    let tree = gen_grid(n, 10.0);
    let points: Vec<Point> = (0..n * 10)
        .map(|i| Point::new(i as f64 + 0.5, i as f64 + 0.5))
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("diagonal", |b| {
        b.iter_batched(
            HoverTracker::new,
            |mut tracker| {
                let mut transitions = 0;
                for pt in &points {
                    let hit = tree.hit_test(*pt);
                    transitions += tracker.update(PointerId(0), &hit.hover_targets).len();
                }
                black_box(transitions)
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_nested, bench_grid, bench_hover_sweep);
criterion_main!(benches);
