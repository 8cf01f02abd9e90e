// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_node_bounds::{NodeBounds, NodeGeometry};
use understory_node_picker::{NodeDesc, NodeId, NodeTable, nodes_at_point};

/// A single chain of `depth` nodes, each offset, tilted, and slightly scaled.
fn gen_chain(depth: usize) -> (NodeTable, NodeId) {
    let mut table = NodeTable::new();
    let mut parent = None;
    let mut last = None;
    for i in 0..depth {
        let geometry = NodeGeometry::sized(100.0, 50.0)
            .at(5.0 + i as f64, 3.0)
            .with_origin(50.0, 25.0)
            .with_rotation(0.01 * i as f64)
            .with_scale(1.01, 0.99);
        let id = table.insert(parent, NodeDesc::new("node", geometry));
        parent = Some(id);
        last = Some(id);
    }
    (table, last.expect("depth > 0"))
}

/// `n` x `n` grid of cells under one root, each with a zero-sized marker child.
fn gen_grid(n: usize, cell: f64) -> NodeTable {
    let mut table = NodeTable::new();
    let root = table.insert(
        None,
        NodeDesc::new(
            "root",
            NodeGeometry::sized(n as f64 * cell, n as f64 * cell),
        ),
    );
    for y in 0..n {
        for x in 0..n {
            let c = table.insert(
                Some(root),
                NodeDesc::new(
                    "cell",
                    NodeGeometry::sized(cell, cell).at(x as f64 * cell, y as f64 * cell),
                ),
            );
            table.insert(
                Some(c),
                NodeDesc::new("marker", NodeGeometry::default().at(cell / 2.0, cell / 2.0)),
            );
        }
    }
    table
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    for depth in [1_usize, 8, 32] {
        let (table, leaf) = gen_chain(depth);
        group.bench_function(format!("from_node_depth_{depth}"), |b| {
            b.iter(|| NodeBounds::from_node(black_box(&table), black_box(Some(leaf))));
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let (table, leaf) = gen_chain(8);
    let bounds = NodeBounds::from_node(&table, Some(leaf));
    let pts: Vec<Point> = (0..256)
        .map(|i| Point::new((i % 16) as f64 * 12.0, (i / 16) as f64 * 8.0))
        .collect();
    c.bench_function("contains_point_256", |b| {
        b.iter(|| {
            pts.iter()
                .filter(|p| bounds.contains_point(black_box(**p)))
                .count()
        });
    });
}

fn bench_pick(c: &mut Criterion) {
    let table = gen_grid(32, 10.0);
    let roots = table.roots().to_vec();
    c.bench_function("nodes_at_point_grid_32", |b| {
        b.iter(|| {
            nodes_at_point(
                black_box(&table),
                &roots,
                black_box(Point::new(155.0, 155.0)),
                4.0,
            )
        });
    });
}

criterion_group!(benches, bench_compose, bench_contains, bench_pick);
criterion_main!(benches);
