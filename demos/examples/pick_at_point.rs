// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspector flow: filter root lists by name/visibility, then pick by point.
//!
//! This example shows how to combine:
//! - `NameFilter` + `summarize` to build sidebar lists with match counts,
//! - `ElementSelector` to find every node under the pointer by its true
//!   (rotated) outline and select the deepest one,
//! - `NodeBounds::contains_point` for the final hit check on a selection.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_node_demos --example pick_at_point`

use std::f64::consts::FRAC_PI_4;

use kurbo::Point;
use understory_node_bounds::NodeGeometry;
use understory_node_picker::{
    ElementSelector, NameFilter, NodeDesc, NodeFlags, NodeId, NodeTable, summarize,
};

fn build_scene() -> (NodeTable, Vec<(&'static str, Vec<NodeId>)>) {
    let mut table = NodeTable::new();

    let inventory = table.insert(
        None,
        NodeDesc::new("Inventory", NodeGeometry::sized(300.0, 200.0).at(20.0, 20.0)),
    );
    let _grid = table.insert(
        Some(inventory),
        NodeDesc::new("InventoryGrid", NodeGeometry::sized(280.0, 160.0).at(10.0, 30.0)),
    );
    let chat = table.insert(
        None,
        NodeDesc::new("ChatLog", NodeGeometry::sized(400.0, 120.0).at(0.0, 400.0)),
    );
    let minimap = table.insert(
        None,
        NodeDesc::new(
            "_NaviMap",
            NodeGeometry::sized(100.0, 100.0)
                .at(500.0, 20.0)
                .with_origin(50.0, 50.0)
                .with_rotation(FRAC_PI_4),
        ),
    );
    let _marker = table.insert(
        Some(minimap),
        NodeDesc::new("PlayerMarker", NodeGeometry::default().at(50.0, 50.0)),
    );
    let tooltip = table.insert(
        None,
        NodeDesc::new("Tooltip", NodeGeometry::sized(120.0, 40.0).at(40.0, 40.0))
            .with_flags(NodeFlags::empty()),
    );

    let lists = vec![
        ("Loaded", vec![inventory, chat, minimap, tooltip]),
        ("Focused", vec![inventory]),
    ];
    (table, lists)
}

fn print_sidebar(table: &NodeTable, lists: &[(&str, Vec<NodeId>)], filter: &NameFilter) {
    println!("-- sidebar (query={:?}, visible_only={}) --", filter.query, filter.visible_only);
    for (label, roots) in lists {
        let summary = summarize(table, roots.iter().copied(), filter);
        if summary.is_empty() {
            continue;
        }
        println!("{label} [{}]", summary.count_label(filter.is_active()));
        for entry in &summary.entries {
            let marker = if entry.visible { '*' } else { ' ' };
            println!("  {marker} {}", entry.name);
        }
    }
}

fn main() {
    env_logger::init();

    let (table, lists) = build_scene();

    print_sidebar(&table, &lists, &NameFilter::new());
    print_sidebar(&table, &lists, &NameFilter::new().with_query("inv"));
    print_sidebar(&table, &lists, &NameFilter::new().visible());

    let mut selector = ElementSelector::new();
    for pt in [
        Point::new(100.0, 100.0),
        // Inside the minimap's unrotated square but outside its rotated outline.
        Point::new(505.0, 25.0),
        // Near the player marker at the minimap's center.
        Point::new(553.0, 72.0),
        Point::new(900.0, 900.0),
    ] {
        selector.set_active(true);
        println!("\n== Pick @ ({:.1}, {:.1}) ==", pt.x, pt.y);
        for hit in selector.hovered(&table, pt) {
            let name = table.name(hit.node).unwrap_or("?");
            println!("  candidate depth={} {name}", hit.depth);
        }
        match selector.pick(&table, pt) {
            Some(node) => {
                log::info!("picked {node:?} at ({:.1}, {:.1})", pt.x, pt.y);
                let bounds = selector.selected_bounds(&table);
                println!(
                    "  selected {} ({} point outline, contains pick: {})",
                    table.name(node).unwrap_or("?"),
                    bounds.len(),
                    bounds.contains_point(pt)
                );
            }
            None => {
                log::info!("no pick at ({:.1}, {:.1}), selector still active", pt.x, pt.y);
                println!("  nothing under the pointer");
            }
        }
    }
}
