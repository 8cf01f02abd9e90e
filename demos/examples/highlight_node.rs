// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compose the world outline of a nested, rotated node and draw it.
//!
//! The drawing backend here just prints the requests it receives, standing in
//! for an immediate-mode overlay such as a background draw list.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_node_demos --example highlight_node`

use std::f64::consts::FRAC_PI_6;

use kurbo::Point;
use understory_node_bounds::{
    DrawBackend, HighlightStyle, NodeBounds, NodeGeometry, NodeSource, Rgba,
};
use understory_node_picker::{NodeDesc, NodeTable};

/// Backend that prints every request.
struct PrintBackend;

impl DrawBackend for PrintBackend {
    fn stroke_closed_polyline(&mut self, points: &[Point], color: u32, thickness: f64) {
        println!("  polyline color=#{color:08x} thickness={thickness}");
        for p in points {
            println!("    ({:.2}, {:.2})", p.x, p.y);
        }
    }

    fn fill_convex_polygon(&mut self, points: &[Point], color: u32) {
        println!("  convex fill color=#{color:08x} ({} points)", points.len());
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: u32,
        segments: u32,
        thickness: f64,
    ) {
        println!(
            "  circle at ({:.2}, {:.2}) r={radius} color=#{color:08x} segments={segments} thickness={thickness}",
            center.x, center.y
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: u32, segments: u32) {
        println!(
            "  disk at ({:.2}, {:.2}) r={radius} color=#{color:08x} segments={segments}",
            center.x, center.y
        );
    }
}

fn main() {
    env_logger::init();

    let mut table = NodeTable::new();
    let window = table.insert(
        None,
        NodeDesc::new("Window", NodeGeometry::sized(400.0, 300.0).at(100.0, 80.0)),
    );
    // A panel scaled up 1.5x about its own center and tilted by 30 degrees.
    let panel = table.insert(
        Some(window),
        NodeDesc::new(
            "Panel",
            NodeGeometry::sized(120.0, 60.0)
                .at(40.0, 40.0)
                .with_origin(60.0, 30.0)
                .with_rotation(FRAC_PI_6)
                .with_scale(1.5, 1.5),
        ),
    );
    let label = table.insert(
        Some(panel),
        NodeDesc::new("Label", NodeGeometry::sized(80.0, 16.0).at(20.0, 22.0)),
    );
    let anchor = table.insert(
        Some(panel),
        NodeDesc::new("Anchor", NodeGeometry::default().at(120.0, 60.0)),
    );

    let style = HighlightStyle::default();
    let color = Rgba::new(1.0, 0.8, 0.0, 1.0);

    for node in [window, panel, label, anchor] {
        let name = table.name(node).unwrap_or("?");
        let bounds = NodeBounds::from_node(&table, Some(node));
        log::info!("highlighting {name} ({node:?})");
        println!("== {name}: {} point(s) ==", bounds.len());
        bounds.draw_outline(&mut PrintBackend, &style, color, 1.0);
    }

    println!("== Label filled ==");
    let filled = NodeBounds::from_node(&table, Some(label));
    filled.draw_filled(&mut PrintBackend, &style, color, 2.0);

    // World position of the label's center, e.g. to anchor a tooltip.
    let center = NodeBounds::from_local_point(&table, Some(label), Point::new(40.0, 8.0));
    if let Some(p) = center.as_point() {
        println!("Label center in world space: ({:.2}, {:.2})", p.x, p.y);
    }

    // The same transform as an affine, e.g. for a renderer that takes one.
    if let Some(geometry) = table.geometry(panel) {
        println!("Panel local transform: {:?}", geometry.local_transform());
    }
}
