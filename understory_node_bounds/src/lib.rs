// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_node_bounds --heading-base-level=0

//! Understory Node Bounds: true on-screen outlines of nodes in a foreign UI tree.
//!
//! This crate answers two questions a UI inspector asks about a node it does
//! not own: "where exactly is this node on screen?" and "is this screen point
//! inside it?". The host tree is reached only through the [`NodeSource`]
//! trait, which resolves an opaque handle to its local [`NodeGeometry`] and
//! its parent.
//!
//! ## Composition
//!
//! [`NodeBounds::from_node`] seeds the node's local rectangle corners
//! `(0, 0)`, `(w, 0)`, `(w, h)`, `(0, h)` (or the single point `(0, 0)` for a
//! zero-sized node) and walks from the node out to its root. At every level
//! each point is translated by the level's position and then scaled and
//! rotated about that level's own pivot. The result is a quadrilateral in
//! world space, which under rotation is not axis-aligned.
//!
//! [`NodeBounds::from_local_point`] does the same for one arbitrary local
//! point. A missing node yields empty bounds; nothing here fails.
//!
//! ## Containment
//!
//! [`NodeBounds::contains_point`] is an even-odd ray cast over the outline's
//! edges with a half-open boundary rule. Single-point bounds have no area and
//! never contain anything; [`NodeBounds::contains_or_near`] adds a pick radius
//! for them.
//!
//! ## Drawing
//!
//! The [`draw`] module forwards the composed points to a [`DrawBackend`] as a
//! closed outline or a translucent fill. It is a thin presentation layer and
//! geometry never depends on it.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_node_bounds::{NodeBounds, NodeGeometry, NodeSource};
//!
//! // A two-node host tree: a panel at (10, 5) containing a 4x2 child.
//! struct Host([(NodeGeometry, Option<usize>); 2]);
//!
//! impl NodeSource for Host {
//!     type Node = usize;
//!     fn geometry(&self, node: usize) -> Option<NodeGeometry> {
//!         self.0.get(node).map(|(g, _)| *g)
//!     }
//!     fn parent(&self, node: usize) -> Option<usize> {
//!         self.0.get(node).and_then(|(_, p)| *p)
//!     }
//! }
//!
//! let host = Host([
//!     (NodeGeometry::default().at(10.0, 5.0), None),
//!     (NodeGeometry::sized(4.0, 2.0), Some(0)),
//! ]);
//!
//! let bounds = NodeBounds::from_node(&host, Some(1));
//! assert_eq!(bounds.points()[0], Point::new(10.0, 5.0));
//! assert_eq!(bounds.points()[2], Point::new(14.0, 7.0));
//! assert!(bounds.contains_point(Point::new(12.0, 6.0)));
//! assert!(!bounds.contains_point(Point::new(2.0, 6.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod compose;
pub mod draw;
mod types;

pub use bounds::NodeBounds;
pub use compose::{ComposeOptions, MAX_ANCESTOR_DEPTH, transform_point, world_bounds, world_point};
pub use draw::{DrawBackend, HighlightStyle, Rgba};
pub use types::{NodeGeometry, NodeSource};
