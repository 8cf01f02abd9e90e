// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_node_picker --heading-base-level=0

//! Understory Node Picker: the selection side of a UI tree inspector.
//!
//! [`understory_node_bounds`] computes where one node is. This crate supplies
//! what an inspector needs around it:
//!
//! - [`NodeTable`]: a generational store of named nodes with local geometry
//!   and [`NodeFlags`]. It implements
//!   [`NodeSource`](understory_node_bounds::NodeSource), so it can stand in
//!   for a host tree or mirror a snapshot of one.
//! - [`NameFilter`] and [`summarize`]: case-insensitive name search and a
//!   visible-only toggle over a candidate list, with the `"matched/total"`
//!   header counts a sidebar shows.
//! - [`nodes_at_point`] and [`ElementSelector`]: every visible node whose true
//!   world outline contains a screen point, and a click-to-select state that
//!   picks the deepest one.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_node_bounds::NodeGeometry;
//! use understory_node_picker::{ElementSelector, NodeDesc, NodeTable};
//!
//! let mut table = NodeTable::new();
//! let window = table.insert(
//!     None,
//!     NodeDesc::new("Window", NodeGeometry::sized(200.0, 100.0).at(50.0, 50.0)),
//! );
//! let button = table.insert(
//!     Some(window),
//!     NodeDesc::new("Button", NodeGeometry::sized(40.0, 20.0).at(10.0, 10.0)),
//! );
//!
//! let mut selector = ElementSelector::new();
//! selector.set_active(true);
//! assert_eq!(selector.pick(&table, Point::new(65.0, 65.0)), Some(button));
//!
//! let outline = selector.selected_bounds(&table);
//! assert_eq!(outline.points()[0], Point::new(60.0, 60.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod filter;
mod selector;
mod table;

pub use filter::{ListEntry, ListSummary, NameFilter, summarize};
pub use selector::{ElementSelector, PickedNode, nodes_at_point};
pub use table::{Descendants, NodeDesc, NodeFlags, NodeId, NodeTable};
