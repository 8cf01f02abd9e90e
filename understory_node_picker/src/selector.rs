// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking nodes under a screen point.

use alloc::{vec, vec::Vec};
use kurbo::Point;
use understory_node_bounds::{HighlightStyle, NodeBounds};

use crate::table::{NodeId, NodeTable};

/// A node whose world bounds contain the query point.
#[derive(Clone, Debug, PartialEq)]
pub struct PickedNode {
    /// The node.
    pub node: NodeId,
    /// Depth below the root the walk started from.
    pub depth: usize,
    /// World bounds used for the test, ready to be drawn.
    pub bounds: NodeBounds,
}

/// Every visible node under `point`, in pre-order depth-first order.
///
/// Hidden nodes are skipped together with their subtrees. Zero-sized nodes
/// match anything within `marker_radius` of their marker point.
pub fn nodes_at_point(
    table: &NodeTable,
    roots: &[NodeId],
    point: Point,
    marker_radius: f64,
) -> Vec<PickedNode> {
    let mut out = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = roots.iter().rev().map(|r| (*r, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        if !table.is_visible(node) {
            continue;
        }
        let bounds = NodeBounds::from_node(table, Some(node));
        if bounds.contains_or_near(point, marker_radius) {
            out.push(PickedNode {
                node,
                depth,
                bounds,
            });
        }
        let children = table.children_of(node);
        stack.extend(children.iter().rev().map(|c| (*c, depth + 1)));
    }
    out
}

/// Interactive "click to select" state.
///
/// While active, [`hovered`](Self::hovered) lists the candidates under the
/// pointer and [`pick`](Self::pick) selects the deepest one.
#[derive(Clone, Debug)]
pub struct ElementSelector {
    active: bool,
    /// Pick radius around zero-sized nodes.
    pub marker_radius: f64,
    selected: Option<NodeId>,
}

impl Default for ElementSelector {
    fn default() -> Self {
        Self {
            active: false,
            marker_radius: HighlightStyle::default().marker_radius,
            selected: None,
        }
    }
}

impl ElementSelector {
    /// Create an inactive selector with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the selector is listening for a pick.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start or stop listening for a pick.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// The current selection, if any.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Set or clear the selection directly, for example from a list click.
    pub fn select(&mut self, node: Option<NodeId>) {
        if self.selected != node {
            log::debug!("selection changed: {:?} -> {:?}", self.selected, node);
            self.selected = node;
        }
    }

    /// Candidates under `point` while active; empty otherwise.
    pub fn hovered(&self, table: &NodeTable, point: Point) -> Vec<PickedNode> {
        if !self.active {
            return vec![];
        }
        nodes_at_point(table, table.roots(), point, self.marker_radius)
    }

    /// Select the deepest node under `point` and stop listening.
    ///
    /// Among candidates at the same depth the last one in pre-order wins.
    /// Returns the new selection. When inactive or when nothing is under the
    /// point, the selector is left unchanged and `None` is returned.
    pub fn pick(&mut self, table: &NodeTable, point: Point) -> Option<NodeId> {
        let picked = self
            .hovered(table, point)
            .into_iter()
            .max_by_key(|p| p.depth)?;
        self.select(Some(picked.node));
        self.active = false;
        Some(picked.node)
    }

    /// World bounds of the current selection; empty if nothing is selected
    /// or the selection went stale.
    pub fn selected_bounds(&self, table: &NodeTable) -> NodeBounds {
        NodeBounds::from_node(table, self.selected)
    }
}
