// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory node table standing in for a host UI tree.

use alloc::{string::String, vec, vec::Vec};
use understory_node_bounds::{NodeGeometry, NodeSource};

/// Identifier for a node in a [`NodeTable`] (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Per-node state flags reported by the host.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible (drawn by the host and eligible for picking).
        const VISIBLE = 0b0000_0001;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Description of a node as inserted into the table.
#[derive(Clone, Debug, Default)]
pub struct NodeDesc {
    /// Display name used for searching.
    pub name: String,
    /// Local geometry.
    pub geometry: NodeGeometry,
    /// Visibility flags.
    pub flags: NodeFlags,
}

impl NodeDesc {
    /// A visible node with the given name and geometry.
    pub fn new(name: impl Into<String>, geometry: NodeGeometry) -> Self {
        Self {
            name: name.into(),
            geometry,
            flags: NodeFlags::default(),
        }
    }

    /// Return a copy with the given flags.
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    desc: NodeDesc,
}

/// Hierarchy of named nodes with local geometry.
///
/// Handles are generational: once a node is removed its [`NodeId`] is stale
/// and every accessor treats it as absent, even after the slot is reused.
/// The table implements [`NodeSource`], so bounds can be composed straight
/// from it.
#[derive(Clone, Default)]
pub struct NodeTable {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    roots: Vec<NodeId>,
}

impl core::fmt::Debug for NodeTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("NodeTable")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}

impl NodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under `parent`, or as a new root if `parent` is `None`
    /// or stale.
    pub fn insert(&mut self, parent: Option<NodeId>, desc: NodeDesc) -> NodeId {
        let parent = parent.filter(|p| self.is_alive(*p));
        let node = |generation| Node {
            generation,
            parent,
            children: Vec::new(),
            desc,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(node(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(node(generation)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(idx as u32, generation);
        match parent {
            Some(p) => {
                if let Some(n) = self.node_opt_mut(p) {
                    n.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Remove a node and its subtree. Stale ids are ignored.
    pub fn remove(&mut self, id: NodeId) {
        let Some(parent) = self.node_opt(id).map(|n| n.parent) else {
            return;
        };
        match parent {
            Some(p) => {
                if let Some(n) = self.node_opt_mut(p) {
                    n.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes[next.idx()].take() {
                stack.extend(node.children);
                self.free_list.push(next.idx());
            }
        }
    }

    /// Whether `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Replace a node's local geometry.
    pub fn set_geometry(&mut self, id: NodeId, geometry: NodeGeometry) {
        if let Some(n) = self.node_opt_mut(id) {
            n.desc.geometry = geometry;
        }
    }

    /// Replace a node's flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.desc.flags = flags;
        }
    }

    /// Name of a live node.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node_opt(id).map(|n| n.desc.name.as_str())
    }

    /// Flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node_opt(id).map(|n| n.desc.flags)
    }

    /// Whether a live node is flagged visible. Stale ids are not visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.flags(id).is_some_and(|f| f.contains(NodeFlags::VISIBLE))
    }

    /// Parent of a live node, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Children of a live node in insertion order; empty for stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Root nodes in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Pre-order depth-first walk of `root`'s subtree, yielding each node and
    /// its depth below `root`.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let stack = if self.is_alive(root) {
            vec![(root, 0)]
        } else {
            Vec::new()
        };
        Descendants { table: self, stack }
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .filter(|n| n.generation == id.1)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes
            .get_mut(id.idx())
            .and_then(|slot| slot.as_mut())
            .filter(|n| n.generation == id.1)
    }
}

impl NodeSource for NodeTable {
    type Node = NodeId;

    fn geometry(&self, node: NodeId) -> Option<NodeGeometry> {
        self.node_opt(node).map(|n| n.desc.geometry)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent_of(node)
    }
}

/// Iterator returned by [`NodeTable::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    table: &'a NodeTable,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for Descendants<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let children = self.table.children_of(id);
        self.stack.extend(children.iter().rev().map(|c| (*c, depth + 1)));
        Some((id, depth))
    }
}
