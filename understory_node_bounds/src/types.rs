// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node geometry as exposed by a host tree, and the handle lookup trait.

use kurbo::{Affine, Point, Rect, Vec2};

/// Local geometry of a single node, as resolved from the host tree.
///
/// All fields are plain scalars; no clamping or validation is applied.
/// Negative scales mirror, zero scales collapse the node onto a line or a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeGeometry {
    /// Unscaled width in local units.
    pub width: f64,
    /// Unscaled height in local units.
    pub height: f64,
    /// Position relative to the parent's coordinate space.
    pub x: f64,
    /// Position relative to the parent's coordinate space.
    pub y: f64,
    /// Pivot for rotation and scale, relative to `x`.
    pub origin_x: f64,
    /// Pivot for rotation and scale, relative to `y`.
    pub origin_y: f64,
    /// Rotation about the pivot, in radians.
    pub rotation: f64,
    /// Horizontal scale about the pivot.
    pub scale_x: f64,
    /// Vertical scale about the pivot.
    pub scale_y: f64,
}

impl Default for NodeGeometry {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            x: 0.0,
            y: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl NodeGeometry {
    /// Geometry of an untransformed `width` x `height` node at the parent's origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Return a copy moved to `(x, y)` in the parent's space.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Return a copy with the pivot set to `(origin_x, origin_y)`.
    pub fn with_origin(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Return a copy rotated by `rotation` radians.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Return a copy scaled by `(scale_x, scale_y)`.
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Translation into the parent's space.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Absolute pivot in the parent's space (offset plus local origin).
    pub fn origin(&self) -> Point {
        Point::new(self.x + self.origin_x, self.y + self.origin_y)
    }

    /// Per-axis scale as a vector.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.scale_x, self.scale_y)
    }

    /// Whether this node has no area and is represented as a single marker point.
    pub fn is_point_like(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// The unscaled local rectangle `(0, 0)..(width, height)`.
    pub fn local_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The node-to-parent transform as an [`Affine`].
    ///
    /// Translates by the offset, then scales and rotates about the absolute
    /// origin. Composition walks use the per-point form in
    /// [`transform_point`](crate::transform_point); this is for callers that
    /// want to hand the same mapping to an affine-based renderer.
    pub fn local_transform(&self) -> Affine {
        let origin = self.origin().to_vec2();
        Affine::translate(origin)
            * Affine::rotate(self.rotation)
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
            * Affine::translate(self.offset() - origin)
    }
}

/// Read-only view of a host tree.
///
/// Nodes are opaque `Copy` handles; the source resolves their geometry and
/// their parent. The parent relation is non-owning: implementations usually
/// store an index or a generational id rather than a pointer.
pub trait NodeSource {
    /// Handle type for a node.
    type Node: Copy;

    /// Current local geometry of `node`, or `None` if the handle is stale.
    fn geometry(&self, node: Self::Node) -> Option<NodeGeometry>;

    /// Parent of `node`, or `None` at a root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
}

impl<S: NodeSource + ?Sized> NodeSource for &S {
    type Node = S::Node;

    fn geometry(&self, node: Self::Node) -> Option<NodeGeometry> {
        (**self).geometry(node)
    }

    fn parent(&self, node: Self::Node) -> Option<Self::Node> {
        (**self).parent(node)
    }
}
