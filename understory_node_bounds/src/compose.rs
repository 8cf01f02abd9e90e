// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of a node's local geometry through its ancestor chain.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::bounds::NodeBounds;
use crate::types::NodeSource;

/// Default cap on the number of levels walked from a node towards its root.
///
/// Host trees are expected to be shallow and acyclic; the cap only exists so
/// that an inconsistent parent chain terminates.
pub const MAX_ANCESTOR_DEPTH: usize = 256;

/// Options for composing bounds.
#[derive(Clone, Copy, Debug)]
pub struct ComposeOptions {
    /// Maximum number of levels (the starting node included) to apply.
    pub max_depth: usize,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_ANCESTOR_DEPTH,
        }
    }
}

/// Scale and rotate `p` about `origin`.
///
/// The offset from `origin` is scaled per axis first, then rotated by
/// `rotation` radians.
pub fn transform_point(p: Point, origin: Point, rotation: f64, scale: Vec2) -> Point {
    let (sin_r, cos_r) = (rotation.sin(), rotation.cos());
    let d = p - origin;
    let d = Vec2::new(d.x * scale.x, d.y * scale.y);
    Point::new(
        origin.x + d.x * cos_r - d.y * sin_r,
        origin.y + d.x * sin_r + d.y * cos_r,
    )
}

impl NodeBounds {
    /// World-space outline of `node`.
    ///
    /// The seed is the node's local rectangle, or the single point `(0, 0)`
    /// when both width and height are zero. `None` or a stale handle yields
    /// empty bounds.
    pub fn from_node<S: NodeSource>(source: &S, node: Option<S::Node>) -> Self {
        Self::from_node_with(source, node, ComposeOptions::default())
    }

    /// [`from_node`](Self::from_node) with explicit options.
    pub fn from_node_with<S: NodeSource>(
        source: &S,
        node: Option<S::Node>,
        options: ComposeOptions,
    ) -> Self {
        let Some(geometry) = node.and_then(|n| source.geometry(n)) else {
            return Self::empty();
        };
        let mut bounds = if geometry.is_point_like() {
            Self::from_points([Point::ZERO])
        } else {
            let (w, h) = (geometry.width, geometry.height);
            Self::from_points([
                Point::new(0.0, 0.0),
                Point::new(w, 0.0),
                Point::new(w, h),
                Point::new(0.0, h),
            ])
        };
        bounds.transform_points(source, node, options);
        bounds
    }

    /// World-space position of `local`, a point in `node`'s local frame.
    ///
    /// The result holds a single point, or no points if `node` is `None` or
    /// stale.
    pub fn from_local_point<S: NodeSource>(
        source: &S,
        node: Option<S::Node>,
        local: Point,
    ) -> Self {
        Self::from_local_point_with(source, node, local, ComposeOptions::default())
    }

    /// [`from_local_point`](Self::from_local_point) with explicit options.
    pub fn from_local_point_with<S: NodeSource>(
        source: &S,
        node: Option<S::Node>,
        local: Point,
        options: ComposeOptions,
    ) -> Self {
        match node {
            Some(n) if source.geometry(n).is_some() => {
                let mut bounds = Self::from_points([local]);
                bounds.transform_points(source, node, options);
                bounds
            }
            _ => Self::empty(),
        }
    }

    /// Map the current points from `node`'s local frame into world space.
    ///
    /// Each level, starting at `node` and walking outwards, translates every
    /// point by the level's offset and then scales and rotates it about the
    /// level's absolute origin. The walk ends at a root, at a stale handle, or
    /// after `options.max_depth` levels. Returns the number of levels applied.
    pub fn transform_points<S: NodeSource>(
        &mut self,
        source: &S,
        node: Option<S::Node>,
        options: ComposeOptions,
    ) -> usize {
        let mut current = node;
        let mut depth = 0;
        while let Some(n) = current {
            if depth == options.max_depth {
                log::warn!(
                    "ancestor walk truncated after {depth} levels; parent chain may contain a cycle"
                );
                break;
            }
            let Some(geometry) = source.geometry(n) else {
                break;
            };
            let offset = geometry.offset();
            let origin = geometry.origin();
            let scale = geometry.scale();
            for p in &mut self.points {
                *p = transform_point(*p + offset, origin, geometry.rotation, scale);
            }
            depth += 1;
            current = source.parent(n);
        }
        log::trace!("composed {} points over {depth} levels", self.points.len());
        depth
    }
}

/// World-space outline of `node`; see [`NodeBounds::from_node`].
pub fn world_bounds<S: NodeSource>(source: &S, node: Option<S::Node>) -> NodeBounds {
    NodeBounds::from_node(source, node)
}

/// World-space position of a local point; see [`NodeBounds::from_local_point`].
pub fn world_point<S: NodeSource>(
    source: &S,
    node: Option<S::Node>,
    local: Point,
) -> NodeBounds {
    NodeBounds::from_local_point(source, node, local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeGeometry;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::f64::consts::{FRAC_PI_2, PI};

    /// Flat host tree: each entry is a node's geometry and its parent index.
    struct Flat(Vec<(NodeGeometry, Option<usize>)>);

    impl NodeSource for Flat {
        type Node = usize;

        fn geometry(&self, node: usize) -> Option<NodeGeometry> {
            self.0.get(node).map(|(g, _)| *g)
        }

        fn parent(&self, node: usize) -> Option<usize> {
            self.0.get(node).and_then(|(_, p)| *p)
        }
    }

    fn assert_points_near(actual: &[Point], expected: &[Point]) {
        assert_eq!(actual.len(), expected.len(), "point count differs");
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                (*a - *e).hypot() < 1e-4,
                "expected {e:?}, got {a:?} (all: {actual:?})"
            );
        }
    }

    #[test]
    fn root_with_identity_transform() {
        let src = Flat(vec![(NodeGeometry::sized(30.0, 20.0), None)]);
        let b = NodeBounds::from_node(&src, Some(0));
        assert_eq!(
            b.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(30.0, 0.0),
                Point::new(30.0, 20.0),
                Point::new(0.0, 20.0),
            ]
        );
    }

    #[test]
    fn parent_translation() {
        let src = Flat(vec![
            (NodeGeometry::default().at(10.0, 5.0), None),
            (NodeGeometry::sized(4.0, 2.0), Some(0)),
        ]);
        let b = world_bounds(&src, Some(1));
        assert_eq!(
            b.points(),
            &[
                Point::new(10.0, 5.0),
                Point::new(14.0, 5.0),
                Point::new(14.0, 7.0),
                Point::new(10.0, 7.0),
            ]
        );
    }

    #[test]
    fn zero_sized_node_is_a_single_point() {
        let src = Flat(vec![
            (NodeGeometry::default().at(10.0, 5.0), None),
            (NodeGeometry::default().at(3.0, 4.0), Some(0)),
        ]);
        let b = NodeBounds::from_node(&src, Some(1));
        assert_eq!(b.points(), &[Point::new(13.0, 9.0)]);
        assert!(!b.contains_point(Point::new(13.0, 9.0)));
        assert!(!b.contains_point(Point::new(0.0, 0.0)));
    }

    #[test]
    fn half_turn_about_center() {
        let (w, h) = (4.0, 2.0);
        let src = Flat(vec![(
            NodeGeometry::sized(w, h)
                .with_origin(w / 2.0, h / 2.0)
                .with_rotation(PI),
            None,
        )]);
        let b = NodeBounds::from_node(&src, Some(0));
        assert_points_near(
            b.points(),
            &[
                Point::new(w, h),
                Point::new(0.0, h),
                Point::new(0.0, 0.0),
                Point::new(w, 0.0),
            ],
        );
    }

    #[test]
    fn chain_applies_child_before_ancestors() {
        let src = Flat(vec![
            // Grandparent: translate only.
            (NodeGeometry::default().at(20.0, 0.0), None),
            // Parent: quarter turn about its own origin (0, 0).
            (NodeGeometry::default().with_rotation(FRAC_PI_2), Some(0)),
            // Child: unit rect at the parent's origin.
            (NodeGeometry::sized(1.0, 1.0), Some(1)),
        ]);
        let b = NodeBounds::from_node(&src, Some(2));
        // Rotation (x, y) -> (-y, x) happens first, then the +20 shift.
        assert_points_near(
            b.points(),
            &[
                Point::new(20.0, 0.0),
                Point::new(20.0, 1.0),
                Point::new(19.0, 1.0),
                Point::new(19.0, 0.0),
            ],
        );
    }

    #[test]
    fn pivot_is_per_level() {
        // Parent scales by 2 about its own origin at (5, 5); the child sits at
        // (5, 5) inside it, so its top-left corner stays fixed.
        let src = Flat(vec![
            (
                NodeGeometry::sized(10.0, 10.0)
                    .with_origin(5.0, 5.0)
                    .with_scale(2.0, 2.0),
                None,
            ),
            (NodeGeometry::sized(1.0, 1.0).at(5.0, 5.0), Some(0)),
        ]);
        let b = NodeBounds::from_node(&src, Some(1));
        assert_points_near(
            b.points(),
            &[
                Point::new(5.0, 5.0),
                Point::new(7.0, 5.0),
                Point::new(7.0, 7.0),
                Point::new(5.0, 7.0),
            ],
        );
    }

    #[test]
    fn negative_scale_mirrors() {
        let src = Flat(vec![(
            NodeGeometry::sized(2.0, 1.0).with_scale(-1.0, 1.0),
            None,
        )]);
        let b = NodeBounds::from_node(&src, Some(0));
        assert_eq!(
            b.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(-2.0, 0.0),
                Point::new(-2.0, 1.0),
                Point::new(0.0, 1.0),
            ]
        );
        // Winding flips, containment still works.
        assert!(b.contains_point(Point::new(-1.0, 0.5)));
    }

    #[test]
    fn zero_scale_collapses_without_fault() {
        let src = Flat(vec![(
            NodeGeometry::sized(8.0, 8.0)
                .at(1.0, 1.0)
                .with_origin(4.0, 4.0)
                .with_scale(0.0, 0.0),
            None,
        )]);
        let b = NodeBounds::from_node(&src, Some(0));
        assert_eq!(b.len(), 4);
        assert!(b.points().iter().all(|p| *p == Point::new(5.0, 5.0)));
        assert!(!b.contains_point(Point::new(5.0, 5.0)));
    }

    #[test]
    fn missing_node_yields_empty_bounds() {
        let src = Flat(vec![(NodeGeometry::sized(1.0, 1.0), None)]);
        assert!(NodeBounds::from_node(&src, None).is_empty());
        assert!(world_point(&src, None, Point::new(1.0, 1.0)).is_empty());
        // Stale handle behaves like a missing node.
        assert!(NodeBounds::from_node(&src, Some(7)).is_empty());
        assert!(!NodeBounds::from_node(&src, None).contains_point(Point::ZERO));
    }

    #[test]
    fn stale_parent_ends_the_walk() {
        let src = Flat(vec![(
            NodeGeometry::sized(1.0, 1.0).at(2.0, 0.0),
            Some(9),
        )]);
        let b = NodeBounds::from_node(&src, Some(0));
        assert_eq!(b.points()[0], Point::new(2.0, 0.0));
    }

    #[test]
    fn local_point_is_composed_like_a_corner() {
        let src = Flat(vec![
            (NodeGeometry::default().at(10.0, 5.0), None),
            (NodeGeometry::sized(4.0, 2.0), Some(0)),
        ]);
        let corner = NodeBounds::from_node(&src, Some(1)).points()[2];
        let p = world_point(&src, Some(1), Point::new(4.0, 2.0));
        assert_eq!(p.as_point(), Some(corner));
    }

    #[test]
    fn cyclic_chain_is_capped() {
        let src = Flat(vec![
            (NodeGeometry::sized(1.0, 1.0).at(1.0, 0.0), Some(1)),
            (NodeGeometry::default().at(1.0, 0.0), Some(0)),
        ]);
        let mut b = NodeBounds::from_points([Point::ZERO]);
        let levels = b.transform_points(&src, Some(0), ComposeOptions { max_depth: 10 });
        assert_eq!(levels, 10);
        assert_eq!(b.as_point(), Some(Point::new(10.0, 0.0)));

        let capped = NodeBounds::from_node(&src, Some(0));
        assert_eq!(capped.len(), 4);
        assert_eq!(capped.points()[0], Point::new(MAX_ANCESTOR_DEPTH as f64, 0.0));
    }

    #[test]
    fn same_input_same_output() {
        let src = Flat(vec![
            (NodeGeometry::default().at(3.0, 7.0).with_rotation(0.3), None),
            (NodeGeometry::sized(5.0, 5.0).with_scale(1.2, 0.8), Some(0)),
        ]);
        assert_eq!(
            NodeBounds::from_node(&src, Some(1)),
            NodeBounds::from_node(&src, Some(1))
        );
    }
}
