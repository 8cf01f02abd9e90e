// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World-space node outline and point containment.

use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// World-space outline of a node.
///
/// Holds zero points (no node), one point (a zero-sized node or a single
/// transformed local point), or four points: the corners of the node's local
/// rectangle in the order `(0, 0)`, `(w, 0)`, `(w, h)`, `(0, h)`, each mapped
/// into world space. Point order defines the edges used by
/// [`contains_point`](Self::contains_point) and by the draw requests.
///
/// Bounds are built fresh for each query and are never cached.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeBounds {
    pub(crate) points: SmallVec<[Point; 4]>,
}

impl NodeBounds {
    /// Bounds with no points. Contains nothing and draws nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bounds consisting of the given points, already in world space.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// The outline points in edge order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no points (the bounds of a missing node).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The single marker point, if these are point bounds.
    pub fn as_point(&self) -> Option<Point> {
        match self.points.as_slice() {
            [p] => Some(*p),
            _ => None,
        }
    }

    /// Axis-aligned box around all points, or `None` when empty.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut it = self.points.iter().copied();
        let first = it.next()?;
        Some(it.fold(Rect::from_points(first, first), |acc, p| acc.union_pt(p)))
    }

    /// Even-odd test of whether `p` lies inside the outline.
    ///
    /// A horizontal ray is cast from `p` towards positive x. For each edge,
    /// including the closing edge from the last point back to the first, a
    /// crossing is counted when `p.y` is above the lower end (exclusive) and
    /// at or below the upper end (inclusive), and `p.x` is at or left of the
    /// edge at that height. Vertical edges skip the interpolation.
    ///
    /// Empty and single-point bounds contain nothing, not even their own
    /// point. Use [`contains_or_near`](Self::contains_or_near) to give markers
    /// a pick radius.
    pub fn contains_point(&self, p: Point) -> bool {
        let count = self.points.len();
        let mut inside = false;

        for i in 0..count {
            let p1 = self.points[i];
            let p2 = self.points[(i + 1) % count];

            if p.y > p1.y.min(p2.y)
                && p.y <= p1.y.max(p2.y)
                && p.x <= p1.x.max(p2.x)
                && (p1.x == p2.x || p.x <= (p.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x)
            {
                inside = !inside;
            }
        }

        inside
    }

    /// Like [`contains_point`](Self::contains_point), but single-point bounds
    /// match any `p` within `marker_radius` of their point.
    pub fn contains_or_near(&self, p: Point, marker_radius: f64) -> bool {
        match self.as_point() {
            Some(marker) => marker.distance(p) <= marker_radius,
            None => self.contains_point(p),
        }
    }
}
