// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation of [`NodeBounds`] through an immediate-mode drawing backend.
//!
//! Geometry does not depend on this module. The draw requests here pass the
//! composed points through unchanged; colors, halos, and marker rings are a
//! presentation convention layered on top.

use kurbo::Point;

use crate::bounds::NodeBounds;

/// Straight (non-premultiplied) RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The same hue with alpha multiplied by `factor`.
    pub fn with_alpha_scaled(self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..self
        }
    }

    /// Pack into a `u32` with red in the low byte and alpha in the high byte.
    ///
    /// Components are clamped to `0.0..=1.0` and rounded to the nearest byte.
    pub fn pack(self) -> u32 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Clamped to 0..=255 before the cast."
        )]
        fn byte(c: f32) -> u32 {
            (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u32
        }
        byte(self.r) | (byte(self.g) << 8) | (byte(self.b) << 16) | (byte(self.a) << 24)
    }
}

/// Immediate-mode 2D drawing backend.
///
/// Colors arrive packed by [`Rgba::pack`]. Anti-aliasing, layering, and
/// how circles are tessellated are up to the implementation.
pub trait DrawBackend {
    /// Stroke a closed polyline through `points`.
    fn stroke_closed_polyline(&mut self, points: &[Point], color: u32, thickness: f64);

    /// Fill the convex polygon described by `points`.
    fn fill_convex_polygon(&mut self, points: &[Point], color: u32);

    /// Stroke a circle outline.
    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: u32,
        segments: u32,
        thickness: f64,
    );

    /// Fill a disk.
    fn fill_circle(&mut self, center: Point, radius: f64, color: u32, segments: u32);
}

impl<B: DrawBackend + ?Sized> DrawBackend for &mut B {
    fn stroke_closed_polyline(&mut self, points: &[Point], color: u32, thickness: f64) {
        (**self).stroke_closed_polyline(points, color, thickness);
    }

    fn fill_convex_polygon(&mut self, points: &[Point], color: u32) {
        (**self).fill_convex_polygon(points, color);
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: u32,
        segments: u32,
        thickness: f64,
    ) {
        (**self).stroke_circle(center, radius, color, segments, thickness);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: u32, segments: u32) {
        (**self).fill_circle(center, radius, color, segments);
    }
}

/// How highlights are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightStyle {
    /// Radius of the ring drawn around single-point bounds.
    pub marker_radius: f64,
    /// Segment count passed to the backend for circles.
    pub marker_segments: u32,
    /// Alpha multiplier for halos and fills.
    pub fill_alpha_scale: f32,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            marker_radius: 10.0,
            marker_segments: 12,
            fill_alpha_scale: 0.5,
        }
    }
}

impl NodeBounds {
    /// Request an outline of these bounds.
    ///
    /// Single points become a translucent halo ring plus a small solid ring.
    /// Empty bounds draw nothing.
    pub fn draw_outline<B: DrawBackend>(
        &self,
        backend: &mut B,
        style: &HighlightStyle,
        color: Rgba,
        thickness: f64,
    ) {
        match self.points() {
            [] => {}
            [p] => {
                let halo = color.with_alpha_scaled(style.fill_alpha_scale).pack();
                backend.stroke_circle(
                    *p,
                    style.marker_radius,
                    halo,
                    style.marker_segments,
                    thickness,
                );
                backend.stroke_circle(
                    *p,
                    thickness,
                    color.pack(),
                    style.marker_segments,
                    thickness + 1.0,
                );
            }
            points => backend.stroke_closed_polyline(points, color.pack(), thickness),
        }
    }

    /// Request a translucent fill of these bounds with a solid outline.
    ///
    /// Single points become a filled halo disk with a solid ring. Empty
    /// bounds draw nothing.
    pub fn draw_filled<B: DrawBackend>(
        &self,
        backend: &mut B,
        style: &HighlightStyle,
        color: Rgba,
        thickness: f64,
    ) {
        let fill = color.with_alpha_scaled(style.fill_alpha_scale).pack();
        match self.points() {
            [] => {}
            [p] => {
                backend.fill_circle(*p, style.marker_radius, fill, style.marker_segments);
                backend.stroke_circle(
                    *p,
                    style.marker_radius,
                    color.pack(),
                    style.marker_segments,
                    thickness,
                );
            }
            points => {
                backend.fill_convex_polygon(points, fill);
                backend.stroke_closed_polyline(points, color.pack(), thickness);
            }
        }
    }
}
