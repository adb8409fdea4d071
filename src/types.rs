//! Geometric primitives shared across the crate.

use glam::{DVec2, dvec2};

/// Axis-aligned rectangle in floating-point drawing units.
///
/// Hosts supply a fresh `Bounds` on every paint call; the geometry core never
/// stores one between calls.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn top_left(&self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    pub fn center(&self) -> DVec2 {
        dvec2(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Grow the rectangle by `dx`/`dy` on each side (negative values shrink).
    pub fn inflate(&self, dx: f64, dy: f64) -> Bounds {
        Bounds::new(
            self.x - dx,
            self.y - dy,
            self.width + 2.0 * dx,
            self.height + 2.0 * dy,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Which bounds dimension drives the parallelogram slant offset: the height
/// for `Horizontal` shapes, the width for `Vertical` ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}
