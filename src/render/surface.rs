//! The drawing sink: an opaque 2D surface accepting fill and text calls.
//!
//! The renderer never rasterizes anything itself; everything it produces
//! flows through [`Surface`]. Hosts bind this to whatever paints for them —
//! the crate ships an SVG implementation in [`super::svg`].

use glam::DVec2;

use crate::outline::Outline;
use crate::types::Bounds;

use super::color::Rgb;

/// Fill descriptor for a shape body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Brush {
    Solid(Rgb),
    /// Two-stop linear gradient across `bounds` at the fixed 45 degree
    /// angle (top-left toward bottom-right).
    LinearGradient {
        bounds: Bounds,
        start: Rgb,
        end: Rgb,
    },
}

/// Sizing and color for caption text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Rgb,
}

/// An opaque 2D drawing surface.
pub trait Surface {
    /// Fill the region bounded by a closed outline.
    fn fill_outline(&mut self, outline: &Outline, brush: &Brush);

    /// Fill the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Bounds, brush: &Brush);

    /// Fill an axis-aligned rectangle with a solid color.
    fn fill_rect(&mut self, bounds: Bounds, color: Rgb);

    /// Draw `text` with its top-left anchor at `at`.
    fn draw_text(&mut self, text: &str, at: DVec2, style: &TextStyle);

    /// Approximate extent of `text` in drawing units, used to center
    /// captions before drawing them.
    fn measure_text(&self, text: &str, style: &TextStyle) -> DVec2;
}
