//! Style-dispatched body shapes.
//!
//! Each button style maps to one of a small closed set of body shapes; the
//! renderer builds the shape for the current style and paint rectangle, then
//! fills it through the [`Surface`] seam. Dispatch is a flat enum rather
//! than trait objects.

use enum_dispatch::enum_dispatch;

use crate::errors::ShapeError;
use crate::outline::Outline;
use crate::types::{Bounds, Orientation};

use super::surface::{Brush, Surface};

/// Behavior shared by all button body shapes.
#[enum_dispatch]
pub trait BodyShape {
    /// Fill this shape into `surface` using `brush`.
    fn fill(&self, surface: &mut dyn Surface, brush: &Brush) -> Result<(), ShapeError>;
}

/// Ellipse inscribed in the paint rectangle (circular and elliptical
/// styles; the circular control squares its own bounds beforehand).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseShape {
    pub bounds: Bounds,
}

impl BodyShape for EllipseShape {
    fn fill(&self, surface: &mut dyn Surface, brush: &Brush) -> Result<(), ShapeError> {
        surface.fill_ellipse(self.bounds, brush);
        Ok(())
    }
}

/// Rectangle with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectShape {
    pub bounds: Bounds,
    pub radius: f64,
    pub draw_ratio: f64,
}

impl BodyShape for RoundedRectShape {
    fn fill(&self, surface: &mut dyn Surface, brush: &Brush) -> Result<(), ShapeError> {
        let outline = Outline::rounded_rect(self.bounds, self.radius, self.draw_ratio);
        surface.fill_outline(&outline, brush);
        Ok(())
    }
}

/// Slanted quadrilateral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelogramShape {
    pub bounds: Bounds,
    pub angle: f64,
    pub orientation: Orientation,
}

impl BodyShape for ParallelogramShape {
    fn fill(&self, surface: &mut dyn Surface, brush: &Brush) -> Result<(), ShapeError> {
        let outline = Outline::parallelogram(self.bounds, self.angle, self.orientation)?;
        surface.fill_outline(&outline, brush);
        Ok(())
    }
}

/// The closed set of body shapes a button can render.
#[enum_dispatch(BodyShape)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonShape {
    Ellipse(EllipseShape),
    RoundedRect(RoundedRectShape),
    Parallelogram(ParallelogramShape),
}
