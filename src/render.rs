//! Rendering: the drawing-sink seam and the button renderer.
//!
//! This module is organized into submodules:
//! - `color`: RGB color and gradient blending
//! - `surface`: the `Surface` trait (drawing sink) and `Brush`
//! - `shape`: style-dispatched body shapes
//! - `button`: layout and painting of a configured button
//! - `svg`: a `Surface` implementation emitting SVG

pub mod button;
pub mod color;
pub mod shape;
pub mod surface;
pub mod svg;

pub use button::ButtonRenderer;
pub use color::{Rgb, gradient_color};
pub use surface::{Brush, Surface, TextStyle};
pub use svg::SvgSurface;
