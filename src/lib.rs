//! Angle-and-radius driven button shape geometry.
//!
//! The crate models a shaped push-button as pure data plus pure geometry:
//!
//! - [`Corner`] / [`CornerSet`]: per-corner angle and rounding radius
//!   configuration, with the 360 degree closure validator, the
//!   parallelogram angle-linking rule, and a compact text form.
//! - [`Outline`]: closed boundary curves; rounded rectangles composed from
//!   corner arcs and angle-driven parallelograms.
//! - [`ButtonConfig`] / [`ButtonRenderer`]: the long-lived button state and
//!   the layout-plus-paint pass that turns it into fill and text calls on a
//!   [`Surface`].
//! - [`SvgSurface`]: a surface implementation that emits a standalone SVG
//!   document, used by tests and as the reference sink.
//!
//! Nothing here owns a window, a timer, or a rasterizer. Hosts feed in sizes
//! and clock readings and bind [`Surface`] to their own drawing stack.
//!
//! ```
//! use cornerwise::{ButtonConfig, ButtonStyle, render_button_svg};
//!
//! let mut config = ButtonConfig::default();
//! config.style = ButtonStyle::Parallelogram;
//! config.caption = "Go".to_string();
//! let mut corners = config.corners();
//! corners.top_left = corners.top_left.with_angle(60);
//! config.set_corners(corners);
//!
//! let svg = render_button_svg(&config, 200.0, 100.0).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod button;
pub mod corner;
pub mod errors;
pub mod log;
pub mod outline;
pub mod render;
pub mod style;
pub mod types;

pub use button::{ButtonConfig, ButtonState, RepeatSchedule, RepeatSettings};
pub use corner::{Corner, CornerSet};
pub use errors::{CornerParseError, ShapeError};
pub use outline::{Outline, Segment};
pub use render::{Brush, ButtonRenderer, Rgb, Surface, SvgSurface, TextStyle, gradient_color};
pub use style::{ButtonStyle, ConfigProperty};
pub use types::{Bounds, Orientation};

/// Render `config` at the given client size into a standalone SVG document.
pub fn render_button_svg(
    config: &ButtonConfig,
    width: f64,
    height: f64,
) -> Result<String, ShapeError> {
    let mut renderer = ButtonRenderer::default();
    renderer.update(config, width, height);
    let mut surface = SvgSurface::new(width, height);
    renderer.draw(config, &mut surface)?;
    Ok(surface.finish())
}
