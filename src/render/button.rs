//! Layout and painting of a configured button.
//!
//! [`ButtonRenderer`] holds the three paint rectangles and the scale ratio
//! derived from the host's client size. `update` recomputes them when the
//! size or style changes; `draw` paints background, body and caption through
//! the [`Surface`] seam.

use glam::dvec2;

use crate::button::{ButtonConfig, ButtonState};
use crate::errors::ShapeError;
use crate::log::debug;
use crate::style::ButtonStyle;
use crate::types::Bounds;

use super::color::gradient_color;
use super::shape::{
    BodyShape, ButtonShape, EllipseShape, ParallelogramShape, RoundedRectShape,
};
use super::surface::{Brush, Surface, TextStyle};

/// How far the caption shadow sits from the caption, scaled by the draw
/// ratio.
const CAPTION_SHADOW_OFFSET: f64 = 1.0;

/// How far the pressed inner body is inset from the body rectangle, scaled
/// by the draw ratio.
const PRESSED_INSET: f64 = 15.0;

/// How much the corner radius shrinks while a rectangular button is pressed.
const PRESSED_RADIUS_SHRINK: f64 = 5.0;

/// Layout state derived from the host's client size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonRenderer {
    rect_ctrl: Bounds,
    rect_body: Bounds,
    rect_text: Bounds,
    draw_ratio: f64,
}

impl ButtonRenderer {
    /// Recompute layout for a client area of `width` by `height`.
    ///
    /// Circular buttons square their bounds to the smaller dimension, with a
    /// floor of 10 units per side. The draw ratio scales stroke-like offsets
    /// with control size and falls back to 1 for degenerate sizes.
    pub fn update(&mut self, config: &ButtonConfig, width: f64, height: f64) {
        let mut rect = Bounds::new(0.0, 0.0, width, height);
        if config.style == ButtonStyle::Circular {
            let side = rect.width.min(rect.height).max(10.0);
            rect.width = side;
            rect.height = side;
        }

        self.rect_ctrl = rect;
        self.rect_body = Bounds::new(rect.x, rect.y, rect.width - 1.0, rect.height - 1.0);
        self.rect_text = Bounds::new(rect.x, rect.y, rect.width - 2.0, rect.height - 2.0);
        self.draw_ratio = rect.width.min(rect.height) / 200.0;
        if self.draw_ratio == 0.0 {
            self.draw_ratio = 1.0;
        }
        debug!(
            width = rect.width,
            height = rect.height,
            draw_ratio = self.draw_ratio,
            "layout updated"
        );
    }

    pub fn draw_ratio(&self) -> f64 {
        self.draw_ratio
    }

    pub fn control_rect(&self) -> Bounds {
        self.rect_ctrl
    }

    pub fn body_rect(&self) -> Bounds {
        self.rect_body
    }

    /// Paint the whole button: background, body, then caption.
    ///
    /// Fails without painting the body when the corner configuration is
    /// invalid for an angle-sensitive style.
    pub fn draw(&self, config: &ButtonConfig, surface: &mut dyn Surface) -> Result<(), ShapeError> {
        self.draw_background(config, surface);
        self.draw_body(config, surface)?;
        self.draw_caption(config, surface);
        Ok(())
    }

    fn draw_background(&self, config: &ButtonConfig, surface: &mut dyn Surface) {
        surface.fill_rect(self.rect_ctrl, config.back_color);
    }

    /// Fill the body with a gradient from the button color to its darkened
    /// shade. A pressed button additionally paints an inset body with the
    /// gradient reversed, which reads as a depression.
    fn draw_body(&self, config: &ButtonConfig, surface: &mut dyn Surface) -> Result<(), ShapeError> {
        let body = config.button_color;
        let dark = gradient_color(body, -80);

        let shape = self.body_shape(config, self.rect_body, false)?;
        let brush = Brush::LinearGradient {
            bounds: self.rect_body,
            start: body,
            end: dark,
        };
        shape.fill(surface, &brush)?;

        if config.state == ButtonState::Pressed {
            let inset = self
                .rect_body
                .inflate(-PRESSED_INSET * self.draw_ratio, -PRESSED_INSET * self.draw_ratio);
            let shape = self.body_shape(config, inset, true)?;
            let brush = Brush::LinearGradient {
                bounds: inset,
                start: dark,
                end: body,
            };
            shape.fill(surface, &brush)?;
        }
        Ok(())
    }

    /// Body shape for the current style over `rect`.
    ///
    /// Round styles ignore the corner set entirely; the other styles validate
    /// it before reading the driving corner.
    fn body_shape(
        &self,
        config: &ButtonConfig,
        rect: Bounds,
        pressed: bool,
    ) -> Result<ButtonShape, ShapeError> {
        match config.style {
            ButtonStyle::Circular | ButtonStyle::Elliptical => {
                Ok(EllipseShape { bounds: rect }.into())
            }
            ButtonStyle::Parallelogram => {
                config.corners().ensure_valid()?;
                Ok(ParallelogramShape {
                    bounds: rect,
                    angle: f64::from(config.corners().top_left.angle()),
                    orientation: config.orientation,
                }
                .into())
            }
            ButtonStyle::Rectangular => {
                config.corners().ensure_valid()?;
                let mut radius = f64::from(config.corners().top_left.radius());
                if pressed {
                    radius -= PRESSED_RADIUS_SHRINK;
                }
                Ok(RoundedRectShape {
                    bounds: rect,
                    radius,
                    draw_ratio: self.draw_ratio,
                }
                .into())
            }
        }
    }

    /// Center the caption in the text rectangle and draw it twice: a shadow
    /// in the body color offset by one scaled unit, then the darkened caption
    /// on top.
    fn draw_caption(&self, config: &ButtonConfig, surface: &mut dyn Surface) {
        if config.caption.is_empty() {
            return;
        }

        let body = config.button_color;
        let dark = gradient_color(body, -80);
        let shadow_style = TextStyle {
            size: config.font_size,
            color: body,
        };
        let caption_style = TextStyle {
            size: config.font_size,
            color: dark,
        };

        let extent = surface.measure_text(&config.caption, &caption_style);
        let at = dvec2(
            self.rect_text.left() + (self.rect_text.width - extent.x) / 2.0,
            self.rect_text.top() + (self.rect_text.height - extent.y) / 2.0,
        );
        let shadow = CAPTION_SHADOW_OFFSET * self.draw_ratio;

        surface.draw_text(&config.caption, at + dvec2(shadow, shadow), &shadow_style);
        surface.draw_text(&config.caption, at, &caption_style);
    }
}
