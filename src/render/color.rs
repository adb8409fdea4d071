//! RGB color and the lighten/darken blend used for gradient body fills.

use std::fmt;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Blend one channel of `fore` toward `back` with opacity `alpha`, clamped
/// to the 0..=255 range.
fn blend_channel(fore: f64, back: f64, alpha: f64) -> f64 {
    (back + alpha * (fore - back)).clamp(0.0, 255.0)
}

/// Lighten (positive percentage) or darken (negative percentage) a color by
/// blending it toward white or black. The magnitude is clamped to 100; at
/// 100 the blend is fully white/black, at 0 the color is unchanged.
pub fn gradient_color(color: Rgb, percentage: i32) -> Rgb {
    if percentage == 0 {
        return color;
    }

    let back = if percentage > 0 { 255.0 } else { 0.0 };
    let alpha = 1.0 - f64::from(percentage.clamp(-100, 100).abs()) / 100.0;

    Rgb {
        r: blend_channel(f64::from(color.r), back, alpha) as u8,
        g: blend_channel(f64::from(color.g), back, alpha) as u8,
        b: blend_channel(f64::from(color.b), back, alpha) as u8,
    }
}
