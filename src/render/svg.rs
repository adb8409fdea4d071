//! SVG drawing surface.
//!
//! Records fill and text calls as SVG elements and assembles a standalone
//! document. Path data is built by walking outline segments; arcs become
//! `A` commands with the sweep direction taken from the segment's sign.

use glam::DVec2;

use crate::outline::{Outline, Segment, arc_point};
use crate::types::Bounds;

use super::color::Rgb;
use super::surface::{Brush, Surface, TextStyle};

/// Proportional character advances in hundredths of an em for the printable
/// ASCII range, used to approximate text extents without a font engine.
#[rustfmt::skip]
const CHAR_ADVANCE: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Average glyph cell width relative to the font size.
const CHAR_CELL_RATIO: f64 = 0.57;

/// Sum of proportional advances for `text`, in hundredths of an em.
/// Characters outside printable ASCII count as a full em.
fn text_advance(text: &str) -> u32 {
    text.chars()
        .map(|c| {
            if ('\u{20}'..='\u{7e}').contains(&c) {
                u32::from(CHAR_ADVANCE[(c as usize) - 0x20])
            } else {
                100
            }
        })
        .sum()
}

/// A [`Surface`] that collects SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Assemble the final SVG document.
    pub fn finish(self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            num(self.width),
            num(self.height),
            num(self.width),
            num(self.height),
        );
        out.push('\n');
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            for def in &self.defs {
                out.push_str(def);
                out.push('\n');
            }
            out.push_str("</defs>\n");
        }
        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    /// Resolve a brush to a `fill` attribute value, registering a gradient
    /// definition when needed.
    fn fill_value(&mut self, brush: &Brush) -> String {
        match *brush {
            Brush::Solid(color) => color.to_string(),
            Brush::LinearGradient { bounds, start, end } => {
                let id = format!("grad{}", self.defs.len());
                // The 45 degree gradient runs corner to corner across the
                // brush rectangle in user space.
                self.defs.push(format!(
                    r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}"><stop offset="0" stop-color="{start}"/><stop offset="1" stop-color="{end}"/></linearGradient>"#,
                    num(bounds.left()),
                    num(bounds.top()),
                    num(bounds.right()),
                    num(bounds.bottom()),
                ));
                format!("url(#{id})")
            }
        }
    }
}

impl Surface for SvgSurface {
    fn fill_outline(&mut self, outline: &Outline, brush: &Brush) {
        let fill = self.fill_value(brush);
        let d = path_data(outline);
        self.elements
            .push(format!(r#"<path d="{d}" fill="{fill}"/>"#));
    }

    fn fill_ellipse(&mut self, bounds: Bounds, brush: &Brush) {
        let fill = self.fill_value(brush);
        let c = bounds.center();
        self.elements.push(format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{fill}"/>"#,
            num(c.x),
            num(c.y),
            num(bounds.width / 2.0),
            num(bounds.height / 2.0),
        ));
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Rgb) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}"/>"#,
            num(bounds.left()),
            num(bounds.top()),
            num(bounds.width),
            num(bounds.height),
        ));
    }

    fn draw_text(&mut self, text: &str, at: DVec2, style: &TextStyle) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" fill="{}" dominant-baseline="hanging">{}</text>"#,
            num(at.x),
            num(at.y),
            num(style.size),
            style.color,
            escape_text(text),
        ));
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> DVec2 {
        let em_hundredths = f64::from(text_advance(text));
        DVec2::new(
            em_hundredths * 0.01 * style.size * CHAR_CELL_RATIO,
            style.size,
        )
    }
}

/// SVG path data for a closed outline.
pub fn path_data(outline: &Outline) -> String {
    let mut d = String::new();
    for (i, segment) in outline.segments().iter().enumerate() {
        if i == 0 {
            let start = segment.start_point();
            d.push_str(&format!("M {} {}", num(start.x), num(start.y)));
        }
        match *segment {
            Segment::Line { to, .. } => {
                d.push_str(&format!(" L {} {}", num(to.x), num(to.y)));
            }
            Segment::Arc { rect, start, sweep } => {
                let end = arc_point(rect, start + sweep);
                let large = u8::from(sweep.abs() > 180.0);
                let sweep_flag = u8::from(sweep >= 0.0);
                d.push_str(&format!(
                    " A {} {} 0 {large} {sweep_flag} {} {}",
                    num(rect.width / 2.0),
                    num(rect.height / 2.0),
                    num(end.x),
                    num(end.y),
                ));
            }
        }
    }
    d.push_str(" Z");
    d
}

/// Fixed two-decimal formatting, with negative zero folded to zero so that
/// rounding jitter cannot flip a sign in the output.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    if s == "-0.00" { "0.00".to_string() } else { s }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;
    use glam::dvec2;

    #[test]
    fn plain_rectangle_path() {
        let outline = Outline::rect(Bounds::new(0.0, 0.0, 4.0, 4.0));
        insta::assert_snapshot!(
            path_data(&outline),
            @"M 0.00 0.00 L 4.00 0.00 L 4.00 4.00 L 0.00 4.00 L 0.00 0.00 Z"
        );
    }

    #[test]
    fn rounded_rectangle_path() {
        let outline = Outline::rounded_rect(Bounds::new(0.0, 0.0, 40.0, 40.0), 10.0, 1.0);
        insta::assert_snapshot!(
            path_data(&outline),
            @"M 0.00 10.00 A 10.00 10.00 0 0 1 10.00 0.00 L 30.00 0.00 A 10.00 10.00 0 0 1 40.00 10.00 L 40.00 30.00 A 10.00 10.00 0 0 1 30.00 40.00 L 10.00 40.00 A 10.00 10.00 0 0 1 0.00 30.00 L 0.00 10.00 Z"
        );
    }

    #[test]
    fn parallelogram_path() {
        let outline = Outline::parallelogram(
            Bounds::new(0.0, 0.0, 100.0, 50.0),
            60.0,
            Orientation::Horizontal,
        )
        .unwrap();
        insta::assert_snapshot!(
            path_data(&outline),
            @"M 0.00 0.00 L 71.13 0.00 L 100.00 50.00 L 28.87 50.00 L 0.00 0.00 Z"
        );
    }

    #[test]
    fn gradient_brush_registers_a_def() {
        let mut surface = SvgSurface::new(100.0, 50.0);
        let brush = Brush::LinearGradient {
            bounds: Bounds::new(0.0, 0.0, 100.0, 50.0),
            start: Rgb::RED,
            end: Rgb::BLACK,
        };
        surface.fill_ellipse(Bounds::new(0.0, 0.0, 100.0, 50.0), &brush);
        let svg = surface.finish();
        assert!(svg.contains(r#"<linearGradient id="grad0""#));
        assert!(svg.contains(r#"fill="url(#grad0)""#));
        assert!(svg.contains(r#"x2="100.00" y2="50.00""#));
    }

    #[test]
    fn text_is_escaped() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        let style = TextStyle {
            size: 14.0,
            color: Rgb::BLACK,
        };
        surface.draw_text("a<b&c>", dvec2(0.0, 0.0), &style);
        let svg = surface.finish();
        assert!(svg.contains("a&lt;b&amp;c&gt;"));
    }

    #[test]
    fn wider_text_measures_wider() {
        let surface = SvgSurface::new(10.0, 10.0);
        let style = TextStyle {
            size: 14.0,
            color: Rgb::BLACK,
        };
        let narrow = surface.measure_text("iii", &style);
        let wide = surface.measure_text("WWW", &style);
        assert!(wide.x > narrow.x);
        assert_eq!(narrow.y, 14.0);
        assert_eq!(surface.measure_text("", &style).x, 0.0);
    }
}
