//! Closed shape outlines: rounded-rectangle arc composition and angle-driven
//! parallelogram construction.
//!
//! An [`Outline`] is the computed result handed to a drawing sink: an ordered
//! sequence of arcs and straight edges that, traversed in order and closed,
//! bounds the shape's fill region. Outlines are immutable once produced and
//! rebuilt from scratch on every paint cycle, so construction is a pure
//! function of its inputs and safe to re-enter from any repaint tick.

use glam::{DVec2, dvec2};

use crate::errors::ShapeError;
use crate::log::{debug, warn};
use crate::types::{Bounds, Orientation};

/// Coincidence tolerance when deciding whether two consecutive segment
/// endpoints need a connecting edge.
const CONNECT_EPSILON: f64 = 1e-9;

/// One drawing primitive of an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight edge from `from` to `to`.
    Line { from: DVec2, to: DVec2 },
    /// Elliptical arc inscribed in `rect`, sweeping `sweep` degrees from
    /// `start` degrees. Angles follow the screen convention: 0 degrees points
    /// east and positive angles turn clockwise (y grows downward).
    Arc { rect: Bounds, start: f64, sweep: f64 },
}

impl Segment {
    /// Point where traversal of this segment begins.
    pub fn start_point(&self) -> DVec2 {
        match *self {
            Segment::Line { from, .. } => from,
            Segment::Arc { rect, start, .. } => arc_point(rect, start),
        }
    }

    /// Point where traversal of this segment ends.
    pub fn end_point(&self) -> DVec2 {
        match *self {
            Segment::Line { to, .. } => to,
            Segment::Arc { rect, start, sweep } => arc_point(rect, start + sweep),
        }
    }
}

/// Point on the ellipse inscribed in `rect` at `angle` degrees (0 = east,
/// clockwise positive in screen coordinates).
pub fn arc_point(rect: Bounds, angle: f64) -> DVec2 {
    let rad = angle.to_radians();
    let c = rect.center();
    dvec2(
        c.x + rect.width / 2.0 * rad.cos(),
        c.y + rect.height / 2.0 * rad.sin(),
    )
}

/// A closed boundary curve of arc and line segments, used for fill/stroke.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    segments: Vec<Segment>,
}

impl Outline {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Start points of every segment in traversal order. For an all-line
    /// outline these are exactly the polygon vertices.
    pub fn vertices(&self) -> Vec<DVec2> {
        self.segments.iter().map(Segment::start_point).collect()
    }

    /// Plain axis-aligned rectangle outline.
    pub fn rect(bounds: Bounds) -> Outline {
        let (l, t, r, b) = (bounds.left(), bounds.top(), bounds.right(), bounds.bottom());
        let mut builder = OutlineBuilder::new();
        builder.line(dvec2(l, t), dvec2(r, t));
        builder.line(dvec2(r, t), dvec2(r, b));
        builder.line(dvec2(r, b), dvec2(l, b));
        builder.line(dvec2(l, b), dvec2(l, t));
        builder.close()
    }

    /// Rounded rectangle: a 90 degree arc at each corner, connected by
    /// straight edges and closed after the last arc.
    ///
    /// `draw_ratio` maps the logical `radius` to device units; the arc boxes
    /// are squares of side `radius * draw_ratio * 2` walked around the four
    /// corners (top-left, top-right, bottom-right, bottom-left). A radius of
    /// zero or less degenerates to the plain rectangle.
    ///
    /// The arc diameter is deliberately not clamped to half the smaller
    /// bounds dimension; oversized radii produce overlapping arcs (see
    /// DESIGN.md).
    pub fn rounded_rect(bounds: Bounds, radius: f64, draw_ratio: f64) -> Outline {
        if radius <= 0.0 {
            return Self::rect(bounds);
        }

        let diameter = radius * draw_ratio * 2.0;
        if diameter > bounds.width.min(bounds.height) {
            warn!(diameter, "corner arcs overlap, radius exceeds half the bounds");
        }
        let mut arc = Bounds::new(bounds.left(), bounds.top(), diameter, diameter);
        let mut builder = OutlineBuilder::new();

        // top left
        builder.arc(arc, 180.0, 90.0);
        // top right
        arc.x = bounds.right() - diameter;
        builder.arc(arc, 270.0, 90.0);
        // bottom right
        arc.y = bounds.bottom() - diameter;
        builder.arc(arc, 0.0, 90.0);
        // bottom left
        arc.x = bounds.left();
        builder.arc(arc, 90.0, 90.0);

        builder.close()
    }

    /// Parallelogram with the given slant `angle` in degrees at the leading
    /// corner (top-left in `Horizontal` orientation).
    ///
    /// An angle of exactly 90 degenerates to the plain rectangle. Angles at
    /// or beyond 0/180 are rejected: their shear offset is infinite.
    pub fn parallelogram(
        bounds: Bounds,
        angle: f64,
        orientation: Orientation,
    ) -> Result<Outline, ShapeError> {
        if !(angle > 0.0 && angle < 180.0) {
            return Err(ShapeError::InvalidAngle { angle });
        }
        if angle == 90.0 {
            return Ok(Self::rounded_rect(bounds, 0.0, 1.0));
        }

        let d = match orientation {
            Orientation::Horizontal => bounds.height,
            Orientation::Vertical => bounds.width,
        };
        let offset = slant_offset(angle, d);
        debug!(angle, offset, "parallelogram shear");

        let (l, t, r, b) = (bounds.left(), bounds.top(), bounds.right(), bounds.bottom());
        let mut builder = OutlineBuilder::new();
        match (orientation, angle < 90.0) {
            (Orientation::Horizontal, true) => {
                builder.line(dvec2(l, t), dvec2(r - offset, t));
                builder.line(dvec2(r, b), dvec2(l + offset, b));
            }
            (Orientation::Horizontal, false) => {
                builder.line(dvec2(l + offset, t), dvec2(r, t));
                builder.line(dvec2(r - offset, b), dvec2(l, b));
            }
            (Orientation::Vertical, true) => {
                builder.line(dvec2(r, t + offset), dvec2(r, b));
                builder.line(dvec2(l, b - offset), dvec2(l, t));
            }
            (Orientation::Vertical, false) => {
                builder.line(dvec2(r, t), dvec2(r, b - offset));
                builder.line(dvec2(l, b), dvec2(l, t + offset));
            }
        }
        Ok(builder.close())
    }
}

/// Shear of the slanted side: `d / tan(sharp)`, where `sharp` is the acute
/// angle of the slant and `d` the bounds dimension perpendicular to it.
///
/// This is the canonical form of the two historical branch formulas
/// (`d * sin(90 - sharp) / sin(sharp)` computed per angle side); both reduce
/// to the same cotangent and the equivalence is pinned down in tests.
pub fn slant_offset(angle: f64, d: f64) -> f64 {
    let sharp = if angle < 90.0 { angle } else { 180.0 - angle };
    d / sharp.to_radians().tan()
}

/// Incremental outline assembly: consecutive segments whose endpoints do not
/// already touch get an implicit straight connecting edge, and `close` joins
/// the last point back to the first.
#[derive(Debug, Default)]
struct OutlineBuilder {
    segments: Vec<Segment>,
    first: Option<DVec2>,
    current: Option<DVec2>,
}

impl OutlineBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Insert a connecting edge if the pen is not already at `point`.
    fn connect_to(&mut self, point: DVec2) {
        if let Some(current) = self.current {
            if (current - point).length_squared() > CONNECT_EPSILON * CONNECT_EPSILON {
                self.segments.push(Segment::Line {
                    from: current,
                    to: point,
                });
            }
        }
        if self.first.is_none() {
            self.first = Some(point);
        }
    }

    fn line(&mut self, from: DVec2, to: DVec2) {
        self.connect_to(from);
        self.segments.push(Segment::Line { from, to });
        self.current = Some(to);
    }

    fn arc(&mut self, rect: Bounds, start: f64, sweep: f64) {
        self.connect_to(arc_point(rect, start));
        self.segments.push(Segment::Arc { rect, start, sweep });
        self.current = Some(arc_point(rect, start + sweep));
    }

    fn close(mut self) -> Outline {
        if let (Some(current), Some(first)) = (self.current, self.first) {
            if (current - first).length_squared() > CONNECT_EPSILON * CONNECT_EPSILON {
                self.segments.push(Segment::Line {
                    from: current,
                    to: first,
                });
            }
        }
        Outline {
            segments: self.segments,
        }
    }
}
