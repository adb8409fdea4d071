//! Per-corner angle/radius configuration for quadrilateral button shapes.
//!
//! A [`Corner`] pairs an angle in whole degrees with a rounding radius in
//! drawing units. A [`CornerSet`] holds the four corners of a quadrilateral
//! and is an immutable value type: every editing operation returns a new set,
//! so two sets can never alias the same corner storage.

use std::fmt;
use std::str::FromStr;

use crate::errors::{CornerParseError, ShapeError};

/// Default corner angle (square corner).
pub const DEFAULT_ANGLE: i32 = 90;
/// Default corner radius (no rounding).
pub const DEFAULT_RADIUS: i32 = 0;

/// One corner: an angle in degrees and a rounding radius in drawing units.
///
/// Out-of-range construction inputs clamp rather than error: a corner is
/// plain configuration and always stays representable. Non-positive angles
/// fall back to the 90 degree default, negative radii to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner {
    angle: i32,
    radius: i32,
}

impl Corner {
    pub fn new(angle: i32, radius: i32) -> Self {
        Self {
            angle: if angle > 0 { angle } else { DEFAULT_ANGLE },
            radius: radius.max(0),
        }
    }

    pub fn angle(&self) -> i32 {
        self.angle
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn with_angle(self, angle: i32) -> Self {
        Self::new(angle, self.radius)
    }

    pub fn with_radius(self, radius: i32) -> Self {
        Self::new(self.angle, radius)
    }
}

impl Default for Corner {
    fn default() -> Self {
        Self {
            angle: DEFAULT_ANGLE,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.angle, self.radius)
    }
}

impl FromStr for Corner {
    type Err = CornerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.trim().replace(['[', ']'], "");
        let fields: Vec<&str> = stripped.split(':').collect();
        if fields.len() < 2 {
            return Err(CornerParseError::MalformedCorner {
                text: s.to_string(),
            });
        }
        let angle = parse_field(fields[0])?;
        let radius = parse_field(fields[1])?;
        Ok(Corner::new(angle, radius))
    }
}

fn parse_field(field: &str) -> Result<i32, CornerParseError> {
    field
        .trim()
        .parse()
        .map_err(|_| CornerParseError::InvalidField {
            field: field.to_string(),
        })
}

/// The four corners of a quadrilateral, ordered top-left, top-right,
/// bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CornerSet {
    pub top_left: Corner,
    pub top_right: Corner,
    pub bottom_right: Corner,
    pub bottom_left: Corner,
}

impl CornerSet {
    pub fn new(top_left: Corner, top_right: Corner, bottom_right: Corner, bottom_left: Corner) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// All four corners set to the same value.
    pub fn uniform(corner: Corner) -> Self {
        Self::new(corner, corner, corner, corner)
    }

    pub fn angle_sum(&self) -> i32 {
        self.top_left.angle
            + self.top_right.angle
            + self.bottom_right.angle
            + self.bottom_left.angle
    }

    /// True iff the four corner angles close a quadrilateral (sum exactly
    /// 360 degrees).
    pub fn is_valid(&self) -> bool {
        self.angle_sum() == 360
    }

    /// Precondition gate used by draw paths. A violating set must surface a
    /// configuration error rather than render with wrong geometry.
    pub fn ensure_valid(&self) -> Result<(), ShapeError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ShapeError::InvalidCornerConfiguration {
                sum: self.angle_sum(),
            })
        }
    }

    /// All angles back to 90 degrees, radii kept.
    pub fn reset_angles(self) -> Self {
        Self {
            top_left: self.top_left.with_angle(DEFAULT_ANGLE),
            top_right: self.top_right.with_angle(DEFAULT_ANGLE),
            bottom_right: self.bottom_right.with_angle(DEFAULT_ANGLE),
            bottom_left: self.bottom_left.with_angle(DEFAULT_ANGLE),
        }
    }

    /// All radii back to zero, angles kept.
    pub fn reset_radii(self) -> Self {
        Self {
            top_left: self.top_left.with_radius(DEFAULT_RADIUS),
            top_right: self.top_right.with_radius(DEFAULT_RADIUS),
            bottom_right: self.bottom_right.with_radius(DEFAULT_RADIUS),
            bottom_left: self.bottom_left.with_radius(DEFAULT_RADIUS),
        }
    }

    /// Derived-state update rule for parallelogram-styled shapes.
    ///
    /// Exactly one angle is the independent variable per edit: the edited
    /// corner is the first angle field of `incoming` that differs from
    /// `previous`, checked in order top-left, top-right, bottom-right,
    /// bottom-left. The opposite corner mirrors the edited angle and the two
    /// adjacent corners take `180 - edited`, keeping the 360 degree sum.
    /// Radii are copied verbatim from `incoming`.
    ///
    /// When no angle differs the incoming set is returned unchanged, so
    /// re-applying the rule to its own output is a no-op.
    pub fn link_parallelogram_angles(previous: &CornerSet, incoming: &CornerSet) -> CornerSet {
        // The linked set is fully determined by the top-left angle; express
        // whichever corner was edited in those terms.
        let lead = if incoming.top_left.angle != previous.top_left.angle {
            incoming.top_left.angle
        } else if incoming.top_right.angle != previous.top_right.angle {
            180 - incoming.top_right.angle
        } else if incoming.bottom_right.angle != previous.bottom_right.angle {
            incoming.bottom_right.angle
        } else if incoming.bottom_left.angle != previous.bottom_left.angle {
            180 - incoming.bottom_left.angle
        } else {
            return *incoming;
        };

        CornerSet {
            top_left: incoming.top_left.with_angle(lead),
            top_right: incoming.top_right.with_angle(180 - lead),
            bottom_right: incoming.bottom_right.with_angle(lead),
            bottom_left: incoming.bottom_left.with_angle(180 - lead),
        }
    }
}

impl fmt::Display for CornerSet {
    /// Serialized text form: four `[angle:radius]` tokens joined by `;` in
    /// order top-left, top-right, bottom-left, bottom-right.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{}",
            self.top_left, self.top_right, self.bottom_left, self.bottom_right
        )
    }
}

impl FromStr for CornerSet {
    type Err = CornerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(';').collect();
        if tokens.len() < 4 {
            return Err(CornerParseError::MissingCorners {
                found: tokens.len(),
            });
        }
        Ok(CornerSet {
            top_left: tokens[0].parse()?,
            top_right: tokens[1].parse()?,
            bottom_left: tokens[2].parse()?,
            bottom_right: tokens[3].parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_defaults_and_clamping() {
        assert_eq!(Corner::default(), Corner::new(90, 0));
        // Non-positive angle falls back to the default, negative radius to 0.
        assert_eq!(Corner::new(-45, -3), Corner::new(90, 0));
        assert_eq!(Corner::new(0, 5).angle(), 90);
        assert_eq!(Corner::new(60, 5), Corner::new(60, 5));
    }

    #[test]
    fn validator_requires_exact_360() {
        let square = CornerSet::default();
        assert_eq!(square.angle_sum(), 360);
        assert!(square.is_valid());
        assert!(square.ensure_valid().is_ok());

        // Perturbing any single angle breaks the sum.
        let mut perturbed = square;
        perturbed.top_left = perturbed.top_left.with_angle(91);
        assert!(!perturbed.is_valid());
        assert_eq!(
            perturbed.ensure_valid(),
            Err(ShapeError::InvalidCornerConfiguration { sum: 361 })
        );

        let mut perturbed = square;
        perturbed.bottom_left = perturbed.bottom_left.with_angle(89);
        assert!(!perturbed.is_valid());
    }

    #[test]
    fn skewed_but_closed_set_is_valid() {
        let set = CornerSet::new(
            Corner::new(60, 0),
            Corner::new(120, 0),
            Corner::new(60, 0),
            Corner::new(120, 0),
        );
        assert!(set.is_valid());
    }

    #[test]
    fn linking_mirrors_opposite_and_complements_adjacent() {
        let previous = CornerSet::default();
        let mut incoming = previous;
        incoming.top_left = incoming.top_left.with_angle(60);

        let linked = CornerSet::link_parallelogram_angles(&previous, &incoming);
        assert_eq!(linked.top_left.angle(), 60);
        assert_eq!(linked.bottom_right.angle(), 60);
        assert_eq!(linked.top_right.angle(), 120);
        assert_eq!(linked.bottom_left.angle(), 120);
        assert!(linked.is_valid());
    }

    #[test]
    fn linking_each_corner_in_priority_order() {
        let previous = CornerSet::default();

        let mut edit = previous;
        edit.top_right = edit.top_right.with_angle(130);
        let linked = CornerSet::link_parallelogram_angles(&previous, &edit);
        assert_eq!(linked.top_right.angle(), 130);
        assert_eq!(linked.bottom_left.angle(), 130);
        assert_eq!(linked.top_left.angle(), 50);
        assert_eq!(linked.bottom_right.angle(), 50);

        let mut edit = previous;
        edit.bottom_right = edit.bottom_right.with_angle(75);
        let linked = CornerSet::link_parallelogram_angles(&previous, &edit);
        assert_eq!(linked.bottom_right.angle(), 75);
        assert_eq!(linked.top_left.angle(), 75);
        assert_eq!(linked.top_right.angle(), 105);

        let mut edit = previous;
        edit.bottom_left = edit.bottom_left.with_angle(100);
        let linked = CornerSet::link_parallelogram_angles(&previous, &edit);
        assert_eq!(linked.bottom_left.angle(), 100);
        assert_eq!(linked.top_right.angle(), 100);
        assert_eq!(linked.top_left.angle(), 80);
    }

    #[test]
    fn linking_copies_radii_verbatim() {
        let previous = CornerSet::default();
        let mut incoming = CornerSet::new(
            Corner::new(90, 1),
            Corner::new(90, 2),
            Corner::new(90, 3),
            Corner::new(90, 4),
        );
        incoming.top_left = incoming.top_left.with_angle(70);

        let linked = CornerSet::link_parallelogram_angles(&previous, &incoming);
        assert_eq!(linked.top_left.radius(), 1);
        assert_eq!(linked.top_right.radius(), 2);
        assert_eq!(linked.bottom_right.radius(), 3);
        assert_eq!(linked.bottom_left.radius(), 4);
    }

    #[test]
    fn linking_is_idempotent() {
        let previous = CornerSet::default();
        let mut incoming = previous;
        incoming.top_left = incoming.top_left.with_angle(60);

        let once = CornerSet::link_parallelogram_angles(&previous, &incoming);
        let twice = CornerSet::link_parallelogram_angles(&once, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn corner_round_trip() {
        let corner = Corner::new(120, 15);
        assert_eq!(corner.to_string(), "[120:15]");
        assert_eq!("[120:15]".parse::<Corner>().unwrap(), corner);
    }

    #[test]
    fn corner_set_round_trip() {
        let set = CornerSet::new(
            Corner::new(60, 1),
            Corner::new(120, 2),
            Corner::new(60, 3),
            Corner::new(120, 4),
        );
        let text = set.to_string();
        assert_eq!(text, "[60:1];[120:2];[120:4];[60:3]");
        assert_eq!(text.parse::<CornerSet>().unwrap(), set);
    }

    #[test]
    fn parse_rejects_missing_tokens() {
        assert_eq!(
            "[90:0];[90:0];[90:0]".parse::<CornerSet>(),
            Err(CornerParseError::MissingCorners { found: 3 })
        );
        assert_eq!(
            "[90]".parse::<Corner>(),
            Err(CornerParseError::MalformedCorner {
                text: "[90]".to_string()
            })
        );
    }

    #[test]
    fn parse_rejects_non_integer_fields() {
        assert_eq!(
            "[90.5:0]".parse::<Corner>(),
            Err(CornerParseError::InvalidField {
                field: "90.5".to_string()
            })
        );
        assert!("[90:a];[90:0];[90:0];[90:0]".parse::<CornerSet>().is_err());
    }
}
