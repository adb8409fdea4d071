//! Error types with diagnostics using miette.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Shape construction / draw errors
// ============================================================================

/// Errors raised while constructing shape outlines or drawing a button body.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The parallelogram slant angle is degenerate: `sin(0)` would produce an
    /// infinite shear offset, so the angle is rejected before any trig runs.
    #[error("degenerate parallelogram angle: {angle}")]
    #[diagnostic(
        code(cornerwise::shape::invalid_angle),
        help("the slant angle must lie strictly between 0 and 180 degrees")
    )]
    InvalidAngle { angle: f64 },

    /// The four corner angles do not close a quadrilateral. The shape must
    /// not render with wrong geometry, so the paint call fails instead.
    #[error("corner angles sum to {sum} degrees, expected exactly 360")]
    #[diagnostic(
        code(cornerwise::shape::invalid_corner_configuration),
        help("adjust the corner angles so they sum to 360 degrees")
    )]
    InvalidCornerConfiguration { sum: i32 },
}

// ============================================================================
// Serialized-form parse errors
// ============================================================================

/// Errors from parsing the `"[angle:radius]"` corner text form. Parsing is
/// all-or-nothing; a malformed token fails the whole value.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum CornerParseError {
    #[error("malformed corner {text:?}, expected \"[angle:radius]\"")]
    #[diagnostic(code(cornerwise::parse::malformed_corner))]
    MalformedCorner { text: String },

    #[error("expected 4 corners separated by ';', found {found}")]
    #[diagnostic(code(cornerwise::parse::missing_corners))]
    MissingCorners { found: usize },

    #[error("corner field is not an integer: {field:?}")]
    #[diagnostic(code(cornerwise::parse::invalid_field))]
    InvalidField { field: String },
}
