//! Button styles and the style-keyed configuration-visibility map.

/// Shape family drawn for the button body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    /// Ellipse constrained to a square (the control clamps itself square).
    Circular,
    Elliptical,
    Parallelogram,
    #[default]
    Rectangular,
}

/// Configuration fields whose visibility on an editing surface depends on the
/// current style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigProperty {
    Corners,
    Orientation,
    /// The top-left corner entry inside the corner set. Hidden for
    /// parallelograms, where it is the derived lead angle rather than a
    /// free-form field.
    TopLeftCorner,
}

impl ButtonStyle {
    /// Whether an editing surface should expose `property` for this style.
    ///
    /// This is an explicit capability map: round styles have no corner or
    /// orientation settings, rectangles have corners but a fixed orientation,
    /// and parallelograms expose both but derive the top-left angle.
    pub fn shows(self, property: ConfigProperty) -> bool {
        match (self, property) {
            (ButtonStyle::Circular | ButtonStyle::Elliptical, _) => false,
            (ButtonStyle::Parallelogram, ConfigProperty::Corners) => true,
            (ButtonStyle::Parallelogram, ConfigProperty::Orientation) => true,
            (ButtonStyle::Parallelogram, ConfigProperty::TopLeftCorner) => false,
            (ButtonStyle::Rectangular, ConfigProperty::Corners) => true,
            (ButtonStyle::Rectangular, ConfigProperty::Orientation) => false,
            (ButtonStyle::Rectangular, ConfigProperty::TopLeftCorner) => true,
        }
    }
}
