//! Button configuration and press-and-repeat behavior.
//!
//! [`ButtonConfig`] is the long-lived state a host control keeps between
//! paints; geometry ([`crate::outline`]) and rendering
//! ([`crate::render::button`]) only ever read it. [`RepeatSchedule`] is the
//! press-and-hold repeat contract as a pure state machine: the host owns the
//! clock and the timer, this type only decides when a fire is due.

use std::time::Duration;

use crate::corner::CornerSet;
use crate::render::color::Rgb;
use crate::style::ButtonStyle;
use crate::types::Orientation;

/// Visual press state of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    Pressed,
}

/// Long-lived button configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    pub style: ButtonStyle,
    pub orientation: Orientation,
    pub button_color: Rgb,
    pub back_color: Rgb,
    pub caption: String,
    pub font_size: f64,
    pub state: ButtonState,
    pub repeat: RepeatSettings,
    pub(crate) corners: CornerSet,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            style: ButtonStyle::default(),
            orientation: Orientation::default(),
            button_color: Rgb::RED,
            back_color: Rgb::WHITE,
            caption: String::new(),
            font_size: 14.0,
            state: ButtonState::default(),
            repeat: RepeatSettings::default(),
            corners: CornerSet::default(),
        }
    }
}

impl ButtonConfig {
    pub fn corners(&self) -> CornerSet {
        self.corners
    }

    /// Apply a corner edit under the current style's update rule.
    ///
    /// Parallelogram styles run the angle-linking policy so the quadrilateral
    /// stays a parallelogram; rectangular styles take the new radii but pin
    /// every angle back to 90; round styles store the set verbatim (it has no
    /// effect on their geometry).
    pub fn set_corners(&mut self, incoming: CornerSet) {
        self.corners = match self.style {
            ButtonStyle::Parallelogram => {
                CornerSet::link_parallelogram_angles(&self.corners, &incoming)
            }
            ButtonStyle::Rectangular => incoming.reset_angles(),
            ButtonStyle::Circular | ButtonStyle::Elliptical => incoming,
        };
    }

    /// Replace the corner set without any style rule. Intended for
    /// deserialized state, not interactive edits.
    pub fn set_corners_raw(&mut self, corners: CornerSet) {
        self.corners = corners;
    }
}

/// Timing settings for press-and-hold repeat firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatSettings {
    pub enabled: bool,
    /// Delay before the first repeat fire after the press.
    pub start_delay: Duration,
    /// Steady interval between subsequent fires.
    pub interval: Duration,
}

impl Default for RepeatSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            start_delay: Duration::from_millis(500),
            interval: Duration::from_millis(100),
        }
    }
}

/// Pure press-and-hold repeat state machine.
///
/// The host reports presses and releases with its own monotonic clock value
/// and polls on timer ticks; no timers or threads live here, so the schedule
/// is a pure function of the reported events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepeatSchedule {
    next_fire: Option<Duration>,
}

impl RepeatSchedule {
    /// Arm the first fire at `now + start_delay`. Does nothing when repeat
    /// is disabled.
    pub fn press(&mut self, settings: &RepeatSettings, now: Duration) {
        if settings.enabled {
            self.next_fire = Some(now + settings.start_delay);
        }
    }

    /// Disarm immediately; a due-but-unpolled fire is dropped.
    pub fn release(&mut self) {
        self.next_fire = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    /// True when a repeat fire is due at `now`; re-arms the next fire at the
    /// steady interval.
    pub fn poll(&mut self, settings: &RepeatSettings, now: Duration) -> bool {
        match self.next_fire {
            Some(due) if now >= due => {
                self.next_fire = Some(now + settings.interval);
                true
            }
            _ => false,
        }
    }
}
