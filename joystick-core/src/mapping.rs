//! # Mapping Engine
//!
//! Pure integer mapping from one joystick sample to LED intensities and the
//! square's top-left corner.
//!
//! ## LEDs
//!
//! A reading inside the rest band `[deadzone_min, deadzone_max]` yields 0.
//! Outside it the deflection `|sample - center|` is scaled linearly so that
//! full travel on either side reaches exactly `pwm_max`:
//!
//! ```text
//! intensity = min(deflection * pwm_max / (ADC_MAX - center), pwm_max)
//! ```
//!
//! ## Square
//!
//! Each axis maps `[0, ADC_MAX]` onto `[0, span]` with truncating division,
//! `span` being the display extent minus the square size. The vertical
//! coordinate is then inverted, `span - coordinate`, to undo the stick's
//! physical orientation.
//!
//! Intermediate products stay below `4095 * 65535`, well within `u32`.

use crate::config::{AxisAssignment, MappingConfig, ADC_MAX};
use crate::state::Toggles;

/// One reading of both joystick axes, each in `[0, ADC_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalogSample {
    pub x: u16,
    pub y: u16,
}

impl AnalogSample {
    /// Clamps both readings into the ADC range.
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x: x.min(ADC_MAX),
            y: y.min(ADC_MAX),
        }
    }
}

/// PWM levels for the two dimmable LEDs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedLevels {
    pub red: u16,
    pub blue: u16,
}

/// Top-left corner of the square, always leaving the whole square on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareOrigin {
    pub x: u8,
    pub y: u8,
}

/// Everything one tick actuates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappedOutput {
    pub leds: LedLevels,
    pub square: SquareOrigin,
}

impl MappingConfig {
    /// Whether `sample` lies in the rest band.
    pub fn in_deadzone(&self, sample: u16) -> bool {
        (self.deadzone_min..=self.deadzone_max).contains(&sample)
    }

    /// LED intensity for one axis.
    pub fn intensity(&self, sample: u16, leds_enabled: bool) -> u16 {
        if !leds_enabled || self.in_deadzone(sample) {
            return 0;
        }
        let sample = sample.min(ADC_MAX);
        let deflection = u32::from(sample.abs_diff(self.center));
        let full_travel = u32::from(ADC_MAX.saturating_sub(self.center).max(1));
        let pwm_max = u32::from(self.pwm_max);
        (deflection * pwm_max / full_travel).min(pwm_max) as u16
    }

    /// Square position along the display axis whose legal range is `[0, span]`.
    pub fn coordinate(sample: u16, span: u8) -> u8 {
        let scaled = u32::from(sample.min(ADC_MAX)) * u32::from(span) / u32::from(ADC_MAX);
        scaled.min(u32::from(span)) as u8
    }

    /// Same as [`MappingConfig::coordinate`], mirrored.
    pub fn inverted_coordinate(sample: u16, span: u8) -> u8 {
        span - Self::coordinate(sample, span)
    }

    /// Maps one sample under the given flags.
    pub fn map(&self, sample: AnalogSample, toggles: Toggles) -> MappedOutput {
        let enabled = toggles.leds_enabled;
        let (x_span, y_span) = (self.x_span(), self.y_span());
        match self.axes {
            AxisAssignment::Crossed => MappedOutput {
                leds: LedLevels {
                    red: self.intensity(sample.y, enabled),
                    blue: self.intensity(sample.x, enabled),
                },
                square: SquareOrigin {
                    x: Self::coordinate(sample.y, x_span),
                    y: Self::inverted_coordinate(sample.x, y_span),
                },
            },
            AxisAssignment::Straight => MappedOutput {
                leds: LedLevels {
                    red: self.intensity(sample.x, enabled),
                    blue: self.intensity(sample.y, enabled),
                },
                square: SquareOrigin {
                    x: Self::coordinate(sample.x, x_span),
                    y: Self::inverted_coordinate(sample.y, y_span),
                },
            },
        }
    }
}
