//! # Fixed Configuration
//!
//! Board constants and the mapping configuration. Nothing here is calibrated
//! at runtime: the firmware picks [`MappingConfig::DEFAULT`] at compile time.

/// Largest value a 12-bit ADC conversion produces.
pub const ADC_MAX: u16 = 4095;
/// Raw reading treated as the joystick's rest position.
pub const ADC_CENTER: u16 = 2048;
/// Lower edge of the rest band, inclusive.
pub const DEADZONE_MIN: u16 = 1850;
/// Upper edge of the rest band, inclusive.
pub const DEADZONE_MAX: u16 = 2000;

/// Edges closer together than this on the same button are contact bounce.
pub const DEBOUNCE_MS: u32 = 200;
/// Pause between main loop ticks.
pub const TICK_MS: u64 = 10;

pub const DISPLAY_WIDTH: u8 = 128;
pub const DISPLAY_HEIGHT: u8 = 64;
/// Edge length of the square that follows the joystick.
pub const SQUARE_SIZE: u8 = 8;

/// PWM wrap value the LED channels are configured with.
pub const PWM_MAX: u16 = 4095;

/// Which joystick axis feeds which LED and which display axis.
///
/// The vertical display coordinate is always inverted: pushing the stick up
/// raises the reading but the display's row index grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAssignment {
    /// X drives the blue LED and the vertical position; Y drives the red LED
    /// and the horizontal position.
    Crossed,
    /// X drives the red LED and the horizontal position; Y drives the blue LED
    /// and the vertical position.
    Straight,
}

/// Constants consumed by the mapping engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingConfig {
    pub center: u16,
    pub deadzone_min: u16,
    pub deadzone_max: u16,
    /// Intensity reached at full deflection; never exceeded.
    pub pwm_max: u16,
    pub display_width: u8,
    pub display_height: u8,
    pub square_size: u8,
    pub axes: AxisAssignment,
}

impl MappingConfig {
    /// Configuration the firmware runs with.
    pub const DEFAULT: Self = Self {
        center: ADC_CENTER,
        deadzone_min: DEADZONE_MIN,
        deadzone_max: DEADZONE_MAX,
        pwm_max: PWM_MAX,
        display_width: DISPLAY_WIDTH,
        display_height: DISPLAY_HEIGHT,
        square_size: SQUARE_SIZE,
        axes: AxisAssignment::Crossed,
    };

    /// Alternative wiring with a full 16-bit PWM range.
    pub const WIDE: Self = Self {
        pwm_max: u16::MAX,
        axes: AxisAssignment::Straight,
        ..Self::DEFAULT
    };

    /// Largest legal horizontal square origin.
    pub const fn x_span(&self) -> u8 {
        self.display_width.saturating_sub(self.square_size)
    }

    /// Largest legal vertical square origin.
    pub const fn y_span(&self) -> u8 {
        self.display_height.saturating_sub(self.square_size)
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
