//! # Collaborator Interfaces
//!
//! The core never touches a register. Each tick it drives LEDs through a
//! [`PwmActuator`] and draws through a [`Renderer`]; the auxiliary LED is any
//! [`embedded_hal::digital::OutputPin`].

/// The two PWM-dimmed LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedChannel {
    Red,
    Blue,
}

impl LedChannel {
    pub const ALL: [LedChannel; 2] = [LedChannel::Red, LedChannel::Blue];

    /// Hardware channel index on the PWM peripheral.
    pub const fn index(self) -> usize {
        match self {
            LedChannel::Red => 0,
            LedChannel::Blue => 1,
        }
    }

    /// Inverse of [`LedChannel::index`].
    ///
    /// # Panics
    ///
    /// Only channels 0 and 1 are wired; anything else is a wiring bug.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => LedChannel::Red,
            1 => LedChannel::Blue,
            _ => unreachable!("no LED on PWM channel {}", index),
        }
    }
}

/// Fire-and-forget PWM output.
pub trait PwmActuator {
    /// Sets the duty level of one channel, in `[0, channel maximum]`.
    fn set_level(&mut self, channel: LedChannel, intensity: u16);

    /// Turns both channels off.
    fn all_off(&mut self) {
        for channel in LedChannel::ALL {
            self.set_level(channel, 0);
        }
    }
}

impl<P: PwmActuator + ?Sized> PwmActuator for &mut P {
    fn set_level(&mut self, channel: LedChannel, intensity: u16) {
        (**self).set_level(channel, intensity);
    }
}

/// Compare value that lights an active-high LED at `intensity` out of `max`
/// on a PWM whose output stays low for the compare count.
///
/// Intensity 0 gives `max` (pin low all period), `max` gives 0.
pub const fn inverted_duty(intensity: u16, max: u16) -> u16 {
    let intensity = if intensity > max { max } else { intensity };
    max - intensity
}

/// Axis-aligned rectangle in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u8,
    pub y: u8,
    pub width: u8,
    pub height: u8,
}

impl Rect {
    pub const fn new(x: u8, y: u8, width: u8, height: u8) -> Self {
        Self { x, y, width, height }
    }
}

/// Frame-buffered monochrome display.
///
/// The core calls these in the fixed order clear, square, border outlines,
/// present, once per tick. Pixel memory and transmission belong to the
/// implementation.
pub trait Renderer {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect);
    fn outline_rect(&mut self, rect: Rect);
    fn present(&mut self);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn fill_rect(&mut self, rect: Rect) {
        (**self).fill_rect(rect);
    }

    fn outline_rect(&mut self, rect: Rect) {
        (**self).outline_rect(rect);
    }

    fn present(&mut self) {
        (**self).present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_index_round_trips() {
        for channel in LedChannel::ALL {
            assert_eq!(LedChannel::from_index(channel.index()), channel);
        }
    }

    #[test]
    #[should_panic(expected = "no LED on PWM channel 2")]
    fn unknown_channel_is_fatal() {
        LedChannel::from_index(2);
    }

    #[test]
    fn dark_led_gets_full_compare_value() {
        assert_eq!(inverted_duty(0, 4095), 4095);
        assert_eq!(inverted_duty(4095, 4095), 0);
        assert_eq!(inverted_duty(1000, 4095), 3095);
    }

    #[test]
    fn overdriven_intensity_saturates_at_full_on() {
        assert_eq!(inverted_duty(u16::MAX, 4095), 0);
    }

    #[test]
    fn all_off_zeroes_both_channels() {
        struct Levels([u16; 2]);
        impl PwmActuator for Levels {
            fn set_level(&mut self, channel: LedChannel, intensity: u16) {
                self.0[channel.index()] = intensity;
            }
        }

        let mut levels = Levels([100, 200]);
        levels.all_off();
        assert_eq!(levels.0, [0, 0]);
    }
}
