//! # Toggle State
//!
//! Flags flipped by button edges and read once per tick by the main loop.
//!
//! All three fields live in a single atomic word. The edge handler commits a
//! whole transition with one compare-and-swap and the main loop takes one
//! load per tick, so the loop can never observe the auxiliary LED flipped
//! without the matching border advance. No lock is ever taken.

use core::sync::atomic::{AtomicU16, Ordering};

use crate::border::BorderCycle;

const LEDS_ENABLED: u16 = 1 << 0;
const AUX_LED_ON: u16 = 1 << 1;
const BORDER_SHIFT: u16 = 8;

/// A consistent copy of the toggle flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    /// PWM LEDs follow the joystick when set; forced dark otherwise.
    pub leds_enabled: bool,
    /// Level of the auxiliary (green) LED.
    pub aux_led_on: bool,
    /// Position in the border cycle.
    pub border: u8,
}

impl Toggles {
    /// Power-on flags: LEDs enabled, auxiliary LED off, first border state.
    pub const INITIAL: Self = Self {
        leds_enabled: true,
        aux_led_on: false,
        border: 0,
    };

    const fn pack(self) -> u16 {
        let mut word = (self.border as u16) << BORDER_SHIFT;
        if self.leds_enabled {
            word |= LEDS_ENABLED;
        }
        if self.aux_led_on {
            word |= AUX_LED_ON;
        }
        word
    }

    const fn unpack(word: u16) -> Self {
        Self {
            leds_enabled: word & LEDS_ENABLED != 0,
            aux_led_on: word & AUX_LED_ON != 0,
            border: (word >> BORDER_SHIFT) as u8,
        }
    }
}

impl Default for Toggles {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Process-lifetime toggle flags shared between edge and loop contexts.
///
/// Writers are the transition methods, called only from the edge handler.
pub struct ToggleState {
    word: AtomicU16,
    cycle: &'static BorderCycle,
}

impl ToggleState {
    pub const fn new(cycle: &'static BorderCycle) -> Self {
        Self {
            word: AtomicU16::new(Toggles::INITIAL.pack()),
            cycle,
        }
    }

    /// The border cycle the `border` field indexes into.
    pub fn cycle(&self) -> &'static BorderCycle {
        self.cycle
    }

    /// One atomic read of all flags.
    pub fn snapshot(&self) -> Toggles {
        Toggles::unpack(self.word.load(Ordering::Acquire))
    }

    /// Flips whether the PWM LEDs are enabled, returning the new flags.
    pub fn toggle_leds(&self) -> Toggles {
        self.update(|t| Toggles {
            leds_enabled: !t.leds_enabled,
            ..t
        })
    }

    /// Flips the auxiliary LED and advances the border, as one transition.
    pub fn toggle_aux_and_advance(&self) -> Toggles {
        let cycle = self.cycle;
        self.update(|t| Toggles {
            aux_led_on: !t.aux_led_on,
            border: cycle.next(t.border),
            ..t
        })
    }

    fn update(&self, f: impl Fn(Toggles) -> Toggles) -> Toggles {
        let previous = self
            .word
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |word| {
                Some(f(Toggles::unpack(word)).pack())
            });
        // The closure never declines, so both arms carry the prior word.
        let (Ok(word) | Err(word)) = previous;
        f(Toggles::unpack(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::{STYLES, THICKNESS};

    #[test]
    fn starts_enabled_dark_at_first_border() {
        let state = ToggleState::new(&THICKNESS);
        assert_eq!(state.snapshot(), Toggles::INITIAL);
        assert_eq!(state.cycle().style(state.snapshot().border).param, 2);
    }

    #[test]
    fn pack_keeps_every_field() {
        let toggles = Toggles {
            leds_enabled: false,
            aux_led_on: true,
            border: 2,
        };
        assert_eq!(Toggles::unpack(toggles.pack()), toggles);
    }

    #[test]
    fn led_toggle_touches_only_its_flag() {
        let state = ToggleState::new(&STYLES);
        let after = state.toggle_leds();
        assert_eq!(
            after,
            Toggles {
                leds_enabled: false,
                ..Toggles::INITIAL
            }
        );
        assert_eq!(state.snapshot(), after);
        assert!(state.toggle_leds().leds_enabled);
    }

    #[test]
    fn full_cycle_returns_border_to_start() {
        let state = ToggleState::new(&STYLES);
        let mut aux = state.snapshot().aux_led_on;
        for _ in 0..STYLES.len() {
            let after = state.toggle_aux_and_advance();
            assert_ne!(after.aux_led_on, aux);
            aux = after.aux_led_on;
            assert!(after.border < STYLES.len());
        }
        assert_eq!(state.snapshot().border, 0);
    }
}
