//! # Debounced Button Events
//!
//! Falling edges from the two buttons arrive in interrupt context together
//! with a millisecond timestamp. An edge that survives its button's debounce
//! window commits that button's toggle transition; a bounced edge has no
//! effect at all.
//!
//! Nothing here blocks, allocates or loops unboundedly, so [`EdgeHandler::on_edge`]
//! is safe to call from an interrupt handler or a high-priority executor.

use embedded_hal::digital::{OutputPin, PinState};

use crate::border::BorderCycle;
use crate::config::DEBOUNCE_MS;
use crate::debounce::DebounceTimer;
use crate::io::PwmActuator;
use crate::state::{ToggleState, Toggles};

/// The two edge-triggered inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Enables and disables the PWM LEDs.
    A,
    /// Joystick push switch: flips the auxiliary LED and advances the border.
    Joystick,
}

/// What became of one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// The edge was taken; carries the flags right after its transition.
    Accepted(Toggles),
    /// The edge fell inside the debounce window and was ignored.
    Suppressed,
}

impl EdgeOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, EdgeOutcome::Accepted(_))
    }
}

/// Everything edge handlers write and the main loop reads: the toggle flags
/// and one debounce timer per button.
///
/// Meant to live in a `static` and be shared by reference.
pub struct ControlState {
    toggles: ToggleState,
    button_a: DebounceTimer,
    joystick: DebounceTimer,
}

impl ControlState {
    pub const fn new(cycle: &'static BorderCycle) -> Self {
        Self::with_window(cycle, DEBOUNCE_MS)
    }

    pub const fn with_window(cycle: &'static BorderCycle, window_ms: u32) -> Self {
        Self {
            toggles: ToggleState::new(cycle),
            button_a: DebounceTimer::new(window_ms),
            joystick: DebounceTimer::new(window_ms),
        }
    }

    /// Consistent copy of the toggle flags.
    pub fn toggles(&self) -> Toggles {
        self.toggles.snapshot()
    }

    pub fn border_cycle(&self) -> &'static BorderCycle {
        self.toggles.cycle()
    }

    fn timer(&self, button: Button) -> &DebounceTimer {
        match button {
            Button::A => &self.button_a,
            Button::Joystick => &self.joystick,
        }
    }

    /// Debounces one edge and, if accepted, applies its state transition.
    ///
    /// Only flags change here; see [`EdgeHandler`] for the outputs that go
    /// with them.
    pub fn on_edge(&self, button: Button, now_ms: u32) -> EdgeOutcome {
        if !self.timer(button).try_accept(now_ms) {
            return EdgeOutcome::Suppressed;
        }
        let toggles = match button {
            Button::A => self.toggles.toggle_leds(),
            Button::Joystick => self.toggles.toggle_aux_and_advance(),
        };
        EdgeOutcome::Accepted(toggles)
    }
}

/// The edge handler registered against both button lines.
///
/// Besides updating [`ControlState`], an accepted edge acts immediately:
/// the joystick button drives the auxiliary LED to its new level, and
/// disabling the LEDs with button A darkens both PWM channels without waiting
/// for the next tick.
pub struct EdgeHandler<'a, P, D> {
    state: &'a ControlState,
    leds: P,
    aux_led: D,
}

impl<'a, P, D> EdgeHandler<'a, P, D>
where
    P: PwmActuator,
    D: OutputPin,
{
    pub fn new(state: &'a ControlState, leds: P, aux_led: D) -> Self {
        Self {
            state,
            leds,
            aux_led,
        }
    }

    pub fn on_edge(&mut self, button: Button, now_ms: u32) -> EdgeOutcome {
        let outcome = self.state.on_edge(button, now_ms);
        if let EdgeOutcome::Accepted(toggles) = outcome {
            match button {
                Button::Joystick => {
                    // An edge handler has nowhere to report a failed pin
                    // write; the next accepted edge drives the pin again.
                    let _ = self.aux_led.set_state(PinState::from(toggles.aux_led_on));
                }
                Button::A if !toggles.leds_enabled => self.leds.all_off(),
                Button::A => {}
            }
        }
        outcome
    }

    /// Hands back the collaborators.
    pub fn release(self) -> (P, D) {
        (self.leds, self.aux_led)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::{STYLES, THICKNESS};

    #[test]
    fn double_press_within_window_counts_once() {
        let state = ControlState::new(&THICKNESS);
        assert!(state.on_edge(Button::Joystick, 1_000).is_accepted());
        assert_eq!(
            state.on_edge(Button::Joystick, 1_050),
            EdgeOutcome::Suppressed
        );
        assert_eq!(state.toggles().border, 1);
        assert!(state.toggles().aux_led_on);
    }

    #[test]
    fn spaced_presses_are_both_accepted() {
        let state = ControlState::new(&THICKNESS);
        assert!(state.on_edge(Button::A, 1_000).is_accepted());
        assert!(state.on_edge(Button::A, 1_201).is_accepted());
        assert!(state.toggles().leds_enabled);
    }

    #[test]
    fn buttons_debounce_independently() {
        let state = ControlState::new(&STYLES);
        assert!(state.on_edge(Button::A, 1_000).is_accepted());
        assert!(state.on_edge(Button::Joystick, 1_010).is_accepted());
        assert_eq!(
            state.toggles(),
            Toggles {
                leds_enabled: false,
                aux_led_on: true,
                border: 1,
            }
        );
    }

    #[test]
    fn suppressed_edge_leaves_state_alone() {
        let state = ControlState::new(&STYLES);
        let before = state.toggles();
        assert_eq!(state.on_edge(Button::A, 10), EdgeOutcome::Suppressed);
        assert_eq!(state.toggles(), before);
    }

    #[test]
    fn accepted_outcome_reports_new_flags() {
        let state = ControlState::new(&THICKNESS);
        let outcome = state.on_edge(Button::A, 500);
        assert_eq!(outcome, EdgeOutcome::Accepted(state.toggles()));
    }
}
