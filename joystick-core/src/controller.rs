//! # Main Loop Tick
//!
//! One pass of the control loop minus the sampling and the pause, which are
//! the firmware's business:
//!
//! 1. snapshot the toggle flags (one atomic load)
//! 2. map the sample
//! 3. drive both PWM channels
//! 4. clear, draw the square, draw the border outlines, present

use crate::config::MappingConfig;
use crate::events::ControlState;
use crate::io::{LedChannel, PwmActuator, Rect, Renderer};
use crate::mapping::{AnalogSample, MappedOutput};
use crate::state::Toggles;

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Flags the tick was computed under.
    pub toggles: Toggles,
    /// Output as actuated; LED levels are zero if an edge disabled the LEDs
    /// mid-tick.
    pub output: MappedOutput,
}

/// Drives LEDs and display from joystick samples.
pub struct Controller<'a, P, R> {
    state: &'a ControlState,
    config: MappingConfig,
    leds: P,
    renderer: R,
}

impl<'a, P, R> Controller<'a, P, R>
where
    P: PwmActuator,
    R: Renderer,
{
    pub fn new(state: &'a ControlState, config: MappingConfig, leds: P, renderer: R) -> Self {
        Self {
            state,
            config,
            leds,
            renderer,
        }
    }

    pub fn tick(&mut self, sample: AnalogSample) -> TickReport {
        let toggles = self.state.toggles();
        let mut output = self.config.map(sample, toggles);

        self.leds.set_level(LedChannel::Red, output.leds.red);
        self.leds.set_level(LedChannel::Blue, output.leds.blue);
        // Button A may have darkened the LEDs between the snapshot and the
        // writes above; don't let a stale level win.
        if toggles.leds_enabled && !self.state.toggles().leds_enabled {
            self.leds.all_off();
            output.leds = Default::default();
        }

        self.render(&output, toggles.border);
        TickReport { toggles, output }
    }

    fn render(&mut self, output: &MappedOutput, border: u8) {
        let cfg = &self.config;
        let size = cfg.square_size;

        self.renderer.clear();
        self.renderer
            .fill_rect(Rect::new(output.square.x, output.square.y, size, size));
        for outline in self
            .state
            .border_cycle()
            .outlines(border, cfg.display_width, cfg.display_height)
        {
            self.renderer.outline_rect(outline);
        }
        self.renderer.present();
    }

    /// Clears the display and darkens both LEDs; run once before the loop.
    pub fn blank(&mut self) {
        self.leds.all_off();
        self.renderer.clear();
        self.renderer.present();
    }
}
