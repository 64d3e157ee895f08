//! # User Interface Module
//!
//! The main sampling loop: every [`TICK_MS`] milliseconds read the joystick,
//! run one controller tick (LEDs, then a fresh frame on the OLED) and report
//! any toggle change made by the buttons since the previous tick.
//!
//! ## Control Scheme
//!
//! - **Joystick X**: blue LED intensity and vertical square position
//! - **Joystick Y**: red LED intensity and horizontal square position
//! - **Button A**: LEDs on/off
//! - **Joystick button (B)**: green LED on/off, border 2 <-> 4 pixels
use crate::*;

/// Main loop controller type: shared PWM LEDs and the OLED screen.
pub type JoystickController = Controller<'static, Leds, Screen>;

/// Owns the joystick and the per-tick controller.
pub struct Ui {
    joystick: Joystick,
    controller: JoystickController,
    /// Flags as of the previous tick, for change reporting.
    shown: Toggles,
}

impl Ui {
    pub fn new(joystick: Joystick, controller: JoystickController) -> Self {
        Self {
            joystick,
            controller,
            shown: CONTROL.toggles(),
        }
    }

    /// Prints the toggle flags to the debug console.
    ///
    /// # Output Format
    ///
    /// ```text
    /// leds: on
    /// green: off
    /// border: 2
    /// ```
    fn show(&self) {
        let on_off = |on: bool| if on { "on" } else { "off" };
        let border = CONTROL.border_cycle().style(self.shown.border).param;
        rprintln!();
        rprintln!("leds: {}", on_off(self.shown.leds_enabled));
        rprintln!("green: {}", on_off(self.shown.aux_led_on));
        rprintln!("border: {}", border);
    }

    /// Runs the sampling loop forever.
    ///
    /// The display and LEDs are blanked once first. Toggle changes are
    /// logged here rather than in the edge task, which must stay short.
    pub async fn run(&mut self) -> ! {
        self.controller.blank();
        self.show();
        loop {
            let sample = self.joystick.measure().await;
            let report = self.controller.tick(sample);
            if report.toggles != self.shown {
                self.shown = report.toggles;
                self.show();
            }
            Timer::after_millis(TICK_MS).await;
        }
    }
}
