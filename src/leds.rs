//! # LED Output Module
//!
//! Hardware PWM for the red and blue LEDs plus the plain GPIO green LED.
//!
//! ## Sharing
//!
//! Two contexts write the PWM duty registers: the main loop every tick, and
//! the button edge task when button A switches the LEDs off. The peripheral
//! therefore lives in a static behind a critical-section mutex. Each write
//! holds the lock for a couple of register stores and never awaits.
//!
//! ## Duty Range
//!
//! Both channels wrap at [`PWM_MAX`], the same range the mapping engine
//! produces. `SimplePwm` counts up with the polarity bit clear, so the pin
//! stays low for the compare value and is high for the rest of the period.
//! The LEDs are active-high, so every intensity goes through
//! [`inverted_duty`]: intensity 0 is written as `PWM_MAX` (dark), full
//! intensity as 0.
use crate::*;

/// The PWM peripheral driving the red (channel 0) and blue (channel 1) LEDs.
pub type LedPwm = SimplePwm<'static, PWM0>;

static LED_PWM: BlockingMutex<CriticalSectionRawMutex, RefCell<Option<LedPwm>>> =
    BlockingMutex::new(RefCell::new(None));

/// Handle to the shared LED PWM.
///
/// Copies are cheap and all refer to the same peripheral. Writes made before
/// [`Leds::install`] are dropped.
#[derive(Clone, Copy)]
pub struct Leds;

impl Leds {
    /// Configures the PWM range, starts with both LEDs dark and hands the
    /// peripheral to the shared slot.
    ///
    /// # Arguments
    /// * `pwm` - Two-channel PWM on the red and blue LED pins
    ///
    /// # Examples
    /// ```rust,no_run
    /// let pwm = SimplePwm::new_2ch(board.pwm0, board.p9, board.p16);
    /// let leds = Leds::install(pwm);
    /// ```
    pub fn install(mut pwm: LedPwm) -> Self {
        pwm.set_max_duty(PWM_MAX);
        for channel in LedChannel::ALL {
            pwm.set_duty(channel.index(), inverted_duty(0, PWM_MAX));
        }
        LED_PWM.lock(|slot| *slot.borrow_mut() = Some(pwm));
        Self
    }
}

impl PwmActuator for Leds {
    fn set_level(&mut self, channel: LedChannel, intensity: u16) {
        LED_PWM.lock(|slot| {
            if let Some(pwm) = slot.borrow_mut().as_mut() {
                pwm.set_duty(channel.index(), inverted_duty(intensity, PWM_MAX));
            }
        });
    }
}

/// Creates the green LED output, initially off.
pub fn aux_led(pin: AnyPin) -> Output<'static, AnyPin> {
    Output::new(pin, Level::Low, OutputDrive::Standard)
}
