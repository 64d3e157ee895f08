//! # Joystick Input Module
//!
//! Reads both axes of the analog joystick with the nRF52's SAADC
//! (Successive Approximation ADC) in a single two-channel conversion.
//!
//! The SAADC runs at 12-bit resolution so readings line up with
//! [`ADC_MAX`]. Single-ended conversions can dip slightly below zero near
//! ground; those are clamped to 0.
use crate::*;

/// Type alias for a two-channel SAADC configuration: channel 0 is the X axis,
/// channel 1 the Y axis.
pub type Adc = saadc::Saadc<'static, 2>;

/// Analog joystick on two SAADC channels.
pub struct Joystick(Adc);

impl Joystick {
    /// Creates a new joystick reader and calibrates the ADC.
    ///
    /// # Arguments
    ///
    /// * `adc` - SAADC configured for 12-bit resolution with the X channel
    ///   first and the Y channel second
    pub async fn new(adc: Adc) -> Self {
        adc.calibrate().await;
        Self(adc)
    }

    /// Samples both axes once.
    ///
    /// # Returns
    ///
    /// An [`AnalogSample`] with each axis in `0..=ADC_MAX`.
    pub async fn measure(&mut self) -> AnalogSample {
        let mut buf = [0; 2];
        self.0.sample(&mut buf).await;
        AnalogSample::new(to_reading(buf[0]), to_reading(buf[1]))
    }
}

fn to_reading(raw: i16) -> u16 {
    raw.clamp(0, ADC_MAX as i16) as u16
}
