//! # Button Edge Module
//!
//! Button A and the joystick push switch (button B on the board) are awaited
//! on GPIOTE falling edges by one task. The task runs on the high-priority
//! interrupt executor, so an edge is handled as soon as it arrives, preempting
//! the main loop wherever it is.
use crate::*;

/// Edge handler owned by [`edge_task`]: writes LEDs through the shared PWM
/// handle and owns the green LED outright.
pub type Handler = EdgeHandler<'static, Leds, Output<'static, AnyPin>>;

/// Milliseconds since boot, truncated to the width the debounce timers use.
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Feeds every falling edge of either button to `handler`.
///
/// # Arguments
/// * `button_a` - Input toggling the PWM LEDs
/// * `joystick` - Input toggling the green LED and the border
/// * `handler` - Debounces and applies the transitions
#[embassy_executor::task]
pub async fn edge_task(mut button_a: Button, mut joystick: Button, mut handler: Handler) -> ! {
    loop {
        let switch = match select(
            button_a.wait_for_falling_edge(),
            joystick.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => Switch::A,
            Either::Second(()) => Switch::Joystick,
        };
        handler.on_edge(switch, now_ms());
    }
}
