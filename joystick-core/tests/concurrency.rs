//! Edges committed from another thread must never be seen half-applied.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use joystick_core::border::THICKNESS;
use joystick_core::{Button, ControlState};

static STATE: ControlState = ControlState::with_window(&THICKNESS, 0);

#[test]
fn snapshots_are_never_torn() {
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        scope.spawn(|| {
            // A zero window still rejects a repeat at the same millisecond,
            // so give every edge its own timestamp.
            for now in 1..=20_000u32 {
                STATE.on_edge(Button::Joystick, now);
                if now % 3 == 0 {
                    STATE.on_edge(Button::A, now);
                }
            }
            done.store(true, Ordering::Release);
        });

        let mut observed = 0u32;
        while !done.load(Ordering::Acquire) || observed == 0 {
            let toggles = STATE.toggles();
            // With a two-state cycle the aux LED is on exactly when the
            // border sits on its second state.
            assert_eq!(toggles.aux_led_on, toggles.border == 1, "{:?}", toggles);
            assert!(toggles.border < THICKNESS.len());
            observed += 1;
        }
    });

    let end = STATE.toggles();
    assert_eq!(end.aux_led_on, end.border == 1);
    assert!(!end.aux_led_on);
}
