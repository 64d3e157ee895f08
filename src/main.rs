#![no_std]
#![no_main]

mod buttons;
mod joystick;
mod leds;
mod screen;
mod ui;
pub use buttons::*;
pub use joystick::*;
pub use leds::*;
pub use screen::*;
pub use ui::*;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use core::cell::RefCell;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex as BlockingMutex};
use embassy_time::{Instant, Timer};
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use joystick_core::{
    border,
    config::{ADC_MAX, DEBOUNCE_MS, PWM_MAX, TICK_MS},
    inverted_duty, AnalogSample, Button as Switch, ControlState, Controller, EdgeHandler,
    LedChannel, MappingConfig, PwmActuator, Rect, Renderer, Toggles,
};
use microbit_bsp::{
    embassy_nrf::{
        bind_interrupts,
        gpio::{AnyPin, Level, Output, OutputDrive},
        interrupt,
        interrupt::{InterruptExt, Priority},
        peripherals::{PWM0, TWISPI0},
        pwm::SimplePwm,
        saadc, twim,
        twim::Twim,
    },
    Button, Microbit,
};
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

/// Toggle flags and debounce timers shared by the edge task and the main loop.
pub static CONTROL: ControlState = ControlState::new(&border::THICKNESS);

/// Runs the button edge task above thread-mode priority.
static EDGE_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI0_EGU0() {
    EDGE_EXECUTOR.on_interrupt()
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_init_print!();
    let board = Microbit::default();

    bind_interrupts!(struct Irqs {
        SAADC => saadc::InterruptHandler;
        SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<TWISPI0>;
    });

    let leds = Leds::install(SimplePwm::new_2ch(board.pwm0, board.p9, board.p16));
    let green = aux_led(AnyPin::from(board.p8));

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(board.twispi0, Irqs, board.p20, board.p19, i2c_config);
    let screen = Screen::new(i2c);

    let mut saadc_config = saadc::Config::default();
    saadc_config.resolution = saadc::Resolution::_12BIT;
    let saadc = saadc::Saadc::new(
        board.saadc,
        Irqs,
        saadc_config,
        [
            saadc::ChannelConfig::single_ended(board.p1),
            saadc::ChannelConfig::single_ended(board.p2),
        ],
    );
    let joystick = Joystick::new(saadc).await;

    let config = MappingConfig::DEFAULT;
    rprintln!(
        "joystick: deadzone {}..={}, pwm max {}, axes {:?}, debounce {} ms",
        config.deadzone_min,
        config.deadzone_max,
        config.pwm_max,
        config.axes,
        DEBOUNCE_MS,
    );

    interrupt::SWI0_EGU0.set_priority(Priority::P6);
    let edge_spawner = EDGE_EXECUTOR.start(interrupt::SWI0_EGU0);
    let handler = EdgeHandler::new(&CONTROL, leds, green);
    if let Err(e) = edge_spawner.spawn(edge_task(board.btn_a, board.btn_b, handler)) {
        panic!("could not start edge task: {:?}", e);
    }

    let controller = Controller::new(&CONTROL, config, leds, screen);
    let mut ui = Ui::new(joystick, controller);
    ui.run().await
}
