//! # Joystick Control Core
//!
//! Hardware-free half of the joystick/OLED firmware: the toggle state shared
//! between the button edge handler and the sampling loop, the debounced edge
//! handling that mutates it, the mapping from joystick readings to LED
//! intensities and square placement, and the border cycle.
//!
//! Peripherals are reached only through the traits in [`io`], so the whole
//! core runs unchanged on the host under `cargo test`.
#![cfg_attr(not(test), no_std)]

pub mod border;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod events;
pub mod io;
pub mod mapping;
pub mod state;

pub use border::{BorderCycle, BorderStyle};
pub use config::{AxisAssignment, MappingConfig};
pub use controller::{Controller, TickReport};
pub use debounce::DebounceTimer;
pub use events::{Button, ControlState, EdgeHandler, EdgeOutcome};
pub use io::{inverted_duty, LedChannel, PwmActuator, Rect, Renderer};
pub use mapping::{AnalogSample, LedLevels, MappedOutput, SquareOrigin};
pub use state::{ToggleState, Toggles};
