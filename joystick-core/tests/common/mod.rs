//! Recording stand-ins for the board's PWM and display.

use std::cell::RefCell;
use std::rc::Rc;

use joystick_core::{LedChannel, PwmActuator, Rect, Renderer};

/// PWM levels shared between handles, like the firmware's static PWM.
#[derive(Clone, Default)]
pub struct SharedLeds(Rc<RefCell<[u16; 2]>>);

impl SharedLeds {
    pub fn levels(&self) -> [u16; 2] {
        *self.0.borrow()
    }
}

impl PwmActuator for SharedLeds {
    fn set_level(&mut self, channel: LedChannel, intensity: u16) {
        self.0.borrow_mut()[channel.index()] = intensity;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Clear,
    Fill(Rect),
    Outline(Rect),
    Present,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub ops: Vec<Op>,
}

impl RecordingRenderer {
    /// Operations since the last `Clear`, inclusive.
    pub fn last_frame(&self) -> &[Op] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == Op::Clear)
            .unwrap_or(0);
        &self.ops[start..]
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(Op::Fill(rect));
    }

    fn outline_rect(&mut self, rect: Rect) {
        self.ops.push(Op::Outline(rect));
    }

    fn present(&mut self) {
        self.ops.push(Op::Present);
    }
}
