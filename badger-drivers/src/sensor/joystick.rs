//! Two-axis analog joystick

use badger_core::traits::{Joystick, JoystickPosition};
use badger_hal::AnalogIn;

/// Joystick on two ADC channels
///
/// A failed conversion keeps the last good value for that axis, so a
/// glitch never reads as a push.
pub struct AnalogJoystick<X, Y> {
    x: X,
    y: Y,
    last: JoystickPosition,
}

impl<X: AnalogIn, Y: AnalogIn> AnalogJoystick<X, Y> {
    pub fn new(x: X, y: Y) -> Self {
        Self {
            x,
            y,
            last: JoystickPosition::CENTER,
        }
    }
}

impl<X: AnalogIn, Y: AnalogIn> Joystick for AnalogJoystick<X, Y> {
    fn position(&mut self) -> JoystickPosition {
        if let Ok(x) = self.x.read_u16() {
            self.last.x = x;
        }
        if let Ok(y) = self.y.read_u16() {
            self.last.y = y;
        }
        self.last
    }
}
