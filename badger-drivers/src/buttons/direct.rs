//! Buttons wired straight to GPIO inputs

use badger_core::traits::ButtonReader;
use embedded_hal::digital::InputPin;

/// One GPIO per button; pin `i` is mask bit `i`
pub struct DirectButtons<P, const N: usize> {
    pins: [P; N],
    active_low: bool,
}

impl<P: InputPin, const N: usize> DirectButtons<P, N> {
    pub fn new(pins: [P; N], active_low: bool) -> Self {
        Self { pins, active_low }
    }
}

impl<P: InputPin, const N: usize> ButtonReader for DirectButtons<P, N> {
    fn pressed_mask(&mut self) -> u16 {
        let mut mask = 0u16;
        for (i, pin) in self.pins.iter_mut().take(16).enumerate() {
            // A pin error reads as released
            if matches!(pin.is_high(), Ok(high) if high != self.active_low) {
                mask |= 1 << i;
            }
        }
        mask
    }
}
