//! 74HC165 parallel-in/serial-out button reader
//!
//! Pulsing the latch low loads all inputs; each clock edge then shifts the
//! next input onto the data line. Bit `i` of the mask is the `i`-th bit
//! shifted out, which matches the order of the board's button names.

use badger_core::traits::ButtonReader;
use embedded_hal::digital::{InputPin, OutputPin};

pub struct ShiftRegisterButtons<CLK, DATA, LATCH> {
    clock: CLK,
    data: DATA,
    latch: LATCH,
    count: u8,
    active_low: bool,
}

impl<CLK, DATA, LATCH> ShiftRegisterButtons<CLK, DATA, LATCH>
where
    CLK: OutputPin,
    DATA: InputPin,
    LATCH: OutputPin,
{
    /// `count` is clamped to 16
    pub fn new(clock: CLK, data: DATA, latch: LATCH, count: u8, active_low: bool) -> Self {
        Self {
            clock,
            data,
            latch,
            count: count.min(16),
            active_low,
        }
    }

    fn sample(&mut self) -> Option<u16> {
        self.latch.set_low().ok()?;
        self.latch.set_high().ok()?;

        let mut mask = 0u16;
        for i in 0..self.count {
            let high = self.data.is_high().ok()?;
            if high != self.active_low {
                mask |= 1 << i;
            }
            self.clock.set_high().ok()?;
            self.clock.set_low().ok()?;
        }
        Some(mask)
    }
}

impl<CLK, DATA, LATCH> ButtonReader for ShiftRegisterButtons<CLK, DATA, LATCH>
where
    CLK: OutputPin,
    DATA: InputPin,
    LATCH: OutputPin,
{
    /// A pin error reads as nothing pressed
    fn pressed_mask(&mut self) -> u16 {
        self.sample().unwrap_or(0)
    }
}
