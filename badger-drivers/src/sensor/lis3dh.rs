//! LIS3DH three-axis accelerometer (I2C)
//!
//! Runs in high-resolution mode at 400 Hz. The board descriptor lists the
//! candidate addresses; the first one answering with the right WHO_AM_I
//! wins (PyBadge revisions strap SA0 differently).

use badger_core::error::InitFailure;
use badger_core::traits::{Acceleration, Accelerometer, SensorError};
use embedded_hal::i2c::I2c;

use super::probe_failure;

/// LIS3DH register addresses
pub mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL_REG1: u8 = 0x20;
    pub const CTRL_REG4: u8 = 0x23;
    pub const OUT_X_L: u8 = 0x28;
}

const DEVICE_ID: u8 = 0x33;
/// Set on the register address to read several registers in one go
const AUTO_INCREMENT: u8 = 0x80;
/// 400 Hz, normal power, X/Y/Z enabled
const CTRL_REG1_ON: u8 = 0x77;
/// Block data update and high-resolution output
const CTRL_REG4_BDU_HR: u8 = 0x88;

/// Full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Range {
    G2,
    G4,
    G8,
    G16,
}

impl Range {
    /// Smallest range covering `g`
    pub const fn covering(g: u8) -> Self {
        match g {
            0..=2 => Range::G2,
            3..=4 => Range::G4,
            5..=8 => Range::G8,
            _ => Range::G16,
        }
    }

    const fn fs_bits(self) -> u8 {
        match self {
            Range::G2 => 0b00,
            Range::G4 => 0b01,
            Range::G8 => 0b10,
            Range::G16 => 0b11,
        }
    }

    /// Sensitivity in high-resolution mode (mg per 12-bit digit)
    const fn mg_per_digit(self) -> i32 {
        match self {
            Range::G2 => 1,
            Range::G4 => 2,
            Range::G8 => 4,
            Range::G16 => 12,
        }
    }
}

pub struct Lis3dh<I2C> {
    i2c: I2C,
    address: u8,
    range: Range,
}

impl<I2C: I2c> Lis3dh<I2C> {
    /// Probe `addresses` in order and configure the first LIS3DH found
    pub fn new(mut i2c: I2C, addresses: &[u8], range: Range) -> Result<Self, InitFailure> {
        let mut failure = InitFailure::NotResponding;

        for &address in addresses {
            let mut id = [0u8];
            match i2c.write_read(address, &[reg::WHO_AM_I], &mut id) {
                Ok(()) if id[0] == DEVICE_ID => {
                    let mut sensor = Self {
                        i2c,
                        address,
                        range,
                    };
                    sensor.configure().map_err(probe_failure)?;
                    #[cfg(feature = "defmt")]
                    defmt::info!("LIS3DH at {:#04x}", address);
                    return Ok(sensor);
                }
                Ok(()) => failure = InitFailure::WrongDevice,
                Err(e) => {
                    if failure == InitFailure::NotResponding {
                        failure = probe_failure(e);
                    }
                }
            }
        }

        Err(failure)
    }

    fn configure(&mut self) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[reg::CTRL_REG1, CTRL_REG1_ON])?;
        self.i2c.write(
            self.address,
            &[reg::CTRL_REG4, CTRL_REG4_BDU_HR | (self.range.fs_bits() << 4)],
        )
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn range(&self) -> Range {
        self.range
    }
}

impl<I2C: I2c> Accelerometer for Lis3dh<I2C> {
    fn acceleration(&mut self) -> Result<Acceleration, SensorError> {
        let mut raw = [0u8; 6];
        self.i2c
            .write_read(self.address, &[reg::OUT_X_L | AUTO_INCREMENT], &mut raw)
            .map_err(|_| SensorError::Bus)?;

        // 12-bit left-justified samples
        let scale = self.range.mg_per_digit();
        let axis = |lo: u8, hi: u8| (i16::from_le_bytes([lo, hi]) >> 4) as i32 * scale;
        Ok(Acceleration::new(
            axis(raw[0], raw[1]),
            axis(raw[2], raw[3]),
            axis(raw[4], raw[5]),
        ))
    }
}
