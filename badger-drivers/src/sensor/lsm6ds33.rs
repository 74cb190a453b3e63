//! LSM6DS33 accelerometer/gyro (I2C), accelerometer only
//!
//! Used on the CLUE. The gyro is left powered down.

use badger_core::error::InitFailure;
use badger_core::traits::{Acceleration, Accelerometer, SensorError};
use embedded_hal::i2c::I2c;

use super::lis3dh::Range;
use super::probe_failure;

/// LSM6DS33 register addresses
pub mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL1_XL: u8 = 0x10;
    pub const CTRL3_C: u8 = 0x12;
    pub const OUTX_L_XL: u8 = 0x28;
}

const DEVICE_ID: u8 = 0x69;
/// Accelerometer ODR 104 Hz
const ODR_104HZ: u8 = 0x40;
/// Block data update, register auto-increment
const CTRL3_BDU_INC: u8 = 0x44;

const fn fs_bits(range: Range) -> u8 {
    match range {
        Range::G2 => 0b00,
        Range::G16 => 0b01,
        Range::G4 => 0b10,
        Range::G8 => 0b11,
    }
}

/// Sensitivity in micro-g per LSB
const fn ug_per_lsb(range: Range) -> i32 {
    match range {
        Range::G2 => 61,
        Range::G4 => 122,
        Range::G8 => 244,
        Range::G16 => 488,
    }
}

pub struct Lsm6ds33<I2C> {
    i2c: I2C,
    address: u8,
    range: Range,
}

impl<I2C: I2c> Lsm6ds33<I2C> {
    pub fn new(mut i2c: I2C, address: u8, range: Range) -> Result<Self, InitFailure> {
        let mut id = [0u8];
        i2c.write_read(address, &[reg::WHO_AM_I], &mut id)
            .map_err(probe_failure)?;
        if id[0] != DEVICE_ID {
            return Err(InitFailure::WrongDevice);
        }

        i2c.write(address, &[reg::CTRL3_C, CTRL3_BDU_INC])
            .map_err(probe_failure)?;
        i2c.write(address, &[reg::CTRL1_XL, ODR_104HZ | (fs_bits(range) << 2)])
            .map_err(probe_failure)?;

        Ok(Self {
            i2c,
            address,
            range,
        })
    }
}

impl<I2C: I2c> Accelerometer for Lsm6ds33<I2C> {
    fn acceleration(&mut self) -> Result<Acceleration, SensorError> {
        let mut raw = [0u8; 6];
        self.i2c
            .write_read(self.address, &[reg::OUTX_L_XL], &mut raw)
            .map_err(|_| SensorError::Bus)?;

        let scale = ug_per_lsb(self.range);
        let axis = |lo: u8, hi: u8| i16::from_le_bytes([lo, hi]) as i32 * scale / 1000;
        Ok(Acceleration::new(
            axis(raw[0], raw[1]),
            axis(raw[2], raw[3]),
            axis(raw[4], raw[5]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::mock_i2c::MockI2c;

    #[test]
    fn test_configures_on_probe() {
        let i2c = MockI2c::new(0x6A).with_reg(reg::WHO_AM_I, DEVICE_ID);
        let sensor = Lsm6ds33::new(i2c, 0x6A, Range::G2).unwrap();
        assert_eq!(sensor.i2c.regs[reg::CTRL1_XL as usize], 0x40);
        assert_eq!(sensor.i2c.regs[reg::CTRL3_C as usize], 0x44);
    }

    #[test]
    fn test_wrong_device_rejected() {
        let i2c = MockI2c::new(0x6A).with_reg(reg::WHO_AM_I, 0x33);
        assert_eq!(
            Lsm6ds33::new(i2c, 0x6A, Range::G2).err(),
            Some(InitFailure::WrongDevice)
        );
        assert_eq!(
            Lsm6ds33::new(MockI2c::new(0x6B), 0x6A, Range::G2).err(),
            Some(InitFailure::NotResponding)
        );
    }

    #[test]
    fn test_acceleration_in_milli_g() {
        // 16393 LSB * 0.061 mg = 1000 mg
        let z = 16_393i16.to_le_bytes();
        let i2c = MockI2c::new(0x6A)
            .with_reg(reg::WHO_AM_I, DEVICE_ID)
            .with_reg(0x2C, z[0])
            .with_reg(0x2D, z[1]);
        let mut sensor = Lsm6ds33::new(i2c, 0x6A, Range::G2).unwrap();

        assert_eq!(sensor.acceleration(), Ok(Acceleration::new(0, 0, 999)));
    }
}
