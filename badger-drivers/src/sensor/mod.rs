//! Sensor drivers

pub mod joystick;
pub mod lis3dh;
pub mod light;
pub mod lsm6ds33;

pub use joystick::AnalogJoystick;
pub use lis3dh::Lis3dh;
pub use light::AnalogLightSensor;
pub use lsm6ds33::Lsm6ds33;

use badger_core::error::InitFailure;
use embedded_hal::i2c::{Error as _, ErrorKind, NoAcknowledgeSource};

/// Classify an I2C error raised while probing a device
pub(crate) fn probe_failure<E: embedded_hal::i2c::Error>(error: E) -> InitFailure {
    match error.kind() {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address | NoAcknowledgeSource::Unknown) => {
            InitFailure::NotResponding
        }
        _ => InitFailure::BusUnavailable,
    }
}

/// Register-file I2C device for driver tests
#[cfg(test)]
pub(crate) mod mock_i2c {
    use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

    pub struct MockI2c {
        pub address: u8,
        pub regs: [u8; 128],
        pub fail_reads: bool,
    }

    impl MockI2c {
        pub fn new(address: u8) -> Self {
            Self {
                address,
                regs: [0; 128],
                fail_reads: false,
            }
        }

        pub fn with_reg(mut self, reg: u8, value: u8) -> Self {
            self.regs[reg as usize] = value;
            self
        }
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if address != self.address {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            let mut pointer = 0usize;
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some((reg, data)) = bytes.split_first() {
                            pointer = (*reg & 0x7F) as usize;
                            for (i, value) in data.iter().enumerate() {
                                self.regs[pointer + i] = *value;
                            }
                        }
                    }
                    Operation::Read(buffer) => {
                        if self.fail_reads {
                            return Err(ErrorKind::Bus);
                        }
                        for (i, byte) in buffer.iter_mut().enumerate() {
                            *byte = self.regs[pointer + i];
                        }
                    }
                }
            }
            Ok(())
        }
    }
}
