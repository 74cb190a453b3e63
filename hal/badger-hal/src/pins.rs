//! Pin and bus identifiers
//!
//! Board descriptors name pins and buses symbolically; the board support
//! package maps each identifier onto its chip's peripherals when it
//! constructs drivers.

/// Symbolic pin name as printed on the board schematic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub &'static str);

impl PinId {
    /// Schematic name of the pin
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

/// I2C bus a peripheral is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusId {
    /// The board's default I2C bus (STEMMA/Qwiic and onboard sensors)
    Primary,
    /// A bus dedicated to one peripheral, with its own SCL/SDA pins
    Dedicated {
        /// Clock pin
        scl: PinId,
        /// Data pin
        sda: PinId,
    },
}
