//! Light sensor and accelerometer traits

/// Errors that can occur reading a sensor
///
/// All of these are treated as transient by the controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed
    #[error("bus error")]
    Bus,
    /// ADC conversion error
    #[error("conversion error")]
    Conversion,
    /// No new sample available yet
    #[error("sensor not ready")]
    NotReady,
}

/// Ambient light sensor
pub trait LightSensor {
    /// Read the instantaneous light level, 0 (dark) to 65535 (saturated)
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_light(&mut self) -> Result<u16, SensorError>;
}

/// Acceleration per axis in milli-g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    pub x_mg: i32,
    pub y_mg: i32,
    pub z_mg: i32,
}

impl Acceleration {
    pub const fn new(x_mg: i32, y_mg: i32, z_mg: i32) -> Self {
        Self { x_mg, y_mg, z_mg }
    }

    /// Sum of absolute per-axis differences (Manhattan distance)
    pub fn delta(&self, other: &Acceleration) -> u32 {
        self.x_mg.abs_diff(other.x_mg)
            + self.y_mg.abs_diff(other.y_mg)
            + self.z_mg.abs_diff(other.z_mg)
    }
}

/// Three-axis accelerometer
pub trait Accelerometer {
    /// Read the current acceleration
    fn acceleration(&mut self) -> Result<Acceleration, SensorError>;
}
