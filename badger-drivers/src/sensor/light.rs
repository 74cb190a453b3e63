//! Analog ambient light sensor
//!
//! Phototransistor on an ADC pin. Readings are normalised to 16 bits so
//! the dim table thresholds do not depend on ADC resolution.

use badger_core::traits::{LightSensor, SensorError};
use badger_hal::{AnalogError, AnalogIn};

pub struct AnalogLightSensor<A> {
    adc: A,
}

impl<A: AnalogIn> AnalogLightSensor<A> {
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    pub fn release(self) -> A {
        self.adc
    }
}

impl<A: AnalogIn> LightSensor for AnalogLightSensor<A> {
    fn read_light(&mut self) -> Result<u16, SensorError> {
        self.adc.read_u16().map_err(|e| match e {
            AnalogError::Timeout => SensorError::NotReady,
            AnalogError::Conversion => SensorError::Conversion,
        })
    }
}
