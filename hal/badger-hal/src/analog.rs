//! Analog input abstractions
//!
//! ADC channels report raw counts at the converter's native resolution.
//! [`AnalogIn::read_u16`] normalises them to the full 16-bit range so
//! thresholds are the same on 10-bit, 12-bit and 16-bit converters.

/// Errors from an ADC conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogError {
    /// Conversion did not complete in time
    Timeout,
    /// Converter reported an overrun or invalid result
    Conversion,
}

/// ADC input channel
pub trait AnalogIn {
    /// Resolution of the converter in bits (1..=16)
    fn resolution_bits(&self) -> u8;

    /// Read one raw conversion result
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_raw(&mut self) -> Result<u16, AnalogError>;

    /// Read one conversion scaled to 0..=65535
    fn read_u16(&mut self) -> Result<u16, AnalogError> {
        let bits = self.resolution_bits().clamp(1, 16);
        let raw = self.read_raw()?;
        if bits == 16 {
            return Ok(raw);
        }
        // Replicate the high bits into the low bits so full scale maps to 0xFFFF
        let shift = 16 - bits;
        let raw = raw & ((1u16 << bits) - 1);
        Ok((raw << shift) | (raw >> (bits.saturating_sub(shift))))
    }
}
