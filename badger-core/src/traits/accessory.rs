//! Buzzer and NeoPixel traits

use embedded_hal::delay::DelayNs;
use smart_leds::RGB8;

pub use badger_hal::ToneError;

/// Piezo/speaker tone output
pub trait Buzzer {
    /// Start a continuous tone at `frequency_hz`; replaces any playing tone
    fn start_tone(&mut self, frequency_hz: u32) -> Result<(), ToneError>;

    /// Stop the current tone, if any
    fn stop_tone(&mut self);

    /// Play a tone for `duration_ms`, blocking on `delay`
    fn play_tone<D: DelayNs>(
        &mut self,
        frequency_hz: u32,
        duration_ms: u32,
        delay: &mut D,
    ) -> Result<(), ToneError> {
        self.start_tone(frequency_hz)?;
        delay.delay_ms(duration_ms);
        self.stop_tone();
        Ok(())
    }
}

/// Errors writing to a pixel strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelError {
    /// Index past the end of the strip
    #[error("pixel index out of range")]
    OutOfRange,
    /// Data line write failed
    #[error("pixel write failed")]
    Write,
}

/// Addressable RGB pixels (NeoPixels)
///
/// Changes are buffered until [`PixelStrip::show`].
pub trait PixelStrip {
    /// Number of pixels
    fn len(&self) -> usize;

    /// Check if the strip has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set one pixel in the buffer
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), PixelError>;

    /// Set every pixel in the buffer
    fn fill(&mut self, color: RGB8);

    /// Global brightness scale applied on [`PixelStrip::show`] (0..=255)
    fn set_brightness(&mut self, brightness: u8);

    /// Write the buffer to the strip
    fn show(&mut self) -> Result<(), PixelError>;
}
