//! Tone output abstractions
//!
//! The speaker is driven by a DAC or PWM peripheral that loops a short
//! sample buffer. Synthesis happens in the driver; the HAL only plays.

/// Errors from the audio output peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneError {
    /// Requested sample rate is outside what the peripheral supports
    UnsupportedRate,
    /// Peripheral is busy or not initialised
    Busy,
}

/// Looping sample player (DAC or PWM audio out)
pub trait ToneOutput {
    /// Start looping `samples` (unsigned 16-bit, midpoint 0x8000) at `sample_rate` Hz
    ///
    /// Replaces whatever is currently playing.
    fn play_looped(&mut self, samples: &[u16], sample_rate: u32) -> Result<(), ToneError>;

    /// Stop playback and release the output
    fn stop(&mut self);

    /// Check if a sample is currently playing
    fn is_playing(&self) -> bool;
}
