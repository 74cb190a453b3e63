//! Speaker driven by a looping sample player
//!
//! A tone is one period of a sine wave looped at `samples × frequency`.
//! The period is at most 100 samples and is shortened for high notes so
//! the sample rate stays within what the DAC can clock.

use badger_core::traits::{Buzzer, ToneError};
use badger_hal::ToneOutput;
use core::convert::Infallible;
use core::f32::consts::PI;
use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::Vec;

/// Samples per period for low notes
pub const MAX_SAMPLES: usize = 100;
/// Highest sample rate the output is asked for (Hz)
pub const MAX_SAMPLE_RATE: u32 = 350_000;

/// Stand-in enable pin for boards whose amplifier is always on
pub struct NoEnable;

impl ErrorType for NoEnable {
    type Error = Infallible;
}

impl OutputPin for NoEnable {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

pub struct Speaker<T, EN> {
    output: T,
    enable: EN,
    wave: Vec<u16, MAX_SAMPLES>,
}

/// Samples per period for `frequency_hz`
pub fn period_length(frequency_hz: u32) -> usize {
    let max = MAX_SAMPLES as u32;
    if max.saturating_mul(frequency_hz) > MAX_SAMPLE_RATE {
        (MAX_SAMPLE_RATE / frequency_hz) as usize
    } else {
        MAX_SAMPLES
    }
}

/// One sine period, unsigned with midpoint 0x8000
fn sine_period(length: usize) -> Vec<u16, MAX_SAMPLES> {
    let amplitude = i16::MAX as f32;
    (0..length.min(MAX_SAMPLES))
        .map(|i| {
            let phase = 2.0 * PI * i as f32 / length as f32;
            (amplitude * libm::sinf(phase) + 32_768.0) as u16
        })
        .collect()
}

impl<T: ToneOutput, EN: OutputPin> Speaker<T, EN> {
    pub fn new(output: T, enable: EN) -> Self {
        Self {
            output,
            enable,
            wave: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.output.is_playing()
    }
}

impl<T: ToneOutput, EN: OutputPin> Buzzer for Speaker<T, EN> {
    fn start_tone(&mut self, frequency_hz: u32) -> Result<(), ToneError> {
        if frequency_hz == 0 {
            return Err(ToneError::UnsupportedRate);
        }
        let length = period_length(frequency_hz);
        if length < 2 {
            return Err(ToneError::UnsupportedRate);
        }
        if self.wave.len() != length {
            self.wave = sine_period(length);
        }

        self.enable.set_high().map_err(|_| ToneError::Busy)?;
        let rate = length as u32 * frequency_hz;
        #[cfg(feature = "defmt")]
        defmt::debug!("Tone {} Hz: {} samples at {} Hz", frequency_hz, length, rate);
        self.output.play_looped(&self.wave, rate)
    }

    fn stop_tone(&mut self) {
        self.output.stop();
        if self.enable.set_low().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Speaker enable pin stuck high");
        }
    }
}
