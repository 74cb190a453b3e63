//! Ambient-light auto-dim controller
//!
//! Maps smoothed light readings onto a discrete brightness table. Each
//! sample moves the smoothed value toward the raw reading; the backlight is
//! only written when the smoothed bucket has settled on the raw bucket and
//! the smoothed value has cleared the deadband around the applied level.

use crate::capability::{CapabilityHandle, PeripheralFactory};
use crate::config::{ConfigError, DimConfig};
use crate::traits::{Backlight, LightSensor};

/// Result of one [`AutoDim::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DimOutcome {
    /// Board cannot dim; nothing was touched
    Unsupported,
    /// Too soon since the last sample; hardware not touched
    RateLimited,
    /// Sensor read failed; previous state kept
    SensorError,
    /// Smoothed value has not yet reached the raw reading's bucket
    Settling,
    /// Level unchanged, write elided
    Unchanged,
    /// New brightness written (percent)
    Applied(u8),
    /// Backlight write failed; will retry on the next sample
    WriteFailed,
}

/// Mutable controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DimState {
    /// Last raw reading
    pub last_raw: Option<u16>,
    /// Smoothed light level
    pub smoothed: Option<u16>,
    /// Bucket currently applied to the backlight
    pub level: Option<usize>,
    /// Time of the last sensor sample (ms)
    pub last_sample_ms: Option<u32>,
    /// Time of the last brightness write (ms)
    pub last_write_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Unsupported,
    Active(DimState),
}

/// Ambient-light auto-dim controller
#[derive(Debug, Clone)]
pub struct AutoDim {
    config: DimConfig,
    mode: Mode,
}

impl AutoDim {
    /// Create a controller for the given handle
    ///
    /// Boards without a light sensor or an adjustable backlight get an
    /// Unsupported controller whose `tick` does nothing.
    pub fn new<F: PeripheralFactory>(
        config: DimConfig,
        handle: &CapabilityHandle<F>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = handle.descriptor();
        let mode = if board.has_light_sensor() && board.display.has_backlight {
            Mode::Active(DimState::default())
        } else {
            #[cfg(feature = "defmt")]
            defmt::info!("Auto-dim unsupported on {}", board.name);
            Mode::Unsupported
        };

        Ok(Self { config, mode })
    }

    /// Check if this controller will ever dim
    pub fn is_supported(&self) -> bool {
        matches!(self.mode, Mode::Active(_))
    }

    /// Current state, `None` when unsupported
    pub fn state(&self) -> Option<&DimState> {
        match &self.mode {
            Mode::Active(state) => Some(state),
            Mode::Unsupported => None,
        }
    }

    pub fn config(&self) -> &DimConfig {
        &self.config
    }

    /// Run one control step at monotonic time `now_ms`
    pub fn tick<F: PeripheralFactory>(
        &mut self,
        handle: &mut CapabilityHandle<F>,
        now_ms: u32,
    ) -> DimOutcome {
        let Mode::Active(state) = &mut self.mode else {
            return DimOutcome::Unsupported;
        };
        let Ok((sensor, display)) = handle.light_and_display() else {
            return DimOutcome::Unsupported;
        };

        step(&self.config, state, sensor, display, now_ms)
    }
}

fn step<S: LightSensor, B: Backlight>(
    config: &DimConfig,
    state: &mut DimState,
    sensor: &mut S,
    display: &mut B,
    now_ms: u32,
) -> DimOutcome {
    if let Some(last) = state.last_sample_ms {
        if now_ms.wrapping_sub(last) < config.interval_ms {
            return DimOutcome::RateLimited;
        }
    }
    state.last_sample_ms = Some(now_ms);

    let raw = match sensor.read_light() {
        Ok(raw) => raw,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Light sensor read failed: {}", _e);
            return DimOutcome::SensorError;
        }
    };
    state.last_raw = Some(raw);

    let smoothed = match state.smoothed {
        Some(previous) => config.smoothing.apply(previous, raw),
        None => raw,
    };
    state.smoothed = Some(smoothed);

    if config.bucket(smoothed) != config.bucket(raw) {
        return DimOutcome::Settling;
    }
    let bucket = config.next_bucket(state.level, smoothed);
    if state.level == Some(bucket) {
        return DimOutcome::Unchanged;
    }

    let brightness = config.brightness(bucket);
    match display.set_brightness(brightness) {
        Ok(()) => {
            #[cfg(feature = "defmt")]
            defmt::debug!("Backlight -> {}% (light {})", brightness, smoothed);
            state.level = Some(bucket);
            state.last_write_ms = Some(now_ms);
            DimOutcome::Applied(brightness)
        }
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Backlight write failed: {}", _e);
            DimOutcome::WriteFailed
        }
    }
}
