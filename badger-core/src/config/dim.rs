//! Dimming configuration

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of brightness steps
pub const MAX_DIM_STEPS: usize = 8;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("brightness table is empty")]
    EmptyTable,
    #[error("too many brightness steps")]
    TooManySteps,
    #[error("first brightness step must start at light level 0")]
    FirstStepNotZero,
    #[error("light thresholds must strictly increase")]
    ThresholdsNotIncreasing,
    #[error("brightness must not decrease as light increases")]
    BrightnessDecreasing,
    #[error("brightness above 100 percent")]
    BrightnessOutOfRange,
    #[error("smoothing factor must be in (0, 1]")]
    InvalidSmoothing,
    #[error("hysteresis above 50 percent of a step")]
    InvalidHysteresis,
}

/// One step of the light → brightness table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimStep {
    /// Lowest smoothed light level (inclusive) that selects this step
    pub min_light: u16,
    /// Backlight brightness for this step, in percent
    pub brightness: u8,
}

impl DimStep {
    pub const fn new(min_light: u16, brightness: u8) -> Self {
        Self {
            min_light,
            brightness,
        }
    }
}

/// Exponential smoothing factor as a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Smoothing {
    pub numerator: u16,
    pub denominator: u16,
}

impl Smoothing {
    /// alpha = 1/2
    pub const HALF: Self = Self {
        numerator: 1,
        denominator: 2,
    };

    /// alpha = 1, no smoothing
    pub const NONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Move `current` toward `raw` by alpha of the difference
    ///
    /// The step is rounded away from zero so the value always reaches `raw`
    /// instead of stalling one count short of it.
    pub fn apply(&self, current: u16, raw: u16) -> u16 {
        let num = self.numerator as i64;
        let den = self.denominator.max(1) as i64;
        let delta = raw as i64 - current as i64;
        let bias = if delta >= 0 { den - 1 } else { -(den - 1) };
        let step = (delta * num + bias) / den;
        (current as i64 + step).clamp(0, u16::MAX as i64) as u16
    }
}

/// Ambient-light auto-dim configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DimConfig {
    /// Minimum time between sensor samples (ms)
    pub interval_ms: u32,
    /// Smoothing factor applied to each raw reading
    pub smoothing: Smoothing,
    /// Deadband around each threshold, in percent of the step below it
    ///
    /// The applied step is only left once the smoothed level is past the
    /// threshold by this margin.
    pub hysteresis_pct: u8,
    /// Brightness steps, ordered by increasing `min_light`
    pub steps: Vec<DimStep, MAX_DIM_STEPS>,
}

impl Default for DimConfig {
    fn default() -> Self {
        let mut steps = Vec::new();
        for step in [
            DimStep::new(0, 10),
            DimStep::new(1_500, 25),
            DimStep::new(5_000, 50),
            DimStep::new(15_000, 75),
            DimStep::new(30_000, 100),
        ] {
            let _ = steps.push(step);
        }

        Self {
            interval_ms: 250,
            smoothing: Smoothing::HALF,
            hysteresis_pct: 5,
            steps,
        }
    }
}

impl DimConfig {
    /// Build a config from a step table, with default interval and smoothing
    pub fn with_steps(steps: &[DimStep]) -> Result<Self, ConfigError> {
        let steps = Vec::from_slice(steps).map_err(|_| ConfigError::TooManySteps)?;
        let config = Self {
            steps,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the table is usable: starts at 0, strictly increasing thresholds,
    /// non-decreasing brightness
    pub fn validate(&self) -> Result<(), ConfigError> {
        let first = self.steps.first().ok_or(ConfigError::EmptyTable)?;
        if first.min_light != 0 {
            return Err(ConfigError::FirstStepNotZero);
        }

        if self.steps.iter().any(|s| s.brightness > 100) {
            return Err(ConfigError::BrightnessOutOfRange);
        }

        for pair in self.steps.windows(2) {
            if pair[1].min_light <= pair[0].min_light {
                return Err(ConfigError::ThresholdsNotIncreasing);
            }
            if pair[1].brightness < pair[0].brightness {
                return Err(ConfigError::BrightnessDecreasing);
            }
        }

        let Smoothing {
            numerator,
            denominator,
        } = self.smoothing;
        if numerator == 0 || denominator == 0 || numerator > denominator {
            return Err(ConfigError::InvalidSmoothing);
        }

        if self.hysteresis_pct > 50 {
            return Err(ConfigError::InvalidHysteresis);
        }

        Ok(())
    }

    /// Bucket index for a light level
    ///
    /// Bounds are inclusive at the bottom; values past the last threshold
    /// clamp to the top step.
    pub fn bucket(&self, light: u16) -> usize {
        self.steps
            .iter()
            .rposition(|step| light >= step.min_light)
            .unwrap_or(0)
    }

    /// Bucket to apply given the one currently applied
    ///
    /// Stays on `current` while `light` is within the deadband of its
    /// bounds; once past it, jumps straight to the plain bucket.
    pub fn next_bucket(&self, current: Option<usize>, light: u16) -> usize {
        let plain = self.bucket(light);
        let Some(current) = current else {
            return plain;
        };
        let light = light as u32;

        let held = if plain > current {
            self.threshold(current + 1)
                .is_some_and(|edge| light < edge + self.margin(current + 1))
        } else if plain < current {
            self.threshold(current)
                .is_some_and(|edge| light + self.margin(current) >= edge)
        } else {
            true
        };

        if held {
            current
        } else {
            plain
        }
    }

    fn threshold(&self, index: usize) -> Option<u32> {
        self.steps.get(index).map(|step| step.min_light as u32)
    }

    /// Deadband width at the threshold of step `index`
    fn margin(&self, index: usize) -> u32 {
        let (Some(below), Some(at)) = (
            index.checked_sub(1).and_then(|i| self.steps.get(i)),
            self.steps.get(index),
        ) else {
            return 0;
        };
        let width = at.min_light.saturating_sub(below.min_light) as u32;
        width * self.hysteresis_pct as u32 / 100
    }

    /// Brightness for a bucket index (clamped to the table)
    pub fn brightness(&self, bucket: usize) -> u8 {
        self.steps
            .get(bucket)
            .or(self.steps.last())
            .map(|step| step.brightness)
            .unwrap_or(100)
    }
}

/// Motion-based idle dimming configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdleDimConfig {
    /// Time without movement before dimming (ms)
    pub delay_ms: u32,
    /// Summed per-axis change that counts as movement (milli-g)
    pub movement_threshold_mg: u32,
    /// Brightness while active (percent)
    pub active_brightness: u8,
    /// Brightness once idle (percent)
    pub idle_brightness: u8,
}

impl Default for IdleDimConfig {
    fn default() -> Self {
        Self {
            delay_ms: 5_000,
            movement_threshold_mg: 1_000,
            active_brightness: 100,
            idle_brightness: 10,
        }
    }
}
