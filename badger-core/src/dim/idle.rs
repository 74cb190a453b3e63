//! Motion-based idle dimming
//!
//! Drops the backlight to a low level after the board has been still for a
//! while, and restores it on movement or explicit activity.

use crate::capability::{CapabilityHandle, PeripheralFactory};
use crate::config::IdleDimConfig;
use crate::traits::{Acceleration, Accelerometer, Backlight};

use super::DimOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct IdleState {
    last_reading: Option<Acceleration>,
    last_activity_ms: Option<u32>,
    applied: Option<u8>,
}

/// Movement-driven backlight dimmer
#[derive(Debug, Clone)]
pub struct IdleDimmer {
    config: IdleDimConfig,
    state: Option<IdleState>,
}

impl IdleDimmer {
    /// Create a dimmer; Unsupported without an accelerometer or backlight
    pub fn new<F: PeripheralFactory>(config: IdleDimConfig, handle: &CapabilityHandle<F>) -> Self {
        let board = handle.descriptor();
        let state = (board.has_accelerometer() && board.display.has_backlight)
            .then(IdleState::default);

        Self { config, state }
    }

    pub fn is_supported(&self) -> bool {
        self.state.is_some()
    }

    /// Whether the board is currently considered idle
    pub fn is_idle(&self, now_ms: u32) -> bool {
        self.state
            .and_then(|s| s.last_activity_ms)
            .is_some_and(|since| now_ms.wrapping_sub(since) >= self.config.delay_ms)
    }

    /// Sample the accelerometer and update the backlight
    pub fn tick<F: PeripheralFactory>(
        &mut self,
        handle: &mut CapabilityHandle<F>,
        now_ms: u32,
    ) -> DimOutcome {
        let Some(state) = self.state.as_mut() else {
            return DimOutcome::Unsupported;
        };
        let Ok((accel, display)) = handle.motion_and_display() else {
            return DimOutcome::Unsupported;
        };

        let reading = match accel.acceleration() {
            Ok(reading) => reading,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Accelerometer read failed: {}", _e);
                return DimOutcome::SensorError;
            }
        };

        let moved = state
            .last_reading
            .is_some_and(|last| reading.delta(&last) > self.config.movement_threshold_mg);
        state.last_reading = Some(reading);
        if moved || state.last_activity_ms.is_none() {
            state.last_activity_ms = Some(now_ms);
        }

        let idle = state
            .last_activity_ms
            .is_some_and(|since| now_ms.wrapping_sub(since) >= self.config.delay_ms);
        let target = if idle {
            self.config.idle_brightness
        } else {
            self.config.active_brightness
        };

        apply(state, display, target)
    }

    /// Record user activity: restart the idle timer and restore brightness
    pub fn activity<F: PeripheralFactory>(
        &mut self,
        handle: &mut CapabilityHandle<F>,
        now_ms: u32,
    ) -> DimOutcome {
        let Some(state) = self.state.as_mut() else {
            return DimOutcome::Unsupported;
        };
        state.last_activity_ms = Some(now_ms);
        apply(state, handle.display(), self.config.active_brightness)
    }
}

fn apply<B: Backlight>(state: &mut IdleState, display: &mut B, target: u8) -> DimOutcome {
    if state.applied == Some(target) {
        return DimOutcome::Unchanged;
    }
    match display.set_brightness(target) {
        Ok(()) => {
            #[cfg(feature = "defmt")]
            defmt::debug!("Idle dim -> {}%", target);
            state.applied = Some(target);
            DimOutcome::Applied(target)
        }
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Idle dim write failed: {}", _e);
            DimOutcome::WriteFailed
        }
    }
}
