//! Board-agnostic core logic for badge boards
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - Board descriptors and identity-based board resolution
//! - Capability handle exposing only the peripherals a board has
//! - Peripheral traits (light sensor, accelerometer, buttons, buzzer, pixels)
//! - Auto-dim controllers (ambient light, motion idle)
//! - Per-tick input snapshots
//! - Configuration type definitions
//!
//! A caller builds one [`CapabilityHandle`] at startup and drives everything
//! else from its own loop:
//!
//! ```ignore
//! let board = badger_core::resolve_board_from(&hal.identity())?;
//! let mut handle = CapabilityHandle::build(board, bsp)?;
//! let mut dim = AutoDim::new(DimConfig::default(), &handle)?;
//! loop {
//!     dim.tick(&mut handle, now_ms());
//!     let input = read_inputs(&mut handle);
//!     // ...
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod board;
pub mod capability;
pub mod config;
pub mod dim;
pub mod error;
pub mod input;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use board::{
    resolve_board, resolve_board_from, BoardDescriptor, BoardModel, Peripheral, PeripheralSet,
};
pub use capability::{CapabilityHandle, PeripheralFactory};
pub use config::{DimConfig, IdleDimConfig};
pub use dim::{AutoDim, DimOutcome, IdleDimmer};
pub use error::{BoardError, CapabilityUnavailable, InitFailure};
pub use input::{read_inputs, ButtonSet, InputSnapshot};
