//! Badger Hardware Abstraction Layer
//!
//! This crate defines the low-level traits a chip-specific board support
//! package implements so the board-agnostic crates can run on every badge
//! variant. Digital I/O, I2C and delays come from `embedded-hal` 1.0; this
//! crate only covers what `embedded-hal` does not.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Caller main loop (badge application)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  badger-core / badger-display           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  badger-drivers (embedded-hal + these)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  badger-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`identity::BoardIdentity`] - Platform identity line used for board detection
//! - [`analog::AnalogIn`] - ADC channels (light sensor, joystick axes)
//! - [`tone::ToneOutput`] - Looped sample playback for the speaker

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod identity;
pub mod pins;
pub mod tone;

// Re-export key traits at crate root for convenience
pub use analog::{AnalogError, AnalogIn};
pub use identity::BoardIdentity;
pub use pins::{BusId, PinId};
pub use tone::{ToneError, ToneOutput};
