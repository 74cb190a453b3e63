//! Peripheral driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in badger-core on top of `embedded-hal` and the badger-hal traits:
//!
//! - Light sensors (analog phototransistor)
//! - Accelerometers (LIS3DH, LSM6DS33)
//! - Buttons (74HC165 shift register, direct GPIO)
//! - Joystick (two analog axes)
//! - Accessories (speaker, NeoPixels)
//!
//! Board support packages wire these up inside their
//! `PeripheralFactory` implementation.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod accessory;
pub mod buttons;
pub mod sensor;
