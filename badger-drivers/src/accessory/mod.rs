//! Accessory drivers

pub mod neopixel;
pub mod speaker;

pub use neopixel::NeoPixels;
pub use speaker::{NoEnable, Speaker};
