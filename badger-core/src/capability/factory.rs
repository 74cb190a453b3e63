//! Peripheral factory
//!
//! A board support package implements this trait once for its chip HAL.
//! Each constructor receives the descriptor's wiring for that peripheral
//! and either returns a ready driver or reports why it could not.

use badger_hal::PinId;

use crate::board::{
    AccelWiring, BoardDescriptor, ButtonLayout, BuzzerWiring, DisplaySpec, JoystickWiring,
    NeoPixelWiring,
};
use crate::error::InitFailure;
use crate::traits::{
    Accelerometer, Backlight, ButtonReader, Buzzer, Joystick, LightSensor, PixelStrip,
};

/// Constructs peripheral drivers from descriptor wiring
pub trait PeripheralFactory {
    type Display: Backlight;
    type LightSensor: LightSensor;
    type Accelerometer: Accelerometer;
    type Buttons: ButtonReader;
    type Joystick: Joystick;
    type Buzzer: Buzzer;
    type Pixels: PixelStrip;

    /// Called once before any constructor, with the resolved board
    fn prepare(&mut self, _board: &'static BoardDescriptor) {}

    fn display(&mut self, spec: &DisplaySpec) -> Result<Self::Display, InitFailure>;

    fn light_sensor(&mut self, pin: PinId) -> Result<Self::LightSensor, InitFailure>;

    fn accelerometer(&mut self, wiring: &AccelWiring) -> Result<Self::Accelerometer, InitFailure>;

    fn buttons(&mut self, layout: &ButtonLayout) -> Result<Self::Buttons, InitFailure>;

    fn joystick(&mut self, wiring: &JoystickWiring) -> Result<Self::Joystick, InitFailure>;

    fn buzzer(&mut self, wiring: &BuzzerWiring) -> Result<Self::Buzzer, InitFailure>;

    fn neopixels(&mut self, wiring: &NeoPixelWiring) -> Result<Self::Pixels, InitFailure>;
}
