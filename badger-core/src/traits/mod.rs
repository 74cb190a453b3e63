//! Peripheral traits
//!
//! These traits define the interface between the board-agnostic logic and
//! the drivers a board support package constructs.

pub mod accessory;
pub mod display;
pub mod input;
pub mod sensor;

pub use accessory::{Buzzer, PixelError, PixelStrip, ToneError};
pub use display::{Backlight, DisplayError};
pub use input::{Button, ButtonReader, Joystick, JoystickPosition};
pub use sensor::{Acceleration, Accelerometer, LightSensor, SensorError};
