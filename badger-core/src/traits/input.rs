//! Button and joystick traits

/// Named buttons across the board family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
    Start,
    Select,
    Up,
    Down,
    Left,
    Right,
    O,
    X,
    Z,
}

impl Button {
    /// The four directions, derivable from an analog stick
    pub const DIRECTIONS: [Button; 4] = [Button::Up, Button::Down, Button::Left, Button::Right];

    pub const fn is_direction(&self) -> bool {
        matches!(self, Button::Up | Button::Down | Button::Left | Button::Right)
    }
}

/// Reader for a board's buttons
///
/// No debouncing is performed; the mask is the instantaneous state.
pub trait ButtonReader {
    /// Read all buttons; bit `i` set means the button at layout index `i` is pressed
    fn pressed_mask(&mut self) -> u16;
}

/// Raw stick position, both axes 0..=65535 with centre near 32768
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickPosition {
    pub x: u16,
    pub y: u16,
}

impl JoystickPosition {
    /// Axis value below which the stick counts as pushed left/up
    pub const LOW_THRESHOLD: u16 = 15_000;
    /// Axis value above which the stick counts as pushed right/down
    pub const HIGH_THRESHOLD: u16 = 50_000;

    pub const CENTER: Self = Self {
        x: 32_768,
        y: 32_768,
    };

    /// Whether the stick is pushed in the given direction
    ///
    /// Non-direction buttons are never pressed by the stick.
    pub const fn pushed(&self, direction: Button) -> bool {
        match direction {
            Button::Right => self.x > Self::HIGH_THRESHOLD,
            Button::Left => self.x < Self::LOW_THRESHOLD,
            Button::Down => self.y > Self::HIGH_THRESHOLD,
            Button::Up => self.y < Self::LOW_THRESHOLD,
            _ => false,
        }
    }
}

/// Analog joystick
pub trait Joystick {
    /// Read the current stick position
    fn position(&mut self) -> JoystickPosition;
}
