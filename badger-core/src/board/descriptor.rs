//! Board descriptor types
//!
//! Capability flags are derived from wiring: a peripheral is present if and
//! only if the descriptor carries the pins to construct it.

use core::fmt;

use badger_hal::{BusId, PinId};

use crate::traits::Button;

/// Supported board models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardModel {
    Clue,
    PyBadge,
    PyGamer,
    PewPewM4,
    PyPortal,
    CpbGizmo,
    MagTag,
}

/// Named peripheral that may or may not be present on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peripheral {
    Display,
    LightSensor,
    Accelerometer,
    Buttons,
    Joystick,
    Buzzer,
    NeoPixels,
}

impl Peripheral {
    /// All peripherals, in bit order of [`PeripheralSet`]
    pub const ALL: [Peripheral; 7] = [
        Peripheral::Display,
        Peripheral::LightSensor,
        Peripheral::Accelerometer,
        Peripheral::Buttons,
        Peripheral::Joystick,
        Peripheral::Buzzer,
        Peripheral::NeoPixels,
    ];

    /// Short lowercase name for messages
    pub const fn name(&self) -> &'static str {
        match self {
            Peripheral::Display => "display",
            Peripheral::LightSensor => "light sensor",
            Peripheral::Accelerometer => "accelerometer",
            Peripheral::Buttons => "buttons",
            Peripheral::Joystick => "joystick",
            Peripheral::Buzzer => "buzzer",
            Peripheral::NeoPixels => "neopixels",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of peripherals, one bit per [`Peripheral`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeripheralSet(u8);

impl PeripheralSet {
    /// Empty set
    pub const EMPTY: Self = Self(0);

    /// Add a peripheral
    pub fn insert(&mut self, peripheral: Peripheral) {
        self.0 |= peripheral.bit();
    }

    /// Check membership
    pub const fn contains(&self, peripheral: Peripheral) -> bool {
        self.0 & peripheral.bit() != 0
    }

    /// Number of peripherals in the set
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over members in [`Peripheral::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = Peripheral> + '_ {
        Peripheral::ALL.into_iter().filter(|p| self.contains(*p))
    }
}

impl FromIterator<Peripheral> for PeripheralSet {
    fn from_iter<I: IntoIterator<Item = Peripheral>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for peripheral in iter {
            set.insert(peripheral);
        }
        set
    }
}

/// Display panel description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySpec {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Panel renders full-colour images (false for grayscale e-ink)
    pub supports_images: bool,
    /// Backlight brightness is adjustable
    pub has_backlight: bool,
}

/// Accelerometer part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelKind {
    /// ST LIS3DH (PyBadge, PyGamer, CPB)
    Lis3dh,
    /// ST LSM6DS33 accelerometer/gyro (CLUE)
    Lsm6ds33,
}

/// Accelerometer wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelWiring {
    /// Part on the board
    pub kind: AccelKind,
    /// Bus the part sits on
    pub bus: BusId,
    /// I2C addresses to probe, in order
    pub addresses: &'static [u8],
    /// Interrupt line, if routed
    pub interrupt: Option<PinId>,
    /// Full-scale range in g
    pub range_g: u8,
}

/// How the buttons are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonWiring {
    /// Parallel-in shift register (74HC165), first bit clocked out is name index 0
    ShiftRegister {
        clock: PinId,
        data: PinId,
        latch: PinId,
        active_low: bool,
    },
    /// One GPIO per button, in name order
    Direct {
        pins: &'static [PinId],
        active_low: bool,
    },
}

/// Button layout: names in bit order plus wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLayout {
    /// Button names; index `i` is bit `i` of the reader's mask
    pub names: &'static [Button],
    /// Electrical wiring
    pub wiring: ButtonWiring,
}

/// Analog joystick wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickWiring {
    pub x: PinId,
    pub y: PinId,
}

/// Speaker wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BuzzerWiring {
    /// Audio output pin (DAC or PWM)
    pub speaker: PinId,
    /// Amplifier enable pin, if the board has one
    pub enable: Option<PinId>,
}

/// NeoPixel strip wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NeoPixelWiring {
    /// Data pin
    pub data: PinId,
    /// Number of pixels on the strip
    pub count: u8,
}

/// Static description of one board model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardDescriptor {
    /// Model identifier
    pub model: BoardModel,
    /// Human-readable name
    pub name: &'static str,
    /// Substring of the platform identity line that selects this board
    pub identity: &'static str,
    /// Display panel (always present)
    pub display: DisplaySpec,
    /// Analog light sensor pin
    pub light_sensor: Option<PinId>,
    pub accelerometer: Option<AccelWiring>,
    pub buttons: Option<ButtonLayout>,
    pub joystick: Option<JoystickWiring>,
    pub buzzer: Option<BuzzerWiring>,
    pub neopixels: Option<NeoPixelWiring>,
}

impl BoardDescriptor {
    pub const fn has_light_sensor(&self) -> bool {
        self.light_sensor.is_some()
    }

    pub const fn has_accelerometer(&self) -> bool {
        self.accelerometer.is_some()
    }

    pub const fn has_joystick(&self) -> bool {
        self.joystick.is_some()
    }

    pub const fn has_buzzer(&self) -> bool {
        self.buzzer.is_some()
    }

    pub const fn has_neopixel(&self) -> bool {
        self.neopixels.is_some()
    }

    /// Number of physical buttons (joystick directions not included)
    pub const fn button_count(&self) -> usize {
        match self.buttons {
            Some(layout) => layout.names.len(),
            None => 0,
        }
    }

    /// Peripherals this board has
    pub fn capabilities(&self) -> PeripheralSet {
        let mut set = PeripheralSet::EMPTY;
        set.insert(Peripheral::Display);
        if self.has_light_sensor() {
            set.insert(Peripheral::LightSensor);
        }
        if self.has_accelerometer() {
            set.insert(Peripheral::Accelerometer);
        }
        if self.button_count() > 0 {
            set.insert(Peripheral::Buttons);
        }
        if self.has_joystick() {
            set.insert(Peripheral::Joystick);
        }
        if self.has_buzzer() {
            set.insert(Peripheral::Buzzer);
        }
        if self.has_neopixel() {
            set.insert(Peripheral::NeoPixels);
        }
        set
    }
}
