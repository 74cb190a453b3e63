//! Board catalog and identity-based resolution
//!
//! Resolution is a first-match substring search of the platform identity
//! line, in catalog order. There is no fallback: driver wiring differs per
//! board, so an unknown board is fatal.

use badger_hal::{BoardIdentity, BusId, PinId};

use super::descriptor::*;
use crate::error::BoardError;
use crate::traits::Button;

const LIS3DH_ADDRESSES: &[u8] = &[0x19, 0x18];
const LSM6DS33_ADDRESSES: &[u8] = &[0x6A];

const TFT_160X128: DisplaySpec = DisplaySpec {
    width: 160,
    height: 128,
    supports_images: true,
    has_backlight: true,
};

const TFT_240X240: DisplaySpec = DisplaySpec {
    width: 240,
    height: 240,
    supports_images: true,
    has_backlight: true,
};

/// Shift-register button order on PyBadge/PyGamer (bit 0 = B)
const GAMEPAD_BUTTONS: &[Button] = &[
    Button::B,
    Button::A,
    Button::Start,
    Button::Select,
    Button::Right,
    Button::Down,
    Button::Up,
    Button::Left,
];

const GAMEPAD_SHIFT: ButtonWiring = ButtonWiring::ShiftRegister {
    clock: PinId("BUTTON_CLOCK"),
    data: PinId("BUTTON_OUT"),
    latch: PinId("BUTTON_LATCH"),
    active_low: false,
};

const LIS3DH_ONBOARD: AccelWiring = AccelWiring {
    kind: AccelKind::Lis3dh,
    bus: BusId::Primary,
    addresses: LIS3DH_ADDRESSES,
    interrupt: Some(PinId("ACCELEROMETER_INTERRUPT")),
    range_g: 2,
};

const SPEAKER_WITH_ENABLE: BuzzerWiring = BuzzerWiring {
    speaker: PinId("SPEAKER"),
    enable: Some(PinId("SPEAKER_ENABLE")),
};

pub const CLUE: BoardDescriptor = BoardDescriptor {
    model: BoardModel::Clue,
    name: "CLUE",
    identity: "CLUE",
    display: TFT_240X240,
    // The CLUE's APDS9960 is a gesture/colour sensor, not wired as an analog light input
    light_sensor: None,
    accelerometer: Some(AccelWiring {
        kind: AccelKind::Lsm6ds33,
        bus: BusId::Primary,
        addresses: LSM6DS33_ADDRESSES,
        interrupt: None,
        range_g: 2,
    }),
    buttons: Some(ButtonLayout {
        names: &[Button::A, Button::B],
        wiring: ButtonWiring::Direct {
            pins: &[PinId("BUTTON_A"), PinId("BUTTON_B")],
            active_low: true,
        },
    }),
    joystick: None,
    buzzer: Some(BuzzerWiring {
        speaker: PinId("SPEAKER"),
        enable: None,
    }),
    neopixels: Some(NeoPixelWiring {
        data: PinId("NEOPIXEL"),
        count: 1,
    }),
};

/// PyBadge, PyBadge LC and EdgeBadge share one firmware build
pub const PYBADGE: BoardDescriptor = BoardDescriptor {
    model: BoardModel::PyBadge,
    name: "PyBadge",
    identity: "Pybadge",
    display: TFT_160X128,
    light_sensor: Some(PinId("A7")),
    accelerometer: Some(LIS3DH_ONBOARD),
    buttons: Some(ButtonLayout {
        names: GAMEPAD_BUTTONS,
        wiring: GAMEPAD_SHIFT,
    }),
    joystick: None,
    buzzer: Some(SPEAKER_WITH_ENABLE),
    neopixels: Some(NeoPixelWiring {
        data: PinId("NEOPIXEL"),
        count: 5,
    }),
};

/// PyGamer: d-pad replaced by an analog stick
pub const PYGAMER: BoardDescriptor = BoardDescriptor {
    model: BoardModel::PyGamer,
    name: "PyGamer",
    identity: "PyGamer",
    display: TFT_160X128,
    light_sensor: Some(PinId("A7")),
    accelerometer: Some(LIS3DH_ONBOARD),
    buttons: Some(ButtonLayout {
        names: &[Button::B, Button::A, Button::Start, Button::Select],
        wiring: GAMEPAD_SHIFT,
    }),
    joystick: Some(JoystickWiring {
        x: PinId("JOYSTICK_X"),
        y: PinId("JOYSTICK_Y"),
    }),
    buzzer: Some(SPEAKER_WITH_ENABLE),
    neopixels: Some(NeoPixelWiring {
        data: PinId("NEOPIXEL"),
        count: 5,
    }),
};

pub const PEWPEW_M4: BoardDescriptor = BoardDescriptor {
    model: BoardModel::PewPewM4,
    name: "Pew Pew M4",
    identity: "PewPew M4",
    display: TFT_160X128,
    light_sensor: None,
    accelerometer: None,
    buttons: Some(ButtonLayout {
        names: &[
            Button::O,
            Button::X,
            Button::Z,
            Button::Right,
            Button::Down,
            Button::Up,
            Button::Left,
        ],
        wiring: ButtonWiring::Direct {
            pins: &[
                PinId("BUTTON_O"),
                PinId("BUTTON_X"),
                PinId("BUTTON_Z"),
                PinId("BUTTON_RIGHT"),
                PinId("BUTTON_DOWN"),
                PinId("BUTTON_UP"),
                PinId("BUTTON_LEFT"),
            ],
            active_low: true,
        },
    }),
    joystick: None,
    buzzer: Some(BuzzerWiring {
        speaker: PinId("SPEAKER"),
        enable: None,
    }),
    neopixels: None,
};

pub const PYPORTAL: BoardDescriptor = BoardDescriptor {
    model: BoardModel::PyPortal,
    name: "PyPortal",
    identity: "PyPortal",
    display: DisplaySpec {
        width: 320,
        height: 240,
        supports_images: true,
        has_backlight: true,
    },
    light_sensor: Some(PinId("LIGHT")),
    accelerometer: None,
    buttons: None,
    joystick: None,
    buzzer: Some(SPEAKER_WITH_ENABLE),
    neopixels: Some(NeoPixelWiring {
        data: PinId("NEOPIXEL"),
        count: 1,
    }),
};

/// Circuit Playground Bluefruit with TFT Gizmo
pub const CPB_GIZMO: BoardDescriptor = BoardDescriptor {
    model: BoardModel::CpbGizmo,
    name: "Circuit Playground Bluefruit + TFT Gizmo",
    identity: "Circuit Playground Bluefruit",
    display: TFT_240X240,
    light_sensor: Some(PinId("LIGHT")),
    accelerometer: Some(AccelWiring {
        kind: AccelKind::Lis3dh,
        bus: BusId::Dedicated {
            scl: PinId("ACCELEROMETER_SCL"),
            sda: PinId("ACCELEROMETER_SDA"),
        },
        addresses: &[0x19],
        interrupt: Some(PinId("ACCELEROMETER_INTERRUPT")),
        range_g: 8,
    }),
    buttons: Some(ButtonLayout {
        names: &[Button::A, Button::B],
        wiring: ButtonWiring::Direct {
            pins: &[PinId("BUTTON_A"), PinId("BUTTON_B")],
            active_low: false,
        },
    }),
    joystick: None,
    buzzer: Some(SPEAKER_WITH_ENABLE),
    neopixels: Some(NeoPixelWiring {
        data: PinId("NEOPIXEL"),
        count: 10,
    }),
};

pub const MAGTAG: BoardDescriptor = BoardDescriptor {
    model: BoardModel::MagTag,
    name: "MagTag",
    identity: "MagTag with ESP32S2",
    display: DisplaySpec {
        width: 296,
        height: 128,
        supports_images: false,
        has_backlight: false,
    },
    light_sensor: None,
    accelerometer: None,
    buttons: None,
    joystick: None,
    buzzer: None,
    neopixels: Some(NeoPixelWiring {
        data: PinId("NEOPIXEL"),
        count: 4,
    }),
};

/// All supported boards, in resolution order
pub const BOARDS: &[BoardDescriptor] = &[
    CLUE, PYBADGE, PYGAMER, PEWPEW_M4, PYPORTAL, CPB_GIZMO, MAGTAG,
];

/// Resolve the board from a platform identity line
pub fn resolve_board(identity: &str) -> Result<&'static BoardDescriptor, BoardError> {
    let board = BOARDS
        .iter()
        .find(|board| identity.contains(board.identity))
        .ok_or(BoardError::UnknownBoard)?;

    #[cfg(feature = "defmt")]
    defmt::info!("Board resolved: {}", board.name);

    Ok(board)
}

/// Resolve the board from the HAL's identity source
pub fn resolve_board_from<I: BoardIdentity + ?Sized>(
    source: &I,
) -> Result<&'static BoardDescriptor, BoardError> {
    resolve_board(source.machine())
}
