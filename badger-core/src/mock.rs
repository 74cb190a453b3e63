//! Hand-written mock peripherals for unit tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use badger_hal::{PinId, ToneError};
use smart_leds::RGB8;

use crate::board::{
    AccelWiring, BoardDescriptor, BoardModel, ButtonLayout, BuzzerWiring, DisplaySpec,
    JoystickWiring, NeoPixelWiring, Peripheral,
};
use crate::capability::PeripheralFactory;
use crate::error::InitFailure;
use crate::traits::*;

/// Records what the factory was asked to build
#[derive(Clone, Default)]
pub struct Probe(Rc<RefCell<ProbeLog>>);

#[derive(Default)]
struct ProbeLog {
    prepared: Option<BoardModel>,
    light_pin: Option<&'static str>,
}

impl Probe {
    pub fn prepared(&self) -> Option<BoardModel> {
        self.0.borrow().prepared
    }

    pub fn light_pin(&self) -> Option<&'static str> {
        self.0.borrow().light_pin
    }
}

#[derive(Default)]
pub struct MockFactory {
    failing: Option<(Peripheral, InitFailure)>,
    probe: Option<Probe>,
}

impl MockFactory {
    pub fn failing(peripheral: Peripheral, cause: InitFailure) -> Self {
        Self {
            failing: Some((peripheral, cause)),
            probe: None,
        }
    }

    pub fn with_probe(mut self, probe: Probe) -> Self {
        self.probe = Some(probe);
        self
    }

    fn check(&self, peripheral: Peripheral) -> Result<(), InitFailure> {
        match self.failing {
            Some((p, cause)) if p == peripheral => Err(cause),
            _ => Ok(()),
        }
    }
}

impl PeripheralFactory for MockFactory {
    type Display = MockDisplay;
    type LightSensor = MockLight;
    type Accelerometer = MockAccel;
    type Buttons = MockButtons;
    type Joystick = MockJoystick;
    type Buzzer = MockBuzzer;
    type Pixels = MockPixels;

    fn prepare(&mut self, board: &'static BoardDescriptor) {
        if let Some(probe) = &self.probe {
            probe.0.borrow_mut().prepared = Some(board.model);
        }
    }

    fn display(&mut self, spec: &DisplaySpec) -> Result<MockDisplay, InitFailure> {
        self.check(Peripheral::Display)?;
        Ok(MockDisplay {
            brightness: 100,
            writes: Vec::new(),
            fail_writes: false,
            has_backlight: spec.has_backlight,
        })
    }

    fn light_sensor(&mut self, pin: PinId) -> Result<MockLight, InitFailure> {
        self.check(Peripheral::LightSensor)?;
        if let Some(probe) = &self.probe {
            probe.0.borrow_mut().light_pin = Some(pin.name());
        }
        Ok(MockLight::default())
    }

    fn accelerometer(&mut self, _wiring: &AccelWiring) -> Result<MockAccel, InitFailure> {
        self.check(Peripheral::Accelerometer)?;
        Ok(MockAccel::default())
    }

    fn buttons(&mut self, _layout: &ButtonLayout) -> Result<MockButtons, InitFailure> {
        self.check(Peripheral::Buttons)?;
        Ok(MockButtons { mask: 0 })
    }

    fn joystick(&mut self, _wiring: &JoystickWiring) -> Result<MockJoystick, InitFailure> {
        self.check(Peripheral::Joystick)?;
        Ok(MockJoystick {
            position: JoystickPosition::CENTER,
        })
    }

    fn buzzer(&mut self, _wiring: &BuzzerWiring) -> Result<MockBuzzer, InitFailure> {
        self.check(Peripheral::Buzzer)?;
        Ok(MockBuzzer::default())
    }

    fn neopixels(&mut self, wiring: &NeoPixelWiring) -> Result<MockPixels, InitFailure> {
        self.check(Peripheral::NeoPixels)?;
        Ok(MockPixels {
            pixels: vec![RGB8::default(); wiring.count as usize],
            brightness: 255,
            shown: 0,
        })
    }
}

pub struct MockDisplay {
    pub brightness: u8,
    /// Every brightness value written, in order
    pub writes: Vec<u8>,
    pub fail_writes: bool,
    has_backlight: bool,
}

impl Backlight for MockDisplay {
    fn set_brightness(&mut self, percent: u8) -> Result<(), DisplayError> {
        if !self.has_backlight {
            return Err(DisplayError::Unsupported);
        }
        if self.fail_writes {
            return Err(DisplayError::Communication);
        }
        self.brightness = percent;
        self.writes.push(percent);
        Ok(())
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }
}

/// Light sensor fed from a script; repeats the last value once drained
#[derive(Default)]
pub struct MockLight {
    pub script: VecDeque<Result<u16, SensorError>>,
    pub last: u16,
    pub reads: usize,
}

impl MockLight {
    pub fn feed(&mut self, values: impl IntoIterator<Item = u16>) {
        self.script.extend(values.into_iter().map(Ok));
    }
}

impl LightSensor for MockLight {
    fn read_light(&mut self) -> Result<u16, SensorError> {
        self.reads += 1;
        match self.script.pop_front() {
            Some(Ok(value)) => {
                self.last = value;
                Ok(value)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last),
        }
    }
}

/// Accelerometer fed from a script; repeats the last value once drained
#[derive(Default)]
pub struct MockAccel {
    pub script: VecDeque<Acceleration>,
    pub last: Acceleration,
}

impl Accelerometer for MockAccel {
    fn acceleration(&mut self) -> Result<Acceleration, SensorError> {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        Ok(self.last)
    }
}

pub struct MockButtons {
    pub mask: u16,
}

impl ButtonReader for MockButtons {
    fn pressed_mask(&mut self) -> u16 {
        self.mask
    }
}

pub struct MockJoystick {
    pub position: JoystickPosition,
}

impl Joystick for MockJoystick {
    fn position(&mut self) -> JoystickPosition {
        self.position
    }
}

#[derive(Default)]
pub struct MockBuzzer {
    pub playing: Option<u32>,
    pub started: Vec<u32>,
}

impl Buzzer for MockBuzzer {
    fn start_tone(&mut self, frequency_hz: u32) -> Result<(), ToneError> {
        self.playing = Some(frequency_hz);
        self.started.push(frequency_hz);
        Ok(())
    }

    fn stop_tone(&mut self) {
        self.playing = None;
    }
}

pub struct MockPixels {
    pub pixels: Vec<RGB8>,
    pub brightness: u8,
    pub shown: usize,
}

impl PixelStrip for MockPixels {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), PixelError> {
        let pixel = self.pixels.get_mut(index).ok_or(PixelError::OutOfRange)?;
        *pixel = color;
        Ok(())
    }

    fn fill(&mut self, color: RGB8) {
        self.pixels.iter_mut().for_each(|p| *p = color);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn show(&mut self) -> Result<(), PixelError> {
        self.shown += 1;
        Ok(())
    }
}
