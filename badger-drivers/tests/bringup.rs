//! End-to-end bring-up of a simulated Circuit Playground Bluefruit
//!
//! Wires the real drivers to fake pins, ADC, I2C and sinks through a
//! `PeripheralFactory`, then drives the controllers the way firmware does.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use badger_core::board::{
    AccelKind, AccelWiring, ButtonLayout, ButtonWiring, BuzzerWiring, DisplaySpec,
    JoystickWiring, NeoPixelWiring, Peripheral,
};
use badger_core::error::{BoardError, InitFailure};
use badger_core::traits::{Backlight, Button, Buzzer, DisplayError, PixelStrip};
use badger_core::{
    read_inputs, resolve_board, AutoDim, CapabilityHandle, DimConfig, DimOutcome,
    IdleDimConfig, IdleDimmer, PeripheralFactory,
};
use badger_drivers::accessory::{NeoPixels, Speaker};
use badger_drivers::buttons::DirectButtons;
use badger_drivers::sensor::lis3dh::Range;
use badger_drivers::sensor::{AnalogJoystick, AnalogLightSensor, Lis3dh};
use badger_hal::{AnalogError, AnalogIn, PinId, ToneError, ToneOutput};
use embedded_hal::digital::{ErrorType as PinErrorType, InputPin, OutputPin};
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use smart_leds::{SmartLedsWrite, RGB8};

/// Everything the fake hardware exposes to the test
#[derive(Default)]
struct Bench {
    light: u16,
    buttons: [bool; 2],
    brightness: Vec<u8>,
    accel_regs: Vec<u8>,
    tone_rate: Option<u32>,
    amp_enabled: bool,
    frames: Vec<Vec<RGB8>>,
    missing_accel: bool,
}

type Shared = Rc<RefCell<Bench>>;

struct Adc(Shared);

impl AnalogIn for Adc {
    fn resolution_bits(&self) -> u8 {
        16
    }

    fn read_raw(&mut self) -> Result<u16, AnalogError> {
        Ok(self.0.borrow().light)
    }
}

struct Pwm(Shared, u8);

impl Backlight for Pwm {
    fn set_brightness(&mut self, percent: u8) -> Result<(), DisplayError> {
        self.1 = percent;
        self.0.borrow_mut().brightness.push(percent);
        Ok(())
    }

    fn brightness(&self) -> u8 {
        self.1
    }
}

struct Bus(Shared);

impl ErrorType for Bus {
    type Error = ErrorKind;
}

impl I2c for Bus {
    fn transaction(&mut self, address: u8, ops: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
        let mut bench = self.0.borrow_mut();
        if address != 0x19 || bench.missing_accel {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        let mut pointer = 0;
        for op in ops {
            match op {
                Operation::Write(bytes) => {
                    pointer = (bytes[0] & 0x7F) as usize;
                    for (i, b) in bytes[1..].iter().enumerate() {
                        bench.accel_regs[pointer + i] = *b;
                    }
                }
                Operation::Read(buf) => {
                    for (i, b) in buf.iter_mut().enumerate() {
                        *b = bench.accel_regs[pointer + i];
                    }
                }
            }
        }
        Ok(())
    }
}

struct Key(Shared, usize);

impl PinErrorType for Key {
    type Error = Infallible;
}

impl InputPin for Key {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.borrow().buttons[self.1])
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|h| !h)
    }
}

struct Dac(Shared);

impl ToneOutput for Dac {
    fn play_looped(&mut self, _samples: &[u16], sample_rate: u32) -> Result<(), ToneError> {
        self.0.borrow_mut().tone_rate = Some(sample_rate);
        Ok(())
    }

    fn stop(&mut self) {
        self.0.borrow_mut().tone_rate = None;
    }

    fn is_playing(&self) -> bool {
        self.0.borrow().tone_rate.is_some()
    }
}

struct AmpEnable(Shared);

impl PinErrorType for AmpEnable {
    type Error = Infallible;
}

impl OutputPin for AmpEnable {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().amp_enabled = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().amp_enabled = true;
        Ok(())
    }
}

struct Strip(Shared);

impl SmartLedsWrite for Strip {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), ()>
    where
        T: IntoIterator<Item = I>,
        I: Into<RGB8>,
    {
        let frame = iterator.into_iter().map(Into::into).collect();
        self.0.borrow_mut().frames.push(frame);
        Ok(())
    }
}

struct Cpb(Shared);

impl PeripheralFactory for Cpb {
    type Display = Pwm;
    type LightSensor = AnalogLightSensor<Adc>;
    type Accelerometer = Lis3dh<Bus>;
    type Buttons = DirectButtons<Key, 2>;
    type Joystick = AnalogJoystick<Adc, Adc>;
    type Buzzer = Speaker<Dac, AmpEnable>;
    type Pixels = NeoPixels<Strip, 16>;

    fn display(&mut self, spec: &DisplaySpec) -> Result<Pwm, InitFailure> {
        assert!(spec.has_backlight);
        Ok(Pwm(self.0.clone(), 100))
    }

    fn light_sensor(&mut self, pin: PinId) -> Result<Self::LightSensor, InitFailure> {
        assert_eq!(pin.name(), "LIGHT");
        Ok(AnalogLightSensor::new(Adc(self.0.clone())))
    }

    fn accelerometer(&mut self, wiring: &AccelWiring) -> Result<Self::Accelerometer, InitFailure> {
        assert_eq!(wiring.kind, AccelKind::Lis3dh);
        Lis3dh::new(
            Bus(self.0.clone()),
            wiring.addresses,
            Range::covering(wiring.range_g),
        )
    }

    fn buttons(&mut self, layout: &ButtonLayout) -> Result<Self::Buttons, InitFailure> {
        let ButtonWiring::Direct { active_low, .. } = layout.wiring else {
            return Err(InitFailure::PinUnavailable);
        };
        Ok(DirectButtons::new(
            [Key(self.0.clone(), 0), Key(self.0.clone(), 1)],
            active_low,
        ))
    }

    fn joystick(&mut self, _wiring: &JoystickWiring) -> Result<Self::Joystick, InitFailure> {
        Err(InitFailure::PinUnavailable)
    }

    fn buzzer(&mut self, wiring: &BuzzerWiring) -> Result<Self::Buzzer, InitFailure> {
        wiring.enable.ok_or(InitFailure::PinUnavailable)?;
        Ok(Speaker::new(Dac(self.0.clone()), AmpEnable(self.0.clone())))
    }

    fn neopixels(&mut self, wiring: &NeoPixelWiring) -> Result<Self::Pixels, InitFailure> {
        Ok(NeoPixels::new(Strip(self.0.clone()), wiring.count as usize))
    }
}

fn bench() -> Shared {
    let mut regs = vec![0u8; 128];
    regs[0x0F] = 0x33;
    Rc::new(RefCell::new(Bench {
        accel_regs: regs,
        ..Default::default()
    }))
}

fn bring_up(bench: &Shared) -> Result<CapabilityHandle<Cpb>, BoardError> {
    let board = resolve_board("Adafruit Circuit Playground Bluefruit with nRF52840")?;
    CapabilityHandle::build(board, Cpb(bench.clone()))
}

#[test]
fn cpb_builds_every_present_peripheral() {
    let bench = bench();
    let mut handle = bring_up(&bench).unwrap();

    assert!(handle.has(Peripheral::Accelerometer));
    assert!(handle.joystick().is_err());
    assert_eq!(handle.pixels().unwrap().len(), 10);
    // +-8 g range configured on the part
    assert_eq!(bench.borrow().accel_regs[0x23], 0x88 | 0x20);
}

#[test]
fn missing_accelerometer_fails_bring_up() {
    let bench = bench();
    bench.borrow_mut().missing_accel = true;
    assert_eq!(
        bring_up(&bench).err(),
        Some(BoardError::PeripheralInit {
            peripheral: Peripheral::Accelerometer,
            cause: InitFailure::NotResponding,
        })
    );
}

#[test]
fn light_level_drives_backlight() {
    let bench = bench();
    let mut handle = bring_up(&bench).unwrap();
    let mut dim = AutoDim::new(DimConfig::default(), &handle).unwrap();

    bench.borrow_mut().light = 500;
    assert_eq!(dim.tick(&mut handle, 0), DimOutcome::Applied(10));

    // Bright room: smoothing takes a few samples to settle
    bench.borrow_mut().light = 40_000;
    let mut now = 0;
    let mut outcome = DimOutcome::Settling;
    while outcome == DimOutcome::Settling || outcome == DimOutcome::RateLimited {
        now += 100;
        outcome = dim.tick(&mut handle, now);
    }
    assert_eq!(outcome, DimOutcome::Applied(100));
    assert_eq!(bench.borrow().brightness, vec![10, 100]);
}

#[test]
fn idle_dimmer_uses_accelerometer() {
    let bench = bench();
    let mut handle = bring_up(&bench).unwrap();
    let mut idle = IdleDimmer::new(IdleDimConfig::default(), &handle);

    assert_eq!(idle.tick(&mut handle, 0), DimOutcome::Applied(100));
    assert_eq!(idle.tick(&mut handle, 6_000), DimOutcome::Applied(10));

    // Shake: +1.2 g on X at +-8 g is 300 digits
    let x = (300i16 << 4).to_le_bytes();
    bench.borrow_mut().accel_regs[0x28] = x[0];
    bench.borrow_mut().accel_regs[0x29] = x[1];
    assert_eq!(idle.tick(&mut handle, 6_100), DimOutcome::Applied(100));
}

#[test]
fn inputs_and_accessories() {
    let bench = bench();
    let mut handle = bring_up(&bench).unwrap();

    bench.borrow_mut().buttons = [false, true];
    let input = read_inputs(&mut handle);
    assert_eq!(input.is_pressed(Button::A), Some(false));
    assert_eq!(input.is_pressed(Button::B), Some(true));
    assert_eq!(input.is_pressed(Button::Up), None);
    assert_eq!(input.joystick(), None);

    let buzzer = handle.buzzer().unwrap();
    buzzer.start_tone(440).unwrap();
    assert_eq!(bench.borrow().tone_rate, Some(44_000));
    assert!(bench.borrow().amp_enabled);
    buzzer.stop_tone();
    assert!(!bench.borrow().amp_enabled);

    let pixels = handle.pixels().unwrap();
    pixels.fill(RGB8::new(0, 0, 255));
    pixels.show().unwrap();
    assert_eq!(bench.borrow().frames[0].len(), 10);
}
