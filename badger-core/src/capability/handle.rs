//! Capability handle
//!
//! Owns the constructed drivers. A field is populated if and only if the
//! descriptor has the corresponding peripheral; accessors on an absent
//! peripheral return [`CapabilityUnavailable`] instead of a placeholder.
//!
//! The handle is not internally synchronised. It is meant to be owned by
//! the single control loop; a multi-threaded caller must wrap it.

use crate::board::{BoardDescriptor, Peripheral, PeripheralSet};
use crate::capability::PeripheralFactory;
use crate::error::{BoardError, CapabilityUnavailable, InitFailure};

/// Ready peripherals for one board
pub struct CapabilityHandle<F: PeripheralFactory> {
    descriptor: &'static BoardDescriptor,
    display: F::Display,
    light_sensor: Option<F::LightSensor>,
    accelerometer: Option<F::Accelerometer>,
    buttons: Option<F::Buttons>,
    joystick: Option<F::Joystick>,
    buzzer: Option<F::Buzzer>,
    pixels: Option<F::Pixels>,
}

/// Construct an optional peripheral, tagging failures with its name
fn bring_up<T, W>(
    peripheral: Peripheral,
    wiring: Option<W>,
    construct: impl FnOnce(W) -> Result<T, InitFailure>,
) -> Result<Option<T>, BoardError> {
    let Some(wiring) = wiring else {
        return Ok(None);
    };

    match construct(wiring) {
        Ok(driver) => {
            #[cfg(feature = "defmt")]
            defmt::debug!("Peripheral up: {}", peripheral);
            Ok(Some(driver))
        }
        Err(cause) => {
            #[cfg(feature = "defmt")]
            defmt::error!("Peripheral {} failed to initialise: {}", peripheral, cause);
            Err(BoardError::PeripheralInit { peripheral, cause })
        }
    }
}

impl<F: PeripheralFactory> CapabilityHandle<F> {
    /// Construct every peripheral the descriptor claims
    ///
    /// Any construction failure aborts the build; drivers already created
    /// are dropped with the factory.
    pub fn build(descriptor: &'static BoardDescriptor, mut factory: F) -> Result<Self, BoardError> {
        factory.prepare(descriptor);

        let display = factory
            .display(&descriptor.display)
            .map_err(|cause| BoardError::PeripheralInit {
                peripheral: Peripheral::Display,
                cause,
            })?;

        let light_sensor = bring_up(Peripheral::LightSensor, descriptor.light_sensor, |pin| {
            factory.light_sensor(pin)
        })?;
        let accelerometer = bring_up(
            Peripheral::Accelerometer,
            descriptor.accelerometer.as_ref(),
            |wiring| factory.accelerometer(wiring),
        )?;
        let buttons = bring_up(
            Peripheral::Buttons,
            descriptor.buttons.as_ref().filter(|layout| !layout.names.is_empty()),
            |layout| factory.buttons(layout),
        )?;
        let joystick = bring_up(Peripheral::Joystick, descriptor.joystick.as_ref(), |wiring| {
            factory.joystick(wiring)
        })?;
        let buzzer = bring_up(Peripheral::Buzzer, descriptor.buzzer.as_ref(), |wiring| {
            factory.buzzer(wiring)
        })?;
        let pixels = bring_up(Peripheral::NeoPixels, descriptor.neopixels.as_ref(), |wiring| {
            factory.neopixels(wiring)
        })?;

        #[cfg(feature = "defmt")]
        defmt::info!("{} ready", descriptor.name);

        Ok(Self {
            descriptor,
            display,
            light_sensor,
            accelerometer,
            buttons,
            joystick,
            buzzer,
            pixels,
        })
    }

    /// The board this handle was built for
    pub fn descriptor(&self) -> &'static BoardDescriptor {
        self.descriptor
    }

    /// Peripherals actually populated in this handle
    pub fn peripherals(&self) -> PeripheralSet {
        let mut set = PeripheralSet::EMPTY;
        set.insert(Peripheral::Display);
        if self.light_sensor.is_some() {
            set.insert(Peripheral::LightSensor);
        }
        if self.accelerometer.is_some() {
            set.insert(Peripheral::Accelerometer);
        }
        if self.buttons.is_some() {
            set.insert(Peripheral::Buttons);
        }
        if self.joystick.is_some() {
            set.insert(Peripheral::Joystick);
        }
        if self.buzzer.is_some() {
            set.insert(Peripheral::Buzzer);
        }
        if self.pixels.is_some() {
            set.insert(Peripheral::NeoPixels);
        }
        set
    }

    /// Check if a peripheral is present
    pub fn has(&self, peripheral: Peripheral) -> bool {
        self.peripherals().contains(peripheral)
    }

    /// The display (every board has one)
    pub fn display(&mut self) -> &mut F::Display {
        &mut self.display
    }

    pub fn light_sensor(&mut self) -> Result<&mut F::LightSensor, CapabilityUnavailable> {
        self.light_sensor
            .as_mut()
            .ok_or(CapabilityUnavailable(Peripheral::LightSensor))
    }

    pub fn accelerometer(&mut self) -> Result<&mut F::Accelerometer, CapabilityUnavailable> {
        self.accelerometer
            .as_mut()
            .ok_or(CapabilityUnavailable(Peripheral::Accelerometer))
    }

    pub fn buttons(&mut self) -> Result<&mut F::Buttons, CapabilityUnavailable> {
        self.buttons
            .as_mut()
            .ok_or(CapabilityUnavailable(Peripheral::Buttons))
    }

    pub fn joystick(&mut self) -> Result<&mut F::Joystick, CapabilityUnavailable> {
        self.joystick
            .as_mut()
            .ok_or(CapabilityUnavailable(Peripheral::Joystick))
    }

    pub fn buzzer(&mut self) -> Result<&mut F::Buzzer, CapabilityUnavailable> {
        self.buzzer
            .as_mut()
            .ok_or(CapabilityUnavailable(Peripheral::Buzzer))
    }

    pub fn pixels(&mut self) -> Result<&mut F::Pixels, CapabilityUnavailable> {
        self.pixels
            .as_mut()
            .ok_or(CapabilityUnavailable(Peripheral::NeoPixels))
    }

    /// Light sensor and display together, for the dim controller
    pub(crate) fn light_and_display(
        &mut self,
    ) -> Result<(&mut F::LightSensor, &mut F::Display), CapabilityUnavailable> {
        let sensor = self
            .light_sensor
            .as_mut()
            .ok_or(CapabilityUnavailable(Peripheral::LightSensor))?;
        Ok((sensor, &mut self.display))
    }

    /// Accelerometer and display together, for the idle dimmer
    pub(crate) fn motion_and_display(
        &mut self,
    ) -> Result<(&mut F::Accelerometer, &mut F::Display), CapabilityUnavailable> {
        let accel = self
            .accelerometer
            .as_mut()
            .ok_or(CapabilityUnavailable(Peripheral::Accelerometer))?;
        Ok((accel, &mut self.display))
    }
}
