use core::fmt::Debug;
use log::{debug, error, info};

use crate::error::{BindError, Direction};
use crate::hal::{ButtonInput, LedOutput, Level};
use crate::symbol::Symbol;

/// A raw GPIO controller, addressed by pin number.
///
/// Levels here are electrical (`true` = high), not logical.
pub trait GpioPort {
    type Error: Debug;

    fn configure_output(&mut self, pin: u8) -> Result<(), Self::Error>;
    fn configure_input(&mut self, pin: u8) -> Result<(), Self::Error>;
    fn write(&mut self, pin: u8, high: bool);
    fn read(&mut self, pin: u8) -> bool;
}

/// Which pin each channel is wired to, and which way round.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinMap {
    /// Indexed by [`Symbol::idx`].
    pub leds: [u8; 4],
    /// Indexed by [`Symbol::idx`].
    pub buttons: [u8; 4],
    /// LED lights when its pin is driven low.
    pub led_active_low: bool,
    /// Button reads low while held.
    pub button_active_low: bool,
}

impl PinMap {
    /// nRF52 DK: LED1-4 on P0.13-16, BUTTON1-4 on P0.11/12/24/25, all active low.
    pub const NRF52_DK: PinMap = PinMap {
        leds: [13, 14, 15, 16],
        buttons: [11, 12, 24, 25],
        led_active_low: true,
        button_active_low: true,
    };

    #[inline]
    pub const fn led(&self, led: Symbol) -> u8 {
        self.leds[led.idx()]
    }

    #[inline]
    pub const fn button(&self, button: Symbol) -> u8 {
        self.buttons[button.idx()]
    }
}

/// A bound board: a configured port plus its wiring.
#[derive(Debug)]
pub struct Board<P: GpioPort> {
    port: P,
    pins: PinMap,
}

impl<P: GpioPort> Board<P> {
    /// Configures every LED as an output (driven off) and every button as an input.
    ///
    /// `port` is `None` when the platform could not hand out the device
    /// called `label`.
    pub fn bind(label: &'static str, port: Option<P>, pins: PinMap) -> Result<Self, BindError> {
        let Some(port) = port else {
            error!("no gpio device named {label}");
            return Err(BindError::DeviceMissing(label));
        };

        let mut board = Board { port, pins };

        for led in Symbol::ALL {
            let pin = pins.led(led);
            board.port.configure_output(pin).map_err(|e| {
                error!("configuring led {led} (pin {pin}) failed: {e:?}");
                BindError::PinConfig { pin, direction: Direction::Output }
            })?;
            board.set(led, Level::Off);
        }

        for button in Symbol::ALL {
            let pin = pins.button(button);
            board.port.configure_input(pin).map_err(|e| {
                error!("configuring button {button} (pin {pin}) failed: {e:?}");
                BindError::PinConfig { pin, direction: Direction::Input }
            })?;
        }

        info!("bound {label}: leds {:?}, buttons {:?}", pins.leds, pins.buttons);
        Ok(board)
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}

impl<P: GpioPort> LedOutput for Board<P> {
    fn set(&mut self, led: Symbol, level: Level) {
        let high = level.is_on() != self.pins.led_active_low;
        debug!("led {led} -> {level:?}");
        self.port.write(self.pins.led(led), high);
    }
}

impl<P: GpioPort> ButtonInput for Board<P> {
    fn is_pressed(&mut self, button: Symbol) -> bool {
        self.port.read(self.pins.button(button)) != self.pins.button_active_low
    }
}
