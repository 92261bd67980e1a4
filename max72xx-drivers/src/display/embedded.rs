//! `embedded-hal` 1.0 adapters
//!
//! Lets the chain controller run on any HAL that implements the
//! `embedded-hal` blocking traits.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutputPin;
use embedded_hal::spi::SpiBus as EhSpiBus;
use max72xx_hal::{OutputPin, SpiBus};

/// Byte-level view of an `embedded-hal` SPI bus
///
/// The bus must already be set up for SPI mode 0, MSB first, at no more
/// than 10 MHz.
pub struct EmbeddedSpi<S> {
    bus: S,
}

impl<S> EmbeddedSpi<S> {
    /// Wrap an `embedded-hal` bus
    pub fn new(bus: S) -> Self {
        Self { bus }
    }

    /// Unwrap the bus
    pub fn release(self) -> S {
        self.bus
    }
}

impl<S: EhSpiBus<u8>> SpiBus for EmbeddedSpi<S> {
    type Error = S::Error;

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut word = [byte];
        self.bus.transfer_in_place(&mut word)?;
        self.bus.flush()?;
        Ok(word[0])
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(data)?;
        self.bus.flush()
    }
}

/// Strobe line backed by an infallible `embedded-hal` output pin
pub struct EmbeddedPin<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> EmbeddedPin<P> {
    /// Wrap a pin and drive it high (LOAD idle)
    pub fn new(pin: P) -> Self {
        let mut strobe = Self { pin, high: false };
        strobe.set_high();
        strobe
    }

    /// Unwrap the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin<Error = Infallible>> OutputPin for EmbeddedPin<P> {
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
