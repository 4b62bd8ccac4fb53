// libpn532/src/transport/hal.rs

//! `embedded-hal` I2C transport.

#![cfg(feature = "hal")]

use embedded_hal::i2c::I2c;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Adapter exposing any `embedded-hal` 1.0 I2C bus as a [`Transport`].
pub struct HalTransport<I2C> {
    bus: I2C,
}

impl<I2C: I2c> HalTransport<I2C> {
    /// Wrap `bus`.
    pub fn new(bus: I2C) -> Self {
        Self { bus }
    }

    /// Give the bus back, e.g. to share it with other peripherals.
    pub fn release(self) -> I2C {
        self.bus
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(e: E) -> Error {
    Error::Io(format!("{:?}", e.kind()))
}

impl<I2C: I2c> Transport for HalTransport<I2C> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        self.bus.write(address, data).map_err(bus_error)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<()> {
        self.bus.read(address, buffer).map_err(bus_error)
    }
}
