// libpn532/src/transport/i2c.rs

//! Linux i2c-dev transport.

#![cfg(feature = "i2c")]

use std::path::Path;

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

use crate::Result;
use crate::constants::PN532_I2C_ADDRESS;
use crate::transport::traits::Transport;

/// Transport over a Linux `/dev/i2c-N` character device. It is
/// feature-gated behind `--features i2c` and requires the `i2cdev` crate.
pub struct LinuxI2cTransport {
    device: LinuxI2CDevice,
    address: u8,
}

impl LinuxI2cTransport {
    /// Open the bus at `path` (e.g. `/dev/i2c-1`) targeting the PN532's
    /// default address.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_at(path, PN532_I2C_ADDRESS)
    }

    /// Open the bus at `path` targeting `address`.
    pub fn open_at<P: AsRef<Path>>(path: P, address: u8) -> Result<Self> {
        let device = LinuxI2CDevice::new(path, u16::from(address))?;
        log::debug!("opened i2c bus, slave address {:#04x}", address);
        Ok(Self { device, address })
    }

    // The kernel binds one slave address per file descriptor
    fn select(&mut self, address: u8) -> Result<()> {
        if address != self.address {
            self.device.set_slave_address(u16::from(address))?;
            self.address = address;
        }
        Ok(())
    }
}

impl Transport for LinuxI2cTransport {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        self.select(address)?;
        self.device.write(data)?;
        Ok(())
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<()> {
        self.select(address)?;
        self.device.read(buffer)?;
        Ok(())
    }
}
