//! Helpers for tests against a real PN532 on a Linux I2C bus.
//!
//! The bus path comes from `PN532_I2C_BUS` (default `/dev/i2c-1`). When the
//! bus cannot be opened, for example on CI, helpers return `Ok(None)`.

use libpn532::device::{Device, Initialized};
use libpn532::transport::i2c::LinuxI2cTransport;
use libpn532::{Error, Result};

pub fn bus_path() -> String {
    std::env::var("PN532_I2C_BUS").unwrap_or_else(|_| "/dev/i2c-1".to_string())
}

pub fn open_device() -> Result<Option<Device<LinuxI2cTransport>>> {
    match LinuxI2cTransport::open(bus_path()) {
        Ok(transport) => Ok(Some(Device::new_with_transport(transport))),
        Err(Error::I2c(_)) | Err(Error::DeviceNotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn open_and_initialize_device() -> Result<Option<Device<LinuxI2cTransport, Initialized>>> {
    match open_device()? {
        Some(device) => device.initialize().map(Some),
        None => Ok(None),
    }
}
