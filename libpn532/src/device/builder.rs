// libpn532/src/device/builder.rs

//! Builder for [`Device`] sessions.

use std::time::Duration;

use crate::device::config::DeviceConfig;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<T> {
    transport: Option<T>,
    config: DeviceConfig,
}

impl<T: Transport> Default for DeviceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> DeviceBuilder<T> {
    /// Empty builder with the default configuration.
    pub fn new() -> Self {
        Self {
            transport: None,
            config: DeviceConfig::default(),
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Bus address of the PN532.
    pub fn address(mut self, address: u8) -> Self {
        self.config = self.config.with_address(address);
        self
    }

    /// Sleep between readiness polls.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config = self.config.with_poll_interval(interval);
        self
    }

    /// Wait bound for SAM configuration and detection start.
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_command_timeout(timeout);
        self
    }

    /// Fully verify every response frame.
    pub fn verify_checksums(mut self, enabled: bool) -> Self {
        self.config = self.config.with_checksum_verification(enabled);
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<T, Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Device::with_config(t, self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }
}
