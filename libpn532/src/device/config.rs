// libpn532/src/device/config.rs

//! Session configuration

use std::time::Duration;

use crate::constants::PN532_I2C_ADDRESS;
use crate::utils::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS, ms};

/// Tunables of a device session. The defaults match the usual PN532
/// behaviour: address 0x24, 10 ms between readiness polls and 1 s to wait
/// for acknowledgements and configuration responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    /// 7-bit bus address of the PN532
    pub address: u8,
    /// Sleep between two readiness polls
    pub poll_interval: Duration,
    /// Wait bound for operations that take no explicit timeout
    /// (SAM configuration, detection start)
    pub command_timeout: Duration,
    /// Fully verify LEN/LCS/TFI/DCS/postamble and the response code of
    /// every response frame instead of trusting the bus
    pub verify_checksums: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: PN532_I2C_ADDRESS,
            poll_interval: ms(DEFAULT_POLL_INTERVAL_MS),
            command_timeout: ms(DEFAULT_TIMEOUT_MS),
            verify_checksums: false,
        }
    }
}

impl DeviceConfig {
    /// Set [`address`](Self::address).
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set [`poll_interval`](Self::poll_interval).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set [`command_timeout`](Self::command_timeout).
    pub fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Set [`verify_checksums`](Self::verify_checksums).
    pub fn with_checksum_verification(mut self, enabled: bool) -> Self {
        self.verify_checksums = enabled;
        self
    }
}
