// libpn532/src/prelude.rs

//! Commonly used types, for glob import.

pub use crate::device::{Device, DeviceBuilder, DeviceConfig, Initialized, Uninitialized};
pub use crate::protocol::{Command, Frame};
pub use crate::transport::Transport;
pub use crate::{BaudRate, Error, FirmwareVersion, ProtocolError, Result, SamMode, TargetUid};

#[cfg(feature = "async")]
pub use crate::device::AsyncDevice;
#[cfg(feature = "async")]
pub use crate::transport::AsyncTransport;

// Re-export small utilities for convenience
pub use crate::utils::{HexSlice, default_timeout, ms};
