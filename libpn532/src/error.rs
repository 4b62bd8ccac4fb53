// libpn532/src/error.rs

//! Error types.

use thiserror::Error;

use crate::device::state::Awaiting;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// No transport was supplied or the bus could not be opened
    #[error("device not found")]
    DeviceNotFound,

    /// Caller input the driver cannot encode or read
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // Linux I2C support is an optional dependency, same as the bus itself
    /// Linux i2c-dev failure
    #[cfg(feature = "i2c")]
    #[error("i2c error: {0}")]
    I2c(#[from] i2cdev::linux::LinuxI2CError),

    /// Any other bus failure
    #[error("bus i/o error: {0}")]
    Io(String),

    /// A slice was shorter (or longer) than the layout requires
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// The chip never reported readiness in time
    #[error("timed out waiting for {0}")]
    Timeout(Awaiting),

    /// The six bytes after the readiness byte were not an ACK frame
    #[error("acknowledgement mismatch: got {actual:02x?}")]
    AckMismatch {
        /// Bytes read in place of the ACK
        actual: [u8; 6],
    },

    /// LCS or DCS did not add up
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Checksum computed over the frame
        expected: u8,
        /// Checksum carried by the frame
        actual: u8,
    },

    /// Malformed frame: bad preamble, TFI or postamble
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// Well-formed frame with unexpected content
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Semantic failures of a response that was read and unframed correctly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Firmware response did not start with the expected header
    #[error("unexpected response header: {actual:02x?}")]
    UnexpectedHeader {
        /// Header bytes read
        actual: [u8; 6],
    },

    /// SAMConfiguration response code was not 0x15
    #[error("SAM configuration rejected: marker {actual:#04x}")]
    ConfigRejected {
        /// Byte found at the response code position
        actual: u8,
    },

    /// Response code did not match the command
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Command code plus one
        expected: u8,
        /// Code read
        actual: u8,
    },
}

impl Error {
    /// True when the device never signalled readiness. Usually means the
    /// chip is absent or still busy, so the caller may try again later.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }

    /// True for failures reported by the bus itself.
    pub fn is_bus_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            #[cfg(feature = "i2c")]
            Error::I2c(_) => true,
            _ => false,
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
