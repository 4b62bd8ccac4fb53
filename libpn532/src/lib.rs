// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust command/response protocol engine for NXP PN532 NFC
//! controllers on a byte bus (I2C). Frames commands, checks
//! acknowledgements, polls readiness and decodes the firmware, SAM
//! configuration and passive target detection responses.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
