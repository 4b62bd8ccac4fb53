//! Utilities for libpn532: small, reusable helpers used across the crate.
//!
//! Frame dumps for the `log` output and the timeout arithmetic used by the
//! readiness polling loop live here.

pub mod timeout;

pub use timeout::*;

use std::fmt;

/// Display adapter that renders a byte slice as lowercase, space separated
/// hex without allocating. Used for frame dumps in log output.
///
/// Example: `HexSlice(&[0xde, 0xad])` -> `"de ad"`
#[derive(Clone, Copy)]
pub struct HexSlice<'a>(pub &'a [u8]);

impl fmt::Display for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}
