// libpn532/src/protocol/codec.rs

//! Wire-level helpers the session uses around [`Frame`]: command framing
//! into the scratch buffer, ACK checks and readiness-byte stripping.

use crate::constants::{PN532_ACK_FRAME, PN532_HOST_TO_PN532};
use crate::{Error, Result};

use super::Frame;
use super::commands::Command;

/// Number of bytes read to fetch an ACK: readiness byte + ACK frame.
pub const ACK_READ_LEN: usize = PN532_ACK_FRAME.len() + 1;

/// Encode a raw command payload into a full wire frame
/// (preamble/LEN/LCS/TFI/DCS/postamble).
pub fn encode_command(payload: &[u8]) -> Result<Vec<u8>> {
    Frame::encode(payload)
}

/// Encode a raw command payload into `out`, returning the frame length.
pub fn encode_command_into(payload: &[u8], out: &mut [u8]) -> Result<usize> {
    Frame::encode_into(PN532_HOST_TO_PN532, payload, out)
}

/// Encode a Command into a full wire frame.
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    encode_command(cmd.encode().as_slice())
}

/// Check a raw ACK read (readiness byte followed by six frame bytes). The
/// readiness byte is ignored; the rest must match the ACK frame exactly.
pub fn verify_ack(raw: &[u8]) -> bool {
    raw.len() == ACK_READ_LEN && raw[1..] == PN532_ACK_FRAME
}

/// [`verify_ack`] as a `Result`: a mismatch carries the six frame bytes
/// that were read instead of the ACK.
pub fn check_ack(raw: &[u8]) -> Result<()> {
    if verify_ack(raw) {
        return Ok(());
    }
    let mut actual = [0u8; ACK_READ_LEN - 1];
    let got = raw.get(1..).unwrap_or(&[]);
    let n = got.len().min(actual.len());
    actual[..n].copy_from_slice(&got[..n]);
    Err(Error::AckMismatch { actual })
}

/// Strip the leading readiness byte of a raw response read and return the
/// `expected_len` bytes of the response frame. Checksums are not verified
/// here, see [`Frame::decode`] for that.
pub fn decode_response(raw: &[u8], expected_len: usize) -> Result<&[u8]> {
    if expected_len == 0 {
        return Err(Error::InvalidArgument("expected response length is zero".into()));
    }
    let needed = expected_len + 1;
    if raw.len() < needed {
        return Err(Error::InvalidLength {
            expected: needed,
            actual: raw.len(),
        });
    }
    Ok(&raw[1..needed])
}
