// libpn532/src/protocol/frame.rs

//! Normal information frame encoding and decoding.

use crate::constants::{
    PN532_COMMAND_MAX_SIZE, PN532_FRAME_OVERHEAD, PN532_HOST_TO_PN532, PN532_MIN_FRAME_LEN,
    PN532_PN532_TO_HOST, PN532_POSTAMBLE, PN532_PREAMBLE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 information frame helper. Provides encode/decode of the wire frame
/// Format: [Preamble(3)] [Len(1)] [LCS(1)] [TFI(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00 0x00 0xFF
/// Len: n + 1 (payload plus TFI)
/// DCS: covers TFI and payload
/// Postamble: 0x00
pub struct Frame;

impl Frame {
    /// Encode a host->PN532 command payload into a full frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode_with_tfi(PN532_HOST_TO_PN532, payload)
    }

    /// Encode a payload behind an arbitrary TFI. Device->host frames are
    /// never sent by the driver, but tests build them this way.
    pub fn encode_with_tfi(tfi: u8, payload: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; payload.len() + PN532_FRAME_OVERHEAD];
        let n = Self::encode_into(tfi, payload, &mut out)?;
        out.truncate(n);
        Ok(out)
    }

    /// Encode into a caller-provided buffer and return the frame length.
    /// This is the form the device session uses with its scratch buffer.
    pub fn encode_into(tfi: u8, payload: &[u8], out: &mut [u8]) -> Result<usize> {
        if payload.is_empty() {
            return Err(Error::InvalidArgument("command payload is empty".into()));
        }
        if payload.len() > PN532_COMMAND_MAX_SIZE {
            return Err(Error::InvalidArgument(format!(
                "command payload of {} bytes exceeds the {} byte maximum",
                payload.len(),
                PN532_COMMAND_MAX_SIZE
            )));
        }

        let total = payload.len() + PN532_FRAME_OVERHEAD;
        if out.len() < total {
            return Err(Error::InvalidLength {
                expected: total,
                actual: out.len(),
            });
        }

        // TFI counts towards LEN
        let len = (payload.len() + 1) as u8;
        out[..3].copy_from_slice(&PN532_PREAMBLE);
        out[3] = len;
        out[4] = lcs(len);
        out[5] = tfi;
        out[6..6 + payload.len()].copy_from_slice(payload);
        let body_end = 6 + payload.len();
        out[body_end] = dcs(&out[5..body_end]);
        out[body_end + 1] = PN532_POSTAMBLE;
        Ok(total)
    }

    /// Decode a PN532->host frame and return the payload that follows the TFI
    pub fn decode(frame: &[u8]) -> Result<&[u8]> {
        Self::decode_with_tfi(frame, PN532_PN532_TO_HOST)
    }

    /// Decode and fully verify a frame carrying `tfi`. Bytes after the
    /// postamble are ignored: I2C reads have a fixed length, so a short
    /// frame is usually followed by padding.
    pub fn decode_with_tfi(frame: &[u8], tfi: u8) -> Result<&[u8]> {
        if frame.len() < PN532_MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MIN_FRAME_LEN,
                actual: frame.len(),
            });
        }

        if frame[..3] != PN532_PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = frame[3];
        let lcs_actual = frame[4];
        match (len, lcs_actual) {
            (0x00, 0xFF) => return Err(Error::FrameFormat("unexpected ACK frame".into())),
            (0xFF, 0x00) => return Err(Error::FrameFormat("unexpected NACK frame".into())),
            _ => {}
        }
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        let body_start = 5usize;
        let body_end = body_start + len as usize;
        let required_len = body_end + 2;
        if frame.len() < required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let body = &frame[body_start..body_end];
        if body[0] != tfi {
            return Err(Error::FrameFormat(format!(
                "unexpected TFI {:#04x}, expected {:#04x}",
                body[0], tfi
            )));
        }

        let dcs_actual = frame[body_end];
        let dcs_expected = dcs(body);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if frame[body_end + 1] != PN532_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(&body[1..])
    }
}
