// libpn532/src/protocol/responses/passive_target.rs

//! InListPassiveTarget response decoding.

use crate::protocol::parser;
use crate::types::{MAX_UID_LEN, TargetUid};
use crate::{Error, Result};

/// Frame bytes read back when collecting a detection result. Long enough
/// for a single ISO14443A target with a 7-byte UID.
pub const DETECTION_RESPONSE_LEN: usize = 20;

/// Offset of NbTg (number of targets found)
pub const TARGET_COUNT_OFFSET: usize = 7;

/// Offset of NFCIDLength
pub const UID_LEN_OFFSET: usize = 12;

/// Offset of the first NFCID byte
pub const UID_OFFSET: usize = 13;

/// Decode an InListPassiveTarget response frame (readiness byte removed)
/// Layout: header(6) + 0x4B + NbTg + Tg + SENS_RES(2) + SEL_RES + NFCIDLength + NFCID(n) ...
///
/// Returns `Ok(None)` unless exactly one target was reported; an empty
/// field is the common case and not an error.
pub fn decode_passive_target(frame: &[u8]) -> Result<Option<TargetUid>> {
    let count = parser::byte_at(frame, TARGET_COUNT_OFFSET)?;
    if count != 1 {
        return Ok(None);
    }

    let uid_len = parser::byte_at(frame, UID_LEN_OFFSET)? as usize;
    if uid_len > MAX_UID_LEN {
        return Err(Error::InvalidLength {
            expected: MAX_UID_LEN,
            actual: uid_len,
        });
    }
    let uid = parser::slice_at(frame, UID_OFFSET, uid_len)?;
    TargetUid::try_from(uid).map(Some)
}
