// libpn532/src/protocol/responses/firmware.rs

//! GetFirmwareVersion response decoding.

use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::{ProtocolError, Result};

/// Frame bytes read back for GetFirmwareVersion
pub const FIRMWARE_RESPONSE_LEN: usize = 13;

/// Preamble, LEN = 6, LCS, TFI of every GetFirmwareVersion response
pub const FIRMWARE_RESPONSE_HEADER: [u8; 6] = [0x00, 0x00, 0xFF, 0x06, 0xFA, 0xD5];

/// Offset of IC / Ver / Rev / Support within the response frame
pub const FIRMWARE_VERSION_OFFSET: usize = 7;

/// Decode a GetFirmwareVersion response frame (readiness byte removed)
/// Layout: header(6) + response_code(1) + IC(1) + Ver(1) + Rev(1) + Support(1) + DCS(1) + postamble(1)
pub fn decode_firmware_version(frame: &[u8]) -> Result<FirmwareVersion> {
    let header = parser::array_at::<6>(frame, 0)?;
    if header != FIRMWARE_RESPONSE_HEADER {
        return Err(ProtocolError::UnexpectedHeader { actual: header }.into());
    }

    let bytes = parser::array_at::<4>(frame, FIRMWARE_VERSION_OFFSET)?;
    Ok(FirmwareVersion::from_bytes(bytes))
}
