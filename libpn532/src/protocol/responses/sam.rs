// libpn532/src/protocol/responses/sam.rs

//! SAMConfiguration response check.

use crate::protocol::parser;
use crate::{ProtocolError, Result};

/// Frame bytes read back for SAMConfiguration
pub const SAM_RESPONSE_LEN: usize = 9;

/// Offset of the response code within the frame
pub const SAM_RESPONSE_CODE_OFFSET: usize = 6;

/// Response code reported once the SAM configuration is applied
pub const SAM_CONFIGURED: u8 = 0x15;

/// Check a SAMConfiguration response frame (readiness byte removed)
/// Layout: preamble(3) + LEN + LCS + TFI + response_code(1) + DCS + postamble
pub fn check_sam_configuration(frame: &[u8]) -> Result<()> {
    let actual = parser::byte_at(frame, SAM_RESPONSE_CODE_OFFSET)?;
    if actual != SAM_CONFIGURED {
        return Err(ProtocolError::ConfigRejected { actual }.into());
    }
    Ok(())
}
