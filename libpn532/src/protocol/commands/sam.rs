// libpn532/src/protocol/commands/sam.rs

//! SAMConfiguration payload encoder.

use crate::constants::PN532_CMD_SAM_CONFIGURATION;
use crate::types::SamMode;

/// Virtual card timeout used by the driver: 0x14 * 50 ms = 1 s
pub const SAM_DEFAULT_TIMEOUT: u8 = 0x14;

/// Encode SAMConfiguration command payload (PN532 command code 0x14)
/// Layout: code(1) + mode(1) + timeout in 50 ms units(1)
///
/// The optional IRQ byte is left off; the chip then drives its IRQ line.
pub fn encode_sam_configuration(mode: SamMode, timeout: u8) -> [u8; 3] {
    [PN532_CMD_SAM_CONFIGURATION, mode as u8, timeout]
}

/// Same as [`encode_sam_configuration`] with the trailing IRQ byte.
pub fn encode_sam_configuration_with_irq(mode: SamMode, timeout: u8, use_irq: bool) -> [u8; 4] {
    [
        PN532_CMD_SAM_CONFIGURATION,
        mode as u8,
        timeout,
        use_irq as u8,
    ]
}
