// libpn532/src/protocol/commands/firmware.rs

//! GetFirmwareVersion payload encoder.

use crate::constants::PN532_CMD_GET_FIRMWARE_VERSION;

/// Encode GetFirmwareVersion command payload (PN532 command code 0x02).
/// The command takes no parameters.
pub fn encode_get_firmware_version() -> [u8; 1] {
    [PN532_CMD_GET_FIRMWARE_VERSION]
}
