// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Default 7-bit I2C address of the PN532
pub const PN532_I2C_ADDRESS: u8 = 0x24;

/// Status byte reported by the PN532 when a frame is ready to be read
pub const PN532_I2C_READY: u8 = 0x01;

/// Frame preamble followed by the two start codes: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// TFI (direction byte) host->PN532 (D4) and PN532->host (D5)
pub const PN532_HOST_TO_PN532: u8 = 0xD4;
/// See [`PN532_HOST_TO_PN532`]
pub const PN532_PN532_TO_HOST: u8 = 0xD5;

/// ACK frame sent by the PN532 after it accepted a command
pub const PN532_ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Largest command payload. LEN is a single byte and also counts the TFI.
pub const PN532_COMMAND_MAX_SIZE: usize = 254;

/// Bytes a frame adds around its payload:
/// preamble(3) + LEN + LCS + TFI + DCS + postamble
pub const PN532_FRAME_OVERHEAD: usize = 8;

/// Largest frame the driver ever builds or reads
pub const PN532_PACKET_MAX_SIZE: usize = PN532_COMMAND_MAX_SIZE + PN532_FRAME_OVERHEAD;

/// Smallest well-formed information frame (TFI only, no payload)
pub const PN532_MIN_FRAME_LEN: usize = PN532_FRAME_OVERHEAD;

/// GetFirmwareVersion command code
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
/// SAMConfiguration command code
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
/// InListPassiveTarget command code
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;
