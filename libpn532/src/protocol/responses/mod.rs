// libpn532/src/protocol/responses/mod.rs

//! Decoders for the raw response frames read back from the chip.

pub mod firmware;
pub mod passive_target;
pub mod sam;

pub use firmware::{
    FIRMWARE_RESPONSE_HEADER, FIRMWARE_RESPONSE_LEN, FIRMWARE_VERSION_OFFSET,
    decode_firmware_version,
};
pub use passive_target::{DETECTION_RESPONSE_LEN, decode_passive_target};
pub use sam::{SAM_CONFIGURED, SAM_RESPONSE_LEN, check_sam_configuration};
