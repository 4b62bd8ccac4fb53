// libpn532/src/protocol/commands/passive_target.rs

//! InListPassiveTarget payload encoder.

use crate::constants::PN532_CMD_INLIST_PASSIVE_TARGET;
use crate::types::BaudRate;

/// The driver only ever lists a single target at a time.
pub const DETECT_ONE_TARGET: u8 = 1;

/// Encode InListPassiveTarget command payload (PN532 command code 0x4A)
/// Layout: code(1) + MaxTg(1) + BrTy(1)
///
/// The PN532 accepts at most two targets; values above that are passed
/// through unchanged and rejected by the chip.
pub fn encode_in_list_passive_target(max_targets: u8, baud_rate: BaudRate) -> [u8; 3] {
    [PN532_CMD_INLIST_PASSIVE_TARGET, max_targets, baud_rate as u8]
}
