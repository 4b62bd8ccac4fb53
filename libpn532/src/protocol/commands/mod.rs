// libpn532/src/protocol/commands/mod.rs

//! Command payload encoders.

pub mod firmware;
pub mod passive_target;
pub mod sam;

pub use firmware::encode_get_firmware_version;
pub use passive_target::{DETECT_ONE_TARGET, encode_in_list_passive_target};
pub use sam::{SAM_DEFAULT_TIMEOUT, encode_sam_configuration, encode_sam_configuration_with_irq};

use crate::protocol::responses;
use crate::types::{BaudRate, SamMode};

/// Longest payload among the typed commands below.
const MAX_TYPED_PAYLOAD: usize = 4;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// GetFirmwareVersion (0x02)
    GetFirmwareVersion,
    /// SAMConfiguration (0x14)
    SamConfiguration {
        /// SAM usage mode
        mode: SamMode,
        /// Virtual card timeout in 50 ms units
        timeout: u8,
        /// Trailing IRQ byte; `None` leaves it off the wire
        use_irq: Option<bool>,
    },
    /// InListPassiveTarget (0x4A)
    InListPassiveTarget {
        /// MaxTg, 1 or 2
        max_targets: u8,
        /// BrTy
        baud_rate: BaudRate,
    },
}

impl Command {
    /// SAMConfiguration as the driver issues it: normal mode, 1 s timeout,
    /// no IRQ byte (3-byte payload).
    pub const SAM_NORMAL: Self = Self::SamConfiguration {
        mode: SamMode::Normal,
        timeout: SAM_DEFAULT_TIMEOUT,
        use_irq: None,
    };

    /// InListPassiveTarget for exactly one target at `baud_rate`.
    pub fn detect_one(baud_rate: BaudRate) -> Self {
        Self::InListPassiveTarget {
            max_targets: DETECT_ONE_TARGET,
            baud_rate,
        }
    }

    /// Return the command code as defined by the PN532 user manual.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => crate::constants::PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => crate::constants::PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => crate::constants::PN532_CMD_INLIST_PASSIVE_TARGET,
        }
    }

    /// Response code the PN532 answers with (command code + 1).
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Number of frame bytes read back for this command's response.
    pub fn response_len(&self) -> usize {
        match self {
            Self::GetFirmwareVersion => responses::FIRMWARE_RESPONSE_LEN,
            Self::SamConfiguration { .. } => responses::SAM_RESPONSE_LEN,
            Self::InListPassiveTarget { .. } => responses::DETECTION_RESPONSE_LEN,
        }
    }

    /// Encode the command into the raw payload (command code + params).
    pub fn encode(&self) -> CommandPayload {
        match self {
            Self::GetFirmwareVersion => CommandPayload::new(&encode_get_firmware_version()),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => match use_irq {
                Some(irq) => {
                    CommandPayload::new(&encode_sam_configuration_with_irq(*mode, *timeout, *irq))
                }
                None => CommandPayload::new(&encode_sam_configuration(*mode, *timeout)),
            },
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => CommandPayload::new(&encode_in_list_passive_target(*max_targets, *baud_rate)),
        }
    }
}

/// Encoded command payload kept on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPayload {
    bytes: [u8; MAX_TYPED_PAYLOAD],
    len: usize,
}

impl CommandPayload {
    fn new(src: &[u8]) -> Self {
        let mut bytes = [0u8; MAX_TYPED_PAYLOAD];
        bytes[..src.len()].copy_from_slice(src);
        Self {
            bytes,
            len: src.len(),
        }
    }

    /// The encoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}
