// libpn532/src/protocol/mod.rs

//! PN532 frame codec, command encoders and response decoders.

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use codec::{decode_response, encode_command, verify_ack};
pub use commands::{Command, CommandPayload};
pub use frame::Frame;
pub use responses::*;
