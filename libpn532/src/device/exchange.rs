// libpn532/src/device/exchange.rs

//! Bus-independent steps of one exchange, shared by the blocking and the
//! async session. The sessions only own the I/O and the waiting.

use std::time::Duration;

use log::{debug, trace};

use crate::constants::{PN532_CMD_INLIST_PASSIVE_TARGET, PN532_I2C_READY, PN532_PACKET_MAX_SIZE};
use crate::device::config::DeviceConfig;
use crate::device::state::{Awaiting, Phase};
use crate::protocol::responses::DETECTION_RESPONSE_LEN;
use crate::protocol::{Frame, codec, parser};
use crate::utils::HexSlice;
use crate::{Error, Result};

/// Scratch space: the largest frame plus the leading readiness byte.
pub(crate) const SCRATCH_LEN: usize = PN532_PACKET_MAX_SIZE + 1;

/// Polls are never closer together than this, whatever the configuration.
pub(crate) const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Detection frame for a 7-byte UID including DCS and postamble. Read
/// instead of the short form when responses are fully verified.
pub(crate) const DETECTION_FRAME_MAX_LEN: usize = DETECTION_RESPONSE_LEN + 2;

/// Response code of InListPassiveTarget
pub(crate) const DETECTION_RESPONSE_CODE: u8 = PN532_CMD_INLIST_PASSIVE_TARGET + 1;

/// Step to the next phase of the exchange.
pub(crate) fn advance(phase: &mut Phase) {
    let next = phase.next();
    jump(phase, next);
}

/// Enter `to` directly: the start of an exchange, or a detection start
/// that stops after the ACK.
pub(crate) fn jump(phase: &mut Phase, to: Phase) {
    trace!("{} -> {}", phase, to);
    *phase = to;
}

pub(crate) fn poll_interval(config: &DeviceConfig) -> Duration {
    config.poll_interval.max(MIN_POLL_INTERVAL)
}

/// Interpret one readiness poll. A failed poll counts as "not ready".
pub(crate) fn is_ready(poll: Result<()>, status: u8, awaiting: Awaiting, polls: u32) -> bool {
    match poll {
        Ok(()) if status == PN532_I2C_READY => {
            trace!("ready for {} after {} poll(s)", awaiting, polls);
            true
        }
        Ok(()) => false,
        Err(e) => {
            trace!("readiness poll {} failed: {}", polls, e);
            false
        }
    }
}

pub(crate) fn timed_out(awaiting: Awaiting, polls: u32) -> Error {
    debug!("no readiness for {} after {} poll(s)", awaiting, polls);
    Error::Timeout(awaiting)
}

/// Check the ACK read that follows a command.
pub(crate) fn check_ack(raw: &[u8]) -> Result<()> {
    trace!("<- {}", HexSlice(raw));
    codec::check_ack(raw)
}

/// Reject response lengths the scratch buffer cannot hold.
pub(crate) fn check_response_len(len: usize) -> Result<()> {
    if len == 0 || len + 1 > SCRATCH_LEN {
        return Err(Error::InvalidArgument(format!(
            "response length {} outside 1..={}",
            len,
            SCRATCH_LEN - 1
        )));
    }
    Ok(())
}

/// Strip the readiness byte from a raw response read. In strict mode the
/// frame is fully verified and must carry `response_code`.
pub(crate) fn checked_response(
    raw: &[u8],
    len: usize,
    response_code: u8,
    strict: bool,
) -> Result<&[u8]> {
    let frame = codec::decode_response(raw, len)?;
    trace!("<- {}", HexSlice(frame));
    if strict {
        let payload = Frame::decode(frame)?;
        parser::expect_response_code(payload, 0, response_code)?;
    }
    Ok(frame)
}

/// Bytes to read back for a detection result.
pub(crate) fn detection_read_len(config: &DeviceConfig) -> usize {
    if config.verify_checksums {
        DETECTION_FRAME_MAX_LEN
    } else {
        DETECTION_RESPONSE_LEN
    }
}
