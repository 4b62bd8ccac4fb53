//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build well-formed PN532 response frames and centralize
//! common MockTransport setup so tests across the crate and tests/
//! directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::PN532_PN532_TO_HOST;
use crate::device::{Device, Initialized};
use crate::protocol::Frame;
use crate::protocol::responses::SAM_CONFIGURED;
use crate::transport::mock::MockTransport;
use crate::Result;

fn response_frame(payload: &[u8]) -> Vec<u8> {
    match Frame::encode_with_tfi(PN532_PN532_TO_HOST, payload) {
        Ok(frame) => frame,
        Err(e) => panic!("test payload does not fit a frame: {}", e),
    }
}

/// GetFirmwareVersion response frame carrying IC, Ver, Rev and Support.
#[doc(hidden)]
pub fn firmware_response(version: [u8; 4]) -> Vec<u8> {
    let mut payload = vec![0x03];
    payload.extend_from_slice(&version);
    response_frame(&payload)
}

/// SAMConfiguration success frame.
#[doc(hidden)]
pub fn sam_response() -> Vec<u8> {
    response_frame(&[SAM_CONFIGURED])
}

/// InListPassiveTarget response frame for one ISO14443A target with `uid`,
/// or an empty field when `uid` is `None`.
#[doc(hidden)]
pub fn detection_response(uid: Option<&[u8]>) -> Vec<u8> {
    match uid {
        Some(uid) => {
            // 0x4B, NbTg, Tg, SENS_RES(2), SEL_RES, NFCIDLength, NFCID
            let mut payload = vec![0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, uid.len() as u8];
            payload.extend_from_slice(uid);
            response_frame(&payload)
        }
        None => response_frame(&[0x4B, 0x00]),
    }
}

/// Queue one full exchange (ACK then response) on a MockTransport.
#[doc(hidden)]
pub fn seed_exchange(mock: &mut MockTransport, response: &[u8]) {
    mock.push_ack();
    mock.push_response(response);
}

/// Convenience: create and initialize a Device<Initialized> backed by a
/// MockTransport seeded with the SAM handshake followed by `frames`.
#[doc(hidden)]
pub fn initialized_mock_device(frames: Vec<Vec<u8>>) -> Result<Device<MockTransport, Initialized>> {
    let mut mock = MockTransport::new();
    seed_exchange(&mut mock, &sam_response());
    for f in frames {
        mock.push_read(f);
    }
    Device::new_with_transport(mock).initialize()
}
