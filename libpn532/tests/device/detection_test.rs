#[path = "../common/mod.rs"]
mod common;

use libpn532::device::DeviceConfig;
use libpn532::types::BaudRate;
use libpn532::utils::ms;
use libpn532::{Device, Error, ProtocolError};
use libpn532::transport::mock::MockTransport;

fn with_readiness(frame: Vec<u8>) -> Vec<u8> {
    let mut raw = vec![0x01];
    raw.extend_from_slice(&frame);
    raw
}

#[test]
fn start_detection_writes_sam_then_in_list() {
    common::init_logging();
    let mut dev = common::helpers::initialized_mock_device(vec![]).unwrap();
    common::helpers::seed_exchange(dev.transport_mut(), &common::fixtures::sam_ok_frame());
    dev.transport_mut().push_ack();

    dev.start_passive_target_detection(BaudRate::Iso14443A).unwrap();

    let frames = dev.transport().written_frames();
    assert_eq!(
        frames,
        vec![
            &common::fixtures::sam_command()[..],
            &common::fixtures::sam_command()[..],
            &common::fixtures::in_list_command()[..],
        ]
    );
}

#[test]
fn start_detection_propagates_sam_rejection() {
    let mut dev = common::helpers::initialized_mock_device(vec![]).unwrap();
    let mut rejected = common::fixtures::sam_ok_frame();
    rejected[6] = 0x01;
    common::helpers::seed_exchange(dev.transport_mut(), &rejected);

    match dev.start_passive_target_detection(BaudRate::Iso14443A) {
        Err(Error::Protocol(ProtocolError::ConfigRejected { actual: 0x01 })) => {}
        other => panic!("expected ConfigRejected, got {:?}", other),
    }
    // InListPassiveTarget was never sent
    assert_eq!(dev.transport().writes.len(), 2);
}

#[test]
fn read_single_target() {
    let mut dev = common::helpers::initialized_mock_device(vec![with_readiness(
        common::fixtures::single_target_frame(),
    )])
    .unwrap();
    let uid = dev.read_detected_target(ms(200)).unwrap().unwrap();
    assert_eq!(uid.as_bytes(), &common::fixtures::sample_uid());
}

#[test]
fn read_seven_byte_uid() {
    let mut dev = common::helpers::initialized_mock_device(vec![with_readiness(
        common::fixtures::ntag_target_frame(),
    )])
    .unwrap();
    let uid = dev.read_detected_target(ms(200)).unwrap().unwrap();
    assert_eq!(uid.to_hex(), "04 68 95 71 fa 5c 64");
}

#[test]
fn read_with_empty_field_is_none() {
    let mut dev = common::helpers::initialized_mock_device(vec![with_readiness(
        common::fixtures::empty_field_frame(),
    )])
    .unwrap();
    assert_eq!(dev.read_detected_target(ms(200)).unwrap(), None);
}

#[test]
fn strict_mode_verifies_detection_frames() {
    let config = DeviceConfig::default().with_checksum_verification(true);
    let mut m = MockTransport::new();
    common::helpers::seed_exchange(&mut m, &common::fixtures::sam_ok_frame());
    m.push_response(&common::fixtures::ntag_target_frame());
    let mut corrupted = common::fixtures::single_target_frame();
    corrupted[13] ^= 0x01;
    m.push_response(&corrupted);

    let mut dev = Device::with_config(m, config).initialize().unwrap();
    assert_eq!(dev.read_detected_target(ms(100)).unwrap().unwrap().len(), 7);
    assert!(matches!(
        dev.read_detected_target(ms(100)),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn poll_target_in_one_call() {
    let mut dev = common::helpers::initialized_mock_device(vec![]).unwrap();
    let t = dev.transport_mut();
    common::helpers::seed_exchange(t, &common::fixtures::sam_ok_frame());
    t.push_ack();
    t.push_response(&common::fixtures::single_target_frame());

    let uid = dev.poll_target(BaudRate::Iso14443A, ms(200)).unwrap();
    assert_eq!(uid.unwrap().as_bytes(), &common::fixtures::sample_uid());
}
