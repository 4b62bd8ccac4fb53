#[path = "../common/mod.rs"]
mod common;

use libpn532::device::Device;
use libpn532::transport::mock::MockTransport;
use libpn532::utils::ms;
use libpn532::{Error, FirmwareVersion};

#[test]
fn firmware_version_from_captured_exchange() {
    common::init_logging();
    let mut m = MockTransport::new();
    common::helpers::seed_exchange(&mut m, &common::fixtures::firmware_frame());

    let mut dev = Device::new_with_transport(&mut m);
    let v = dev.get_firmware_version(ms(1000)).unwrap();
    assert_eq!(v, FirmwareVersion::from_bytes([0x32, 0x01, 0x06, 0x07]));
    drop(dev);

    assert_eq!(m.writes, vec![(0x24, common::fixtures::get_firmware_command())]);
}

#[test]
fn repeated_queries_agree() {
    let mut m = MockTransport::new();
    for _ in 0..4 {
        common::helpers::seed_exchange(&mut m, &common::fixtures::firmware_frame());
    }
    let mut dev = Device::new_with_transport(m);
    let versions: Vec<_> = (0..4)
        .map(|_| dev.get_firmware_version(ms(100)).unwrap())
        .collect();
    assert!(versions.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn firmware_query_works_after_initialize() {
    let mut dev = common::helpers::initialized_mock_device(vec![]).unwrap();
    common::helpers::seed_exchange(dev.transport_mut(), &common::fixtures::firmware_frame());
    let v = dev.get_firmware_version(ms(100)).unwrap();
    assert_eq!(v.as_u32(), 0x3201_0607);
}

#[test]
fn write_error_surfaces_as_io() {
    let mut m = MockTransport::new();
    m.set_write_failures(1);
    let mut dev = Device::new_with_transport(&mut m);
    match dev.get_firmware_version(ms(100)) {
        Err(Error::Io(msg)) => assert!(msg.contains("write")),
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn short_garbage_response_is_protocol_error() {
    let mut m = MockTransport::new();
    m.push_ack();
    m.push_response(&common::fixtures::sam_ok_frame());

    let mut dev = Device::new_with_transport(&mut m);
    let err = dev.get_firmware_version(ms(100)).unwrap_err();
    assert!(matches!(err, Error::Protocol(_)), "got {:?}", err);
}
