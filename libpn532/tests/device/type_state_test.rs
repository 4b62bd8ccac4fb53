#[path = "../common/mod.rs"]
mod common;

use libpn532::device::{Device, DeviceBuilder, DeviceConfig, Phase};
use libpn532::transport::mock::MockTransport;
use libpn532::transport::traits::Transport;

#[test]
fn initialize_transitions_and_keeps_config() {
    let mut m = MockTransport::new();
    common::helpers::seed_exchange(&mut m, &common::fixtures::sam_ok_frame());

    let boxed: Box<dyn Transport> = Box::new(m);
    let config = DeviceConfig::default().with_address(0x24);
    let device = Device::with_config(boxed, config);

    // Uninitialized device exposes its configuration
    assert_eq!(device.config().address, 0x24);
    assert_eq!(device.phase(), Phase::Idle);

    // Transition to initialized
    let initialized = device.initialize().unwrap();
    assert_eq!(initialized.config().address, 0x24);
    assert_eq!(initialized.phase(), Phase::Done);
}

#[test]
fn builder_then_initialize() {
    let mut m = MockTransport::new();
    common::helpers::seed_exchange(&mut m, &common::fixtures::sam_ok_frame());

    let device = DeviceBuilder::new()
        .with_transport(m)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();

    let transport = device.release();
    assert_eq!(transport.writes.len(), 1);
    assert_eq!(transport.writes[0].1, common::fixtures::sam_command());
}

#[test]
fn failed_initialize_consumes_nothing_but_the_exchange() {
    let mut m = MockTransport::new();
    let mut rejected = common::fixtures::sam_ok_frame();
    rejected[6] = 0x00;
    common::helpers::seed_exchange(&mut m, &rejected);

    assert!(Device::new_with_transport(&mut m).initialize().is_err());
    assert!(m.reads.is_empty());
}
