#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::transport::Transport;
use libpn532::transport::mock::MockTransport;

#[test]
fn read_failure_and_recovery() {
    let mut m = MockTransport::new();
    common::helpers::seed_exchange(&mut m, &common::fixtures::sam_ok_frame());
    m.set_read_failures(1);

    // First data read should fail (simulated)
    let mut buf = [0u8; 7];
    assert!(matches!(m.read(0x24, &mut buf), Err(Error::Io(_))));

    // Second read should return the queued ack
    m.read(0x24, &mut buf).unwrap();
    assert_eq!(buf[4], 0x00);
    assert_eq!(buf[5], 0xff);
}

#[test]
fn readiness_polls_bypass_read_failures() {
    let mut m = MockTransport::new();
    m.set_read_failures(1);
    let mut status = [0u8; 1];
    m.read(0x24, &mut status).unwrap();
    assert_eq!(m.read_failures, 1);
}

#[test]
fn exhausted_queue_is_io_error() {
    let mut m = MockTransport::new();
    let mut buf = [0u8; 9];
    let err = m.read(0x24, &mut buf).unwrap_err();
    assert!(err.is_bus_error());
    assert!(!err.is_timeout());
}
