// Timing-sensitive tests run serially so they do not compete for the CPU.

#[path = "../common/mod.rs"]
mod common;

use std::time::Instant;

use libpn532::device::{Awaiting, Device, DeviceConfig};
use libpn532::transport::Transport;
use libpn532::transport::mock::MockTransport;
use libpn532::utils::ms;
use libpn532::Error;
use serial_test::serial;

#[test]
#[serial]
fn timeout_is_bounded_by_one_poll_interval() {
    let poll = ms(10);
    let timeout = ms(100);
    let mut m = MockTransport::never_ready();
    let mut dev = Device::with_config(&mut m, DeviceConfig::default().with_poll_interval(poll));

    let started = Instant::now();
    let err = dev.get_firmware_version(timeout).unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, Error::Timeout(Awaiting::Ack)), "got {:?}", err);
    assert!(elapsed >= timeout, "returned early after {:?}", elapsed);
    assert!(elapsed < timeout + poll + ms(150), "took {:?}", elapsed);
    drop(dev);

    // Polled at the configured cadence rather than spinning
    assert!(m.polls >= 5 && m.polls <= 15, "polls = {}", m.polls);
    assert!(m.reads.is_empty());
}

#[test]
#[serial]
fn detection_read_times_out_with_empty_field() {
    let mut dev = common::helpers::initialized_mock_device(vec![]).unwrap();
    dev.transport_mut().idle_status = 0x00;

    match dev.read_detected_target(ms(30)) {
        Err(Error::Timeout(Awaiting::Response)) => {}
        other => panic!("expected response timeout, got {:?}", other),
    }
}

#[test]
#[serial]
fn ready_after_scripted_busy_polls() {
    let mut m = MockTransport::new();
    m.script_readiness(&[0x00, 0x00, 0x01, 0x00, 0x01]);
    common::helpers::seed_exchange(&mut m, &common::fixtures::firmware_frame());

    let mut dev = Device::new_with_transport(&mut m);
    let started = Instant::now();
    dev.get_firmware_version(ms(1000)).unwrap();
    // three 10 ms sleeps in total
    assert!(started.elapsed() >= ms(30));
    drop(dev);
    assert_eq!(m.polls, 5);
}

#[test]
#[serial]
fn failed_polls_count_as_busy() {
    struct Flaky {
        inner: MockTransport,
        poll_errors: usize,
    }

    impl Transport for Flaky {
        fn write(&mut self, address: u8, data: &[u8]) -> libpn532::Result<()> {
            self.inner.write(address, data)
        }

        fn read(&mut self, address: u8, buffer: &mut [u8]) -> libpn532::Result<()> {
            if buffer.len() == 1 && self.poll_errors > 0 {
                self.poll_errors -= 1;
                return Err(Error::Io("nack on readiness poll".into()));
            }
            self.inner.read(address, buffer)
        }
    }

    let mut inner = MockTransport::new();
    common::helpers::seed_exchange(&mut inner, &common::fixtures::firmware_frame());
    let mut dev = Device::new_with_transport(Flaky {
        inner,
        poll_errors: 2,
    });
    assert!(dev.get_firmware_version(ms(500)).is_ok());
}
