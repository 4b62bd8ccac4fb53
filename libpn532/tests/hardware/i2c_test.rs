use libpn532::types::BaudRate;
use libpn532::utils::ms;
use serial_test::serial;

use super::common;

#[test]
#[serial]
#[ignore = "requires a PN532 on the I2C bus"]
fn firmware_version_reports_pn532() {
    let Some(mut device) = common::open_device().unwrap() else {
        eprintln!("no I2C bus at {}, skipping", common::bus_path());
        return;
    };
    let version = device.get_firmware_version(ms(1000)).unwrap();
    assert_eq!(version.chip, 0x32);
}

#[test]
#[serial]
#[ignore = "requires a PN532 and a card in the field"]
fn detect_card_within_five_seconds() {
    let Some(mut device) = common::open_and_initialize_device().unwrap() else {
        return;
    };
    device
        .start_passive_target_detection(BaudRate::Iso14443A)
        .unwrap();
    for _ in 0..50 {
        match device.read_detected_target(ms(100)) {
            Ok(Some(uid)) => {
                assert!(!uid.is_empty());
                return;
            }
            Ok(None) | Err(libpn532::Error::Timeout(_)) => {}
            Err(e) => panic!("{}", e),
        }
    }
    panic!("no card detected");
}
