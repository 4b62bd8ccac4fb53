#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::Command;
use libpn532::protocol::codec::encode_command_frame;
use libpn532::types::{BaudRate, SamMode};

#[test]
fn typed_commands_encode_to_captured_frames() {
    assert_eq!(
        encode_command_frame(&Command::GetFirmwareVersion).unwrap(),
        common::fixtures::get_firmware_command()
    );
    assert_eq!(
        encode_command_frame(&Command::SAM_NORMAL).unwrap(),
        common::fixtures::sam_command()
    );
    assert_eq!(
        encode_command_frame(&Command::detect_one(BaudRate::Iso14443A)).unwrap(),
        common::fixtures::in_list_command()
    );
}

#[test]
fn every_baud_rate_lands_in_brty() {
    for (baud, brty) in [
        (BaudRate::Iso14443A, 0x00),
        (BaudRate::FeliCa212, 0x01),
        (BaudRate::FeliCa424, 0x02),
        (BaudRate::Iso14443B, 0x03),
        (BaudRate::Jewel, 0x04),
    ] {
        let payload = Command::detect_one(baud).encode();
        assert_eq!(payload.as_slice(), &[0x4a, 0x01, brty]);
    }
}

#[test]
fn sam_configuration_fields() {
    let cmd = Command::SamConfiguration {
        mode: SamMode::VirtualCard,
        timeout: 0x00,
        use_irq: Some(false),
    };
    assert_eq!(cmd.encode().as_slice(), &[0x14, 0x02, 0x00, 0x00]);
    assert_eq!(cmd.response_code(), 0x15);
}
