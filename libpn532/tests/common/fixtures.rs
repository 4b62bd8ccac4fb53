// fixtures.rs: PN532 v1.6 frames shared by the integration tests

/// Parse a spaced hex string such as "00 00 ff".
pub fn bytes(hex_str: &str) -> Vec<u8> {
    let compact: String = hex_str.split_whitespace().collect();
    hex::decode(compact).unwrap()
}

pub fn firmware_frame() -> Vec<u8> {
    bytes("00 00 ff 06 fa d5 03 32 01 06 07 e8 00")
}

pub fn sam_ok_frame() -> Vec<u8> {
    bytes("00 00 ff 02 fe d5 15 16 00")
}

pub fn sample_uid() -> [u8; 4] {
    [0x8a, 0x3f, 0x2c, 0x11]
}

/// One MIFARE Classic target with a 4-byte UID.
pub fn single_target_frame() -> Vec<u8> {
    bytes("00 00 ff 0c f4 d5 4b 01 01 00 04 08 04 8a 3f 2c 11 c8 00")
}

/// One NTAG target with a 7-byte UID; the 20-byte read stops short of DCS.
pub fn ntag_target_frame() -> Vec<u8> {
    bytes("00 00 ff 0f f1 d5 4b 01 01 00 44 00 07 04 68 95 71 fa 5c 64 67 00")
}

pub fn empty_field_frame() -> Vec<u8> {
    bytes("00 00 ff 03 fd d5 4b 00 e0 00")
}

pub fn get_firmware_command() -> Vec<u8> {
    bytes("00 00 ff 02 fe d4 02 2a 00")
}

pub fn sam_command() -> Vec<u8> {
    bytes("00 00 ff 04 fc d4 14 01 14 03 00")
}

pub fn in_list_command() -> Vec<u8> {
    bytes("00 00 ff 04 fc d4 4a 01 00 e1 00")
}
