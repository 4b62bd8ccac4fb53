#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::{dcs, lcs};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(2), 0xfe);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    assert_eq!(dcs(&[0xd4, 0x02]), 0x2a);
    assert_eq!(dcs(&[0xd5, 0x15]), 0x16);
    assert_eq!(dcs(&[]), 0x00);
}

#[test]
fn captured_frames_have_consistent_checksums() {
    for frame in [
        common::fixtures::firmware_frame(),
        common::fixtures::sam_ok_frame(),
        common::fixtures::single_target_frame(),
        common::fixtures::empty_field_frame(),
    ] {
        let len = frame[3];
        assert_eq!(len.wrapping_add(frame[4]), 0);
        let body = &frame[5..5 + len as usize];
        let sum = body
            .iter()
            .fold(frame[5 + len as usize], |acc, b| acc.wrapping_add(*b));
        assert_eq!(sum, 0, "frame {:02x?}", frame);
    }
}
