// libpn532/src/protocol/checksum.rs

//! LEN and data checksums of PN532 information frames.

/// Compute Length Checksum (LCS) for a PN532 frame
/// LCS = 0x100 - LEN (mod 256), so that LEN + LCS == 0
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) over TFI + payload
/// DCS = 0x100 - (sum(data) & 0xff), so that sum(data) + DCS == 0
pub fn dcs(data: &[u8]) -> u8 {
    let sum = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
