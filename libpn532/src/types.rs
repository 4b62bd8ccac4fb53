// libpn532/src/types.rs

//! Value types exchanged with the chip.

use crate::Error;
use std::convert::TryFrom;

use derive_more::Display;

/// Largest NFCID1 a single ISO14443A target can report (triple size is 10,
/// but the 20-byte detection read used by the driver leaves room for 7).
pub const MAX_UID_LEN: usize = 7;

/// Firmware information returned by GetFirmwareVersion.
///
/// `chip` is the IC family (0x32 for a PN532), `major`/`minor` the firmware
/// version and `build` the support bitfield reported by the chip.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "PN5{:x} firmware {}.{} (support {:#04x})", chip, major, minor, build)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    /// IC family
    pub chip: u8,
    /// Firmware version
    pub major: u8,
    /// Firmware revision
    pub minor: u8,
    /// Support bitfield
    pub build: u8,
}

impl FirmwareVersion {
    /// Build from the four bytes following the response code.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            chip: bytes[0],
            major: bytes[1],
            minor: bytes[2],
            build: bytes[3],
        }
    }

    /// Packed form: `(chip << 24) | (major << 16) | (minor << 8) | build`
    pub fn as_u32(&self) -> u32 {
        u32::from_be_bytes([self.chip, self.major, self.minor, self.build])
    }

    /// Inverse of [`as_u32`](Self::as_u32).
    pub fn from_u32(packed: u32) -> Self {
        Self::from_bytes(packed.to_be_bytes())
    }
}

impl TryFrom<&[u8]> for FirmwareVersion {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 4] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 4,
            actual: bytes.len(),
        })?;
        Ok(Self::from_bytes(arr))
    }
}

/// UID of a detected passive target. Stored inline so detection never
/// allocates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetUid {
    bytes: [u8; MAX_UID_LEN],
    len: u8,
}

impl TargetUid {
    /// The UID bytes as reported by the target.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// UID length in bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True for a zero-length UID.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex, bytes separated by spaces.
    pub fn to_hex(&self) -> String {
        crate::utils::HexSlice(self.as_bytes()).to_string()
    }
}

impl TryFrom<&[u8]> for TargetUid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

impl std::fmt::Debug for TargetUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TargetUid({})", crate::utils::HexSlice(self.as_bytes()))
    }
}

impl std::fmt::Display for TargetUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::utils::HexSlice(self.as_bytes()), f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TargetUid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

/// Bit rate / modulation passed to InListPassiveTarget (BrTy)
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaudRate {
    /// 106 kbps ISO/IEC 14443 Type A (MIFARE)
    #[default]
    #[display(fmt = "106 kbps type A")]
    Iso14443A = 0x00,
    /// 212 kbps FeliCa
    #[display(fmt = "212 kbps FeliCa")]
    FeliCa212 = 0x01,
    /// 424 kbps FeliCa
    #[display(fmt = "424 kbps FeliCa")]
    FeliCa424 = 0x02,
    /// 106 kbps ISO/IEC 14443-3 Type B
    #[display(fmt = "106 kbps type B")]
    Iso14443B = 0x03,
    /// 106 kbps Innovision Jewel
    #[display(fmt = "106 kbps Jewel")]
    Jewel = 0x04,
}

impl BaudRate {
    /// Map a BrTy byte back to a baud rate.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0x00 => Some(Self::Iso14443A),
            0x01 => Some(Self::FeliCa212),
            0x02 => Some(Self::FeliCa424),
            0x03 => Some(Self::Iso14443B),
            0x04 => Some(Self::Jewel),
            _ => None,
        }
    }
}

/// SAM configuration mode
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamMode {
    /// SAM not used
    #[default]
    Normal = 0x01,
    /// Virtual card, released after the timeout
    VirtualCard = 0x02,
    /// Wired card
    WiredCard = 0x03,
    /// Dual card
    DualCard = 0x04,
}
