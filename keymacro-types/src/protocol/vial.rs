//! Vial macro protocol

use strum::FromRepr;

/// Latest Vial protocol version known to this crate.
pub const VIAL_PROTOCOL_VERSION: u32 = 6;

/// First Vial protocol version using the QMK-prefixed macro encoding.
///
/// Delays and the leading sequence marker are only available from this version on.
pub const VIAL_PROTOCOL_DYNAMIC: u32 = 2;

/// Prefix of every extended macro record.
pub const SS_QMK_PREFIX: u8 = 0x01;
pub const SS_TAP_CODE: u8 = 0x01;
pub const SS_DOWN_CODE: u8 = 0x02;
pub const SS_UP_CODE: u8 = 0x03;
pub const SS_DELAY_CODE: u8 = 0x04;

/// Leading byte of a sequence entry for protocol version 2 and later.
pub const MACRO_SEQUENCE_MARKER: u8 = SS_QMK_PREFIX;

/// Terminator between macros inside the firmware macro buffer.
pub const MACRO_TERMINATOR: u8 = 0x00;

/// Largest delay, in ms, whose high byte still fits after the +1 bias.
pub const MAX_DELAY_MS: u32 = 254 * 255 + 254;

/// Length of an encoded delay record.
pub const DELAY_RECORD_SIZE: usize = 4;

/// Action codes of the keycode sequence records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SequenceCode {
    Tap = SS_TAP_CODE,
    Down = SS_DOWN_CODE,
    Up = SS_UP_CODE,
}

impl SequenceCode {
    /// The prefix byte written before each keycode of the sequence
    pub const fn prefix(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for SequenceCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Return original value when there's an error
        Self::from_repr(value).ok_or(value)
    }
}

/// Whether `vial_protocol` supports the prefixed encoding
pub const fn supports_qmk_prefix(vial_protocol: u32) -> bool {
    vial_protocol >= VIAL_PROTOCOL_DYNAMIC
}
