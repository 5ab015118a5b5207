//! Binary encoding of macro actions.
//!
//! | Action     | vial_protocol 1        | vial_protocol >= 2            |
//! |------------|------------------------|-------------------------------|
//! | Text(s)    | utf8(s)                | utf8(s)                       |
//! | Tap(seq)   | `01 code` per key      | `01`, then `01 code` per key  |
//! | Down(seq)  | `02 code` per key      | `01`, then `02 code` per key  |
//! | Up(seq)    | `03 code` per key      | `01`, then `03 code` per key  |
//! | Delay(ms)  | unsupported            | `01 04 lo hi`                 |
//!
//! Text has neither a length prefix nor a terminator, entries are delimited by the macro buffer.

use keymacro_types::keycode::KeyCode;
use keymacro_types::protocol::vial::{
    DELAY_RECORD_SIZE, MACRO_SEQUENCE_MARKER, MACRO_TERMINATOR, MAX_DELAY_MS, SS_DELAY_CODE, SS_QMK_PREFIX,
    SequenceCode, VIAL_PROTOCOL_DYNAMIC, supports_qmk_prefix,
};
use log::warn;

use crate::action::{ActionKind, MacroAction};
use crate::error::{MacroError, MacroResult};

impl MacroAction {
    /// Encode the action for a device speaking `vial_protocol`
    pub fn serialize(&self, vial_protocol: u32) -> MacroResult<Vec<u8>> {
        let mut out = Vec::new();
        serialize_into(self, vial_protocol, &mut out)?;
        Ok(out)
    }
}

/// Append the encoding of `action` to `out`.
///
/// On error nothing is appended.
pub fn serialize_into(action: &MacroAction, vial_protocol: u32, out: &mut Vec<u8>) -> MacroResult<()> {
    match action {
        MacroAction::Text(text) => {
            if text.as_bytes().contains(&MACRO_TERMINATOR) {
                warn!("Macro text contains a NUL byte, the device will split the macro there");
            }
            out.extend_from_slice(text.as_bytes());
        }
        MacroAction::Tap(sequence) => serialize_sequence(SequenceCode::Tap, sequence, vial_protocol, out),
        MacroAction::Down(sequence) => serialize_sequence(SequenceCode::Down, sequence, vial_protocol, out),
        MacroAction::Up(sequence) => serialize_sequence(SequenceCode::Up, sequence, vial_protocol, out),
        MacroAction::Delay(delay_ms) => out.extend_from_slice(&serialize_delay(*delay_ms, vial_protocol)?),
    }
    Ok(())
}

fn serialize_sequence(code: SequenceCode, sequence: &[KeyCode], vial_protocol: u32, out: &mut Vec<u8>) {
    if supports_qmk_prefix(vial_protocol) {
        out.push(MACRO_SEQUENCE_MARKER);
    }
    out.reserve(sequence.len() * 2);
    for keycode in sequence {
        out.push(code.prefix());
        out.push(keycode.code());
    }
}

/// Encode a delay record.
///
/// Both bytes are biased by one so the record never contains `0x00`, the split is base 255.
/// Delays above [`MAX_DELAY_MS`] would overflow the high byte into the macro terminator and are rejected.
pub fn serialize_delay(delay_ms: u32, vial_protocol: u32) -> MacroResult<[u8; DELAY_RECORD_SIZE]> {
    if !supports_qmk_prefix(vial_protocol) {
        return Err(MacroError::UnsupportedForProtocolVersion {
            action: ActionKind::Delay,
            protocol: vial_protocol,
            required: VIAL_PROTOCOL_DYNAMIC,
        });
    }
    if delay_ms > MAX_DELAY_MS {
        return Err(MacroError::DelayOutOfRange {
            delay: delay_ms,
            max: MAX_DELAY_MS,
        });
    }
    let low = ((delay_ms % 255) + 1) as u8;
    let high = ((delay_ms / 255) + 1) as u8;
    Ok([SS_QMK_PREFIX, SS_DELAY_CODE, low, high])
}

/// Delay encoded by a record's low and high byte
pub fn delay_from_record(low: u8, high: u8) -> u32 {
    (low as u32).saturating_sub(1) + (high as u32).saturating_sub(1) * 255
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_serialize_text() {
        let action = MacroAction::text("Hi ✓");
        let bytes = action.serialize(6).unwrap();
        assert_eq!(bytes, "Hi ✓".as_bytes());
        assert_eq!(String::from_utf8(bytes).unwrap(), "Hi ✓");
        assert_eq!(action.serialize(1).unwrap(), "Hi ✓".as_bytes());
    }

    #[test]
    fn test_serialize_empty_tap() {
        assert_eq!(MacroAction::Tap(vec![]).serialize(2).unwrap(), vec![0x01]);
        assert_eq!(MacroAction::Tap(vec![]).serialize(1).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_serialize_down_a() {
        let action = MacroAction::Down(vec![KeyCode::A]);
        assert_eq!(action.serialize(2).unwrap(), vec![0x01, 0x02, 0x04]);
        assert_eq!(action.serialize(1).unwrap(), vec![0x02, 0x04]);
    }

    #[test]
    fn test_serialize_sequence_keeps_order() {
        let action = MacroAction::Up(vec![KeyCode::LShift, KeyCode::B, KeyCode::B, KeyCode::A]);
        assert_eq!(
            action.serialize(6).unwrap(),
            vec![0x01, 0x03, 0xE1, 0x03, 0x05, 0x03, 0x05, 0x03, 0x04]
        );
        assert_eq!(
            action.serialize(0).unwrap(),
            vec![0x03, 0xE1, 0x03, 0x05, 0x03, 0x05, 0x03, 0x04]
        );
    }

    #[test]
    fn test_serialize_delay() {
        assert_eq!(MacroAction::Delay(300).serialize(2).unwrap(), vec![1, 4, 46, 2]);
        assert_eq!(MacroAction::Delay(0).serialize(2).unwrap(), vec![1, 4, 1, 1]);
        assert_eq!(MacroAction::Delay(255).serialize(2).unwrap(), vec![1, 4, 1, 2]);
        assert_eq!(MacroAction::Delay(MAX_DELAY_MS).serialize(2).unwrap(), vec![1, 4, 255, 255]);
    }

    #[test]
    fn test_serialize_delay_out_of_range() {
        // 65025 = 255 * 255, the high byte would be 256
        assert_eq!(
            serialize_delay(65025, 6),
            Err(MacroError::DelayOutOfRange {
                delay: 65025,
                max: MAX_DELAY_MS
            })
        );
        assert!(matches!(
            MacroAction::Delay(u32::MAX).serialize(2),
            Err(MacroError::DelayOutOfRange { .. })
        ));
        // Protocol check comes first
        assert!(matches!(
            serialize_delay(65025, 1),
            Err(MacroError::UnsupportedForProtocolVersion { .. })
        ));
    }

    #[test]
    fn test_serialize_delay_unsupported() {
        let err = MacroAction::Delay(100).serialize(1).unwrap_err();
        assert_eq!(
            err,
            MacroError::UnsupportedForProtocolVersion {
                action: ActionKind::Delay,
                protocol: 1,
                required: 2,
            }
        );
        // Deterministic, a retry fails the same way
        assert_eq!(MacroAction::Delay(100).serialize(1).unwrap_err(), err);
    }

    #[test]
    fn test_serialize_into_leaves_output_on_error() {
        let mut out = vec![0xAA];
        assert!(serialize_into(&MacroAction::Delay(5), 1, &mut out).is_err());
        assert_eq!(out, vec![0xAA]);
    }

    #[test]
    fn test_delay_from_record() {
        for delay in [0, 1, 254, 255, 300, 1000, 65024] {
            let record = serialize_delay(delay, 2).unwrap();
            assert_eq!(delay_from_record(record[2], record[3]), delay);
        }
    }
}
