//! Assembly of the device macro buffer.
//!
//! Devices keep all macros in one buffer: each macro is followed by a `0x00`
//! terminator, unused macros are empty (just the terminator) and the rest of the
//! buffer is zero filled.

use keymacro_types::protocol::vial::MACRO_TERMINATOR;
use log::debug;

use crate::error::{MacroError, MacroResult};
use crate::program::MacroProgram;

/// Default macro space size in bytes
pub const MACRO_SPACE_SIZE: usize = 256;

/// Default number of macros
pub const NUM_MACRO: usize = 16;

/// Layout of a device's macro buffer
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MacroBuffer {
    /// Number of macros the device holds
    pub macro_count: usize,
    /// Size of the buffer in bytes
    pub macro_space_size: usize,
}

impl Default for MacroBuffer {
    fn default() -> Self {
        Self {
            macro_count: NUM_MACRO,
            macro_space_size: MACRO_SPACE_SIZE,
        }
    }
}

impl MacroBuffer {
    pub fn new(macro_count: usize, macro_space_size: usize) -> Self {
        Self {
            macro_count,
            macro_space_size,
        }
    }

    /// Bytes needed by `programs`, including every terminator, before padding
    pub fn required_size(&self, programs: &[MacroProgram], vial_protocol: u32) -> MacroResult<usize> {
        Ok(self.fold_to_binary(programs, vial_protocol)?.len())
    }

    /// Serialize `programs` into a buffer of exactly `macro_space_size` bytes
    pub fn serialize(&self, programs: &[MacroProgram], vial_protocol: u32) -> MacroResult<Vec<u8>> {
        let mut buffer = self.fold_to_binary(programs, vial_protocol)?;
        if buffer.len() > self.macro_space_size {
            return Err(MacroError::BufferOverflow {
                required: buffer.len(),
                capacity: self.macro_space_size,
            });
        }
        debug!(
            "Serialized {} macros into {}/{} bytes",
            programs.len(),
            buffer.len(),
            self.macro_space_size
        );
        buffer.resize(self.macro_space_size, 0);
        Ok(buffer)
    }

    /// Encode and terminate every program, then add empty macros up to `macro_count`
    fn fold_to_binary(&self, programs: &[MacroProgram], vial_protocol: u32) -> MacroResult<Vec<u8>> {
        if programs.len() > self.macro_count {
            return Err(MacroError::TooManyMacros {
                count: programs.len(),
                capacity: self.macro_count,
            });
        }
        let mut buffer = Vec::with_capacity(self.macro_space_size);
        for program in programs {
            program.serialize_into(vial_protocol, &mut buffer)?;
            buffer.push(MACRO_TERMINATOR);
        }
        buffer.resize(buffer.len() + self.macro_count - programs.len(), MACRO_TERMINATOR);
        Ok(buffer)
    }
}

#[cfg(test)]
mod test {
    use keymacro_types::keycode::KeyCode;

    use super::*;
    use crate::action::MacroAction;

    #[test]
    fn test_define_one_macro_sequence() {
        let programs = [MacroProgram::from(vec![
            MacroAction::Down(vec![KeyCode::LShift]),
            MacroAction::Tap(vec![KeyCode::P]),
            MacroAction::Up(vec![KeyCode::LShift]),
            MacroAction::Tap(vec![KeyCode::A, KeyCode::T]),
        ])];
        let buffer = MacroBuffer::new(1, 32).serialize(&programs, 6).unwrap();
        let result: [u8; 15] = [
            0x01, 0x02, 0xE1, 0x01, 0x01, 0x13, 0x01, 0x03, 0xE1, 0x01, 0x01, 0x04, 0x01, 0x17, 0x00,
        ];
        let mut result_filled = [0; 32];
        result_filled[..result.len()].copy_from_slice(&result);
        assert_eq!(buffer, result_filled);
    }

    #[test]
    fn test_define_macros_with_empty_slots() {
        let programs = [
            MacroProgram::from(vec![MacroAction::text("Hi")]),
            MacroProgram::new(),
            MacroProgram::from(vec![MacroAction::Delay(300)]),
        ];
        let layout = MacroBuffer::new(4, 12);
        // "Hi\0" + "\0" + delay record + "\0" + one unused macro
        assert_eq!(layout.required_size(&programs, 6).unwrap(), 10);
        assert_eq!(
            layout.serialize(&programs, 6).unwrap(),
            vec![0x48, 0x69, 0x00, 0x00, 0x01, 0x04, 46, 2, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_too_many_macros() {
        let programs = [MacroProgram::new(), MacroProgram::new()];
        assert_eq!(
            MacroBuffer::new(1, 256).serialize(&programs, 6),
            Err(MacroError::TooManyMacros { count: 2, capacity: 1 })
        );
    }

    #[test]
    fn test_buffer_overflow() {
        let programs = [MacroProgram::from(vec![MacroAction::text("0123456789")])];
        assert_eq!(
            MacroBuffer::new(2, 8).serialize(&programs, 6),
            Err(MacroError::BufferOverflow {
                required: 12,
                capacity: 8
            })
        );
    }

    #[test]
    fn test_exact_fit() {
        let programs = [MacroProgram::from(vec![MacroAction::text("abc")])];
        assert_eq!(
            MacroBuffer::new(1, 4).serialize(&programs, 6).unwrap(),
            vec![b'a', b'b', b'c', 0x00]
        );
    }

    #[test]
    fn test_long_delay_is_rejected() {
        // The record of a 65025ms delay would contain a terminator and split the macro
        let programs = [
            MacroProgram::from(vec![MacroAction::Delay(65025)]),
            MacroProgram::from(vec![MacroAction::text("a")]),
        ];
        assert_eq!(
            MacroBuffer::new(2, 8).serialize(&programs, 6),
            Err(MacroError::DelayOutOfRange {
                delay: 65025,
                max: 65024
            })
        );
    }

    #[test]
    fn test_encoding_error_propagates() {
        let programs = [MacroProgram::from(vec![MacroAction::Delay(1)])];
        assert!(matches!(
            MacroBuffer::default().serialize(&programs, 1),
            Err(MacroError::UnsupportedForProtocolVersion { .. })
        ));
    }
}
