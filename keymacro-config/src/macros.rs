use keymacro::protocol::vial::SequenceCode;
use keymacro::{MacroAction, MacroBuffer, MacroProgram};
use keymacro_types::keycode::KeyCode;
use log::debug;

use crate::{ConfigError, ConfigResult, KeycodeList, KeymacroTomlConfig, MacroConfig, MacroOperation};

impl MacroConfig {
    /// Resolve keycode names and build the macro program.
    ///
    /// `macro_index` is only used for error reporting.
    pub fn to_program(&self, macro_index: usize) -> ConfigResult<MacroProgram> {
        self.operations
            .iter()
            .enumerate()
            .map(|(operation_index, op)| -> ConfigResult<MacroAction> {
                let resolve = |keycodes: &KeycodeList| resolve_all(keycodes, macro_index, operation_index);
                Ok(match op {
                    MacroOperation::Tap { keycodes } => MacroAction::sequence(SequenceCode::Tap, resolve(keycodes)?),
                    MacroOperation::Down { keycodes } => MacroAction::sequence(SequenceCode::Down, resolve(keycodes)?),
                    MacroOperation::Up { keycodes } => MacroAction::sequence(SequenceCode::Up, resolve(keycodes)?),
                    MacroOperation::Delay { duration } => MacroAction::Delay(duration.0),
                    MacroOperation::Text { text } => MacroAction::Text(text.clone()),
                })
            })
            .collect()
    }
}

fn resolve_all(keycodes: &KeycodeList, macro_index: usize, operation_index: usize) -> ConfigResult<Vec<KeyCode>> {
    keycodes
        .names()
        .iter()
        .map(|name| {
            crate::resolve_keycode(name).ok_or_else(|| ConfigError::UnknownKeycode {
                macro_index,
                operation_index,
                name: name.clone(),
            })
        })
        .collect()
}

impl KeymacroTomlConfig {
    /// Buffer layout of the configured device
    pub fn get_macro_buffer(&self) -> MacroBuffer {
        MacroBuffer::new(self.keymacro.macro_count, self.keymacro.macro_space_size)
    }

    /// All configured macros as programs, in macro index order
    pub fn get_macro_programs(&self) -> ConfigResult<Vec<MacroProgram>> {
        self.macros
            .iter()
            .enumerate()
            .map(|(i, m)| m.to_program(i))
            .collect()
    }

    /// Encode every macro into the device macro buffer.
    ///
    /// `vial_protocol` overrides the version from the `[keymacro]` section.
    pub fn serialize_macros(&self, vial_protocol: Option<u32>) -> ConfigResult<Vec<u8>> {
        let vial_protocol = vial_protocol.unwrap_or(self.keymacro.vial_protocol);
        let programs = self.get_macro_programs()?;
        debug!(
            "Encoding {} macros for vial protocol {}",
            programs.len(),
            vial_protocol
        );
        Ok(self.get_macro_buffer().serialize(&programs, vial_protocol)?)
    }
}
