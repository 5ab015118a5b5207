//! Macro actions, the building blocks of a macro program.

use core::fmt;

use keymacro_types::keycode::KeyCode;
use keymacro_types::protocol::vial::SequenceCode;

use crate::error::{MacroError, MacroResult};

/// One step of a macro
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacroAction {
    /// Type the text
    Text(String),
    /// Press every key of the sequence
    Down(Vec<KeyCode>),
    /// Release every key of the sequence
    Up(Vec<KeyCode>),
    /// Press and release every key of the sequence
    Tap(Vec<KeyCode>),
    /// Wait, in milliseconds
    Delay(u32),
}

/// Kind of a [`MacroAction`], without its payload
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Text,
    Down,
    Up,
    Tap,
    Delay,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Text => "Text",
            ActionKind::Down => "Down",
            ActionKind::Up => "Up",
            ActionKind::Tap => "Tap",
            ActionKind::Delay => "Delay",
        };
        f.write_str(name)
    }
}

impl MacroAction {
    pub fn text(text: impl Into<String>) -> Self {
        MacroAction::Text(text.into())
    }

    /// Build a sequence action of `code` from raw keycode bytes.
    ///
    /// Fails with [`MacroError::UnknownKeycode`] if a byte is not in the catalog.
    pub fn from_codes(code: SequenceCode, codes: &[u8]) -> MacroResult<Self> {
        let sequence = codes
            .iter()
            .map(|c| KeyCode::try_from(*c).map_err(|c| MacroError::UnknownKeycode(format!("{:#04X}", c))))
            .collect::<MacroResult<Vec<_>>>()?;
        Ok(Self::sequence(code, sequence))
    }

    /// Build the sequence action matching `code`
    pub fn sequence(code: SequenceCode, sequence: Vec<KeyCode>) -> Self {
        match code {
            SequenceCode::Tap => MacroAction::Tap(sequence),
            SequenceCode::Down => MacroAction::Down(sequence),
            SequenceCode::Up => MacroAction::Up(sequence),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            MacroAction::Text(_) => ActionKind::Text,
            MacroAction::Down(_) => ActionKind::Down,
            MacroAction::Up(_) => ActionKind::Up,
            MacroAction::Tap(_) => ActionKind::Tap,
            MacroAction::Delay(_) => ActionKind::Delay,
        }
    }

    /// Sequence code and keys, `None` for text and delay
    pub fn as_sequence(&self) -> Option<(SequenceCode, &[KeyCode])> {
        match self {
            MacroAction::Tap(seq) => Some((SequenceCode::Tap, seq)),
            MacroAction::Down(seq) => Some((SequenceCode::Down, seq)),
            MacroAction::Up(seq) => Some((SequenceCode::Up, seq)),
            MacroAction::Text(_) | MacroAction::Delay(_) => None,
        }
    }

    pub(crate) fn sequence_mut(&mut self) -> Option<&mut Vec<KeyCode>> {
        match self {
            MacroAction::Tap(seq) | MacroAction::Down(seq) | MacroAction::Up(seq) => Some(seq),
            MacroAction::Text(_) | MacroAction::Delay(_) => None,
        }
    }
}
