use thiserror::Error;

use crate::action::ActionKind;

/// Errors raised while encoding or editing macros
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacroError {
    /// The action has no encoding in the device's protocol version
    #[error("{action} actions can only be used with vial_protocol >= {required}, device uses {protocol}")]
    UnsupportedForProtocolVersion {
        action: ActionKind,
        protocol: u32,
        required: u32,
    },
    /// The delay doesn't fit the two biased bytes of a delay record
    #[error("delay {delay}ms exceeds the maximum of {max}ms")]
    DelayOutOfRange { delay: u32, max: u32 },
    /// A raw code or name that is not part of the macro keycode catalog
    #[error("unknown keycode: {0}")]
    UnknownKeycode(String),
    #[error("action index {index} is out of range, program has {len} actions")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("key position {position} is out of range, sequence has {len} keys")]
    KeyOutOfRange { position: usize, len: usize },
    #[error("action {index} is not a {expected} action")]
    ActionKindMismatch { index: usize, expected: &'static str },
    #[error("{count} macros given but the device only holds {capacity}")]
    TooManyMacros { count: usize, capacity: usize },
    #[error("macros need {required} bytes but the device buffer holds {capacity}")]
    BufferOverflow { required: usize, capacity: usize },
}

pub type MacroResult<T> = Result<T, MacroError>;
