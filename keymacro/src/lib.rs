//! # keymacro
//!
//! Host side model and binary encoding of keyboard macros for Vial compatible firmware.
//!
//! - [`action`] - [`MacroAction`]: text, key down/up/tap sequences and delays
//! - [`encoder`] - the wire encoding of a single action, versioned by the Vial protocol
//! - [`program`] - [`MacroProgram`]: an editable macro that notifies listeners on change
//! - [`macro_buffer`] - all macros of a device packed into its macro buffer
//!
//! ```rust,ignore
//! use keymacro::{MacroAction, MacroProgram};
//! use keymacro_types::keycode::KeyCode;
//!
//! let program = MacroProgram::from(vec![
//!     MacroAction::Tap(vec![KeyCode::A]),
//!     MacroAction::Delay(300),
//! ]);
//! assert_eq!(program.serialize(6)?, [1, 1, 4, 1, 4, 46, 2]);
//! ```

pub mod action;
pub mod encoder;
pub mod error;
pub mod event;
pub mod macro_buffer;
pub mod program;

pub use action::{ActionKind, MacroAction};
pub use error::{MacroError, MacroResult};
pub use event::{MacroEvent, MacroEventKind, MacroListener};
pub use keymacro_types::{catalog, keycode, protocol};
pub use macro_buffer::MacroBuffer;
pub use program::MacroProgram;
