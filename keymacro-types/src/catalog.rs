//! The ordered catalog of macro keycodes.
//!
//! A macro sequence may only contain keys from [`MACRO_SEQUENCE_KEYCODES`].
//! The order is the order configurators present them in: basic keys, ISO keys, media keys.

pub use crate::keycode::MACRO_SEQUENCE_KEYCODES;
use crate::keycode::{KeyCode, KeycodeGroup};

/// Default key appended to a growing sequence, the first catalog entry
pub const KC_A: KeyCode = MACRO_SEQUENCE_KEYCODES[0];

/// Find a catalog keycode by its numeric code
pub fn from_code(code: u8) -> Option<KeyCode> {
    KeyCode::try_from(code).ok()
}

/// Find a catalog keycode by canonical name (`LShift`) or QMK name (`KC_LSHIFT`).
///
/// Matching is ASCII case-insensitive. The `KC_` prefix is optional for QMK names.
pub fn from_name(name: &str) -> Option<KeyCode> {
    let name = name.trim();
    MACRO_SEQUENCE_KEYCODES.iter().copied().find(|k| {
        k.name().eq_ignore_ascii_case(name)
            || k.qmk_name().eq_ignore_ascii_case(name)
            || k.qmk_name()[3..].eq_ignore_ascii_case(name)
    })
}

/// Position of a keycode in the catalog
pub fn position(keycode: KeyCode) -> usize {
    // Every KeyCode variant is listed in the catalog
    MACRO_SEQUENCE_KEYCODES
        .iter()
        .position(|k| *k == keycode)
        .unwrap_or_default()
}

/// Keycode at a catalog position
pub fn at(position: usize) -> Option<KeyCode> {
    MACRO_SEQUENCE_KEYCODES.get(position).copied()
}

/// Iterate over the catalog entries of one group, in catalog order
pub fn group(group: KeycodeGroup) -> impl Iterator<Item = KeyCode> {
    MACRO_SEQUENCE_KEYCODES.iter().copied().filter(move |k| k.group() == group)
}
