//! Communication protocol definitions.
//!
//! This module contains the constants used when talking to keyboard
//! configuration firmware like Vial.
//!
//! - [`vial`] - Vial macro encoding constants

pub mod vial;
