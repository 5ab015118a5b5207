//! # keymacro types
//!
//! Fundamental type definitions shared by the keymacro crates.
//!
//! ## Modules
//!
//! - [`keycode`] - Keycodes usable inside macro sequences, with their codes, names and labels
//! - [`catalog`] - The ordered macro keycode catalog (basic + ISO + media) and lookups into it
//! - [`protocol`] - Vial macro wire protocol constants
//!
//! ## Integration
//!
//! - **keymacro**: the macro encoder and edit model are built on these types
//! - **keymacro-config**: keycode names in `keymacro.toml` resolve to [`keycode::KeyCode`]

#![no_std]

pub mod catalog;
pub mod keycode;
pub mod protocol;
