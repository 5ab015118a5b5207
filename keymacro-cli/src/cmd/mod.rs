pub mod encode;
pub mod keycodes;
