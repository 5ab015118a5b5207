//! Unified error types for keymacro-config

use keymacro::MacroError;
use thiserror::Error;

/// Unified error type for keymacro-config
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config file '{path}': {message}")]
    FileRead { path: String, message: String },
    /// TOML parsing error
    #[error("Failed to parse '{path}': {message}")]
    TomlParse { path: String, message: String },
    /// Defaults and user config could not be merged
    #[error("Failed to merge configs: {0}")]
    Merge(String),
    /// Keycode name not found in the catalog or alias table
    #[error("Unknown keycode '{name}' in macro {macro_index}, operation {operation_index}")]
    UnknownKeycode {
        macro_index: usize,
        operation_index: usize,
        name: String,
    },
    /// Invalid value
    #[error("Invalid value '{value}' for '{field}', expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
    /// Macros don't fit the configured device or protocol
    #[error(transparent)]
    Macro(#[from] MacroError),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
