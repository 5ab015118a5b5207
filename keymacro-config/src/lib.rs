use serde::de;
use serde::Deserialize as SerdeDeserialize;
use serde_derive::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

pub mod error;
pub mod keycode_alias;
pub mod loader;
pub mod macros;

pub use error::{ConfigError, ConfigResult};
pub use keycode_alias::{KEYCODE_ALIAS, resolve_keycode};
pub use loader::ConfigLoader;

/// Device constants: protocol version and macro buffer layout
#[serde_inline_default]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeymacroConstantsConfig {
    /// Vial protocol version spoken by the device
    #[serde_inline_default(6)]
    pub vial_protocol: u32,
    /// Number of macros the device holds
    #[serde_inline_default(16)]
    #[serde(deserialize_with = "check_macro_count")]
    pub macro_count: usize,
    /// Macro space size in bytes for storing sequences
    #[serde_inline_default(256)]
    pub macro_space_size: usize,
}

fn check_macro_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: de::Deserializer<'de>,
{
    let value = SerdeDeserialize::deserialize(deserializer)?;
    if value > 256 {
        return Err(de::Error::custom(format!(
            "macro_count must be between 0 and 256, got {value}"
        )));
    }
    Ok(value)
}

/// This separate Default impl is needed when `[keymacro]` section is not set in keymacro.toml
impl Default for KeymacroConstantsConfig {
    fn default() -> Self {
        Self {
            vial_protocol: 6,
            macro_count: 16,
            macro_space_size: 256,
        }
    }
}

/// Contents of keymacro.toml
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeymacroTomlConfig {
    /// Device constants
    #[serde(default)]
    pub keymacro: KeymacroConstantsConfig,
    /// Macro definitions, in macro index order
    #[serde(default)]
    pub macros: Vec<MacroConfig>,
}

/// Configurations for macro
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MacroConfig {
    #[serde(default)]
    pub operations: Vec<MacroOperation>,
}

/// Macro operations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum MacroOperation {
    Tap {
        #[serde(alias = "keycode")]
        keycodes: KeycodeList,
    },
    Down {
        #[serde(alias = "keycode")]
        keycodes: KeycodeList,
    },
    Up {
        #[serde(alias = "keycode")]
        keycodes: KeycodeList,
    },
    Delay {
        duration: DurationMillis,
    },
    Text {
        text: String,
    },
}

/// A single keycode name or a list of them
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeycodeList {
    One(String),
    Many(Vec<String>),
}

impl KeycodeList {
    pub fn names(&self) -> &[String] {
        match self {
            KeycodeList::One(name) => core::slice::from_ref(name),
            KeycodeList::Many(names) => names,
        }
    }
}

/// Duration in milliseconds, written as `"300ms"` or `"2s"`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationMillis(
    #[serde(deserialize_with = "parse_duration_millis", serialize_with = "write_duration_millis")] pub u32,
);

fn parse_duration_millis<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let input: String = de::Deserialize::deserialize(deserializer)?;
    let num = input.trim_end_matches(|c: char| !c.is_numeric());
    let unit = &input[num.len()..];
    let num: u32 = num.parse().map_err(|_| {
        de::Error::custom(format!(
            "Invalid number \"{num}\" in duration: number part must be a u32"
        ))
    })?;

    match unit {
        "s" => num
            .checked_mul(1000)
            .ok_or_else(|| de::Error::custom(format!("Duration \"{input}\" is too long"))),
        "ms" => Ok(num),
        other => Err(de::Error::custom(format!(
            "Invalid duration unit \"{other}\": unit part must be either \"s\" or \"ms\""
        ))),
    }
}

fn write_duration_millis<S: serde::Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value}ms"))
}

impl KeymacroTomlConfig {
    /// Parse a keymacro.toml document, `source` names it in errors
    pub fn from_toml_str(content: &str, source: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: source.to_string(),
            message: e.message().to_string(),
        })
    }

    /// Render the config back to TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string(self).map_err(|e| ConfigError::InvalidValue {
            field: "macros".to_string(),
            value: e.to_string(),
            expected: "a config representable as TOML".to_string(),
        })
    }
}
