// Configuration loader, built-in defaults merged with the user file

use std::path::Path;

use config::{Config, File, FileFormat};
use log::debug;

use crate::{ConfigError, ConfigResult, KeymacroTomlConfig};

/// Built-in defaults, the user file is layered on top
pub const DEFAULT_CONFIG: &str = r#"
[keymacro]
vial_protocol = 6
macro_count = 16
macro_space_size = 256
"#;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load keymacro configuration:
    ///
    /// **Pass 1**: Parse the user file alone, so syntax errors point at the user's file
    /// **Pass 2**: Merge built-in defaults with the user file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use keymacro_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load("keymacro.toml").unwrap();
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<KeymacroTomlConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::load_str(&content, &path.display().to_string())
    }

    /// Same as [`ConfigLoader::load`] for an in-memory document
    pub fn load_str(content: &str, source: &str) -> ConfigResult<KeymacroTomlConfig> {
        // Pass 1: validate the user config
        let user_config = KeymacroTomlConfig::from_toml_str(content, source)?;
        debug!("Loaded {} macros from {}", user_config.macros.len(), source);

        // Pass 2: merge defaults with user config
        Self::merge_configs(DEFAULT_CONFIG, content)
    }

    fn merge_configs(default_str: &str, user_str: &str) -> ConfigResult<KeymacroTomlConfig> {
        Config::builder()
            .add_source(File::from_str(default_str, FileFormat::Toml))
            .add_source(File::from_str(user_str, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::Merge(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::Merge(e.to_string()))
    }
}
