use std::io::Write;

use keymacro::keycode::KeyCode;
use keymacro::{MacroAction, MacroBuffer, MacroProgram};
use keymacro_config::{ConfigError, ConfigLoader};

const KEYMACRO_TOML: &str = r#"
[keymacro]
macro_count = 3
macro_space_size = 64

[[macros]]
operations = [
    { operation = "down", keycodes = ["LCtrl", "LShift"] },
    { operation = "tap", keycodes = "Esc" },
    { operation = "up", keycodes = ["LShift", "LCtrl"] },
]

[[macros]]
operations = [
    { operation = "text", text = "Hello, world" },
    { operation = "delay", duration = "1s" },
    { operation = "tap", keycodes = "Enter" },
]
"#;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_merges_defaults() {
    let file = write_config(KEYMACRO_TOML);
    let config = ConfigLoader::load(file.path()).unwrap();

    // Not set in the file, comes from the defaults
    assert_eq!(config.keymacro.vial_protocol, 6);
    assert_eq!(config.keymacro.macro_count, 3);
    assert_eq!(config.keymacro.macro_space_size, 64);
    assert_eq!(config.macros.len(), 2);
}

#[test]
fn test_config_matches_hand_built_programs() {
    let file = write_config(KEYMACRO_TOML);
    let config = ConfigLoader::load(file.path()).unwrap();

    let programs = [
        MacroProgram::from(vec![
            MacroAction::Down(vec![KeyCode::LCtrl, KeyCode::LShift]),
            MacroAction::Tap(vec![KeyCode::Escape]),
            MacroAction::Up(vec![KeyCode::LShift, KeyCode::LCtrl]),
        ]),
        MacroProgram::from(vec![
            MacroAction::text("Hello, world"),
            MacroAction::Delay(1000),
            MacroAction::Tap(vec![KeyCode::Enter]),
        ]),
    ];
    let expected = MacroBuffer::new(3, 64).serialize(&programs, 6).unwrap();

    assert_eq!(config.serialize_macros(None).unwrap(), expected);
}

#[test]
fn test_buffer_overflow_is_reported() {
    let content = KEYMACRO_TOML.replace("macro_space_size = 64", "macro_space_size = 16");
    let file = write_config(&content);
    let config = ConfigLoader::load(file.path()).unwrap();

    assert!(matches!(
        config.serialize_macros(None),
        Err(ConfigError::Macro(keymacro::MacroError::BufferOverflow { capacity: 16, .. }))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("keymacro.toml");
    assert!(matches!(
        ConfigLoader::load(&missing),
        Err(ConfigError::FileRead { .. })
    ));
}

#[test]
fn test_parse_error_names_the_file() {
    let err = ConfigLoader::load_str("[[macros]]\noperations = [{ operation = \"jump\" }]\n", "broken.toml")
        .unwrap_err();
    match err {
        ConfigError::TomlParse { path, .. } => assert_eq!(path, "broken.toml"),
        other => panic!("Expected TomlParse, got {:?}", other),
    }
}
