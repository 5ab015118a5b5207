use std::collections::HashMap;

use keymacro_types::catalog;
use keymacro_types::keycode::KeyCode;
use once_cell::sync::Lazy;

/// Short QMK names and common spellings, keyed in lowercase
pub static KEYCODE_ALIAS: Lazy<HashMap<&'static str, KeyCode>> = Lazy::new(|| {
    let mut m = HashMap::new();

    macro_rules! add_alias {
        ($keycode:ident = $( $alias:expr ),*) => {
            $(
                m.insert($alias, KeyCode::$keycode);
            )*
        };
    }

    add_alias!(Enter = "ent", "return");
    add_alias!(Escape = "esc");
    add_alias!(Backspace = "bspc", "bksp");
    add_alias!(Space = "spc");
    add_alias!(Minus = "mins", "-");
    add_alias!(Equal = "eql", "=");
    add_alias!(LeftBracket = "lbrc", "[");
    add_alias!(RightBracket = "rbrc", "]");
    add_alias!(Backslash = "bsls", "\\");
    add_alias!(Semicolon = "scln", ";");
    add_alias!(Quote = "quot", "'");
    add_alias!(Grave = "grv", "`");
    add_alias!(Comma = "comm", ",");
    add_alias!(Dot = "period", ".");
    add_alias!(Slash = "slsh", "/");
    add_alias!(CapsLock = "caps", "clck");
    add_alias!(PrintScreen = "pscr");
    add_alias!(ScrollLock = "slck", "scrl");
    add_alias!(Pause = "paus", "brk");
    add_alias!(Insert = "ins");
    add_alias!(Delete = "del");
    add_alias!(PageDown = "pgdn");
    add_alias!(Right = "rght");
    add_alias!(NumLock = "nlck", "num");
    add_alias!(Application = "app");
    add_alias!(LCtrl = "lctl", "lcontrol");
    add_alias!(LShift = "lsft");
    add_alias!(LAlt = "lopt");
    add_alias!(LGui = "lcmd", "lwin");
    add_alias!(RCtrl = "rctl", "rcontrol");
    add_alias!(RShift = "rsft");
    add_alias!(RAlt = "ropt", "algr");
    add_alias!(RGui = "rcmd", "rwin");
    add_alias!(NonusHash = "nuhs");
    add_alias!(NonusBackslash = "nubs");
    add_alias!(SystemPower = "pwr");
    add_alias!(SystemSleep = "slep");
    add_alias!(SystemWake = "wake");
    add_alias!(AudioMute = "mute");
    add_alias!(AudioVolUp = "volu");
    add_alias!(AudioVolDown = "vold");
    add_alias!(MediaNextTrack = "mnxt");
    add_alias!(MediaPrevTrack = "mprv");
    add_alias!(MediaStop = "mstp");
    add_alias!(MediaPlayPause = "mply");
    add_alias!(MediaSelect = "msel");
    add_alias!(MediaEject = "ejct");
    add_alias!(Calculator = "calc");
    add_alias!(MyComputer = "mycm");
    add_alias!(MediaFastForward = "mffd");
    add_alias!(MediaRewind = "mrwd");
    add_alias!(BrightnessUp = "briu");
    add_alias!(BrightnessDown = "brid");
    add_alias!(Execute = "exec");
    add_alias!(MouseUp = "ms_u");
    add_alias!(MouseDown = "ms_d");
    add_alias!(MouseLeft = "ms_l");
    add_alias!(MouseRight = "ms_r");
    add_alias!(MouseBtn1 = "btn1");
    add_alias!(MouseBtn2 = "btn2");
    add_alias!(MouseBtn3 = "btn3");
    add_alias!(MouseBtn4 = "btn4");
    add_alias!(MouseBtn5 = "btn5");
    add_alias!(MouseWheelUp = "wh_u");
    add_alias!(MouseWheelDown = "wh_d");
    add_alias!(MouseWheelLeft = "wh_l");
    add_alias!(MouseWheelRight = "wh_r");

    m
});

/// Resolve a keycode name from `keymacro.toml`.
///
/// Canonical and QMK names are tried first, then the alias table. Case doesn't matter.
pub fn resolve_keycode(name: &str) -> Option<KeyCode> {
    if let Some(keycode) = catalog::from_name(name) {
        return Some(keycode);
    }
    let lower = name.trim().to_ascii_lowercase();
    let short = lower.strip_prefix("kc_").unwrap_or(&lower);
    KEYCODE_ALIAS.get(short).copied()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve_keycode() {
        assert_eq!(resolve_keycode("A"), Some(KeyCode::A));
        assert_eq!(resolve_keycode("KC_LSHIFT"), Some(KeyCode::LShift));
        assert_eq!(resolve_keycode("KC_LSFT"), Some(KeyCode::LShift));
        assert_eq!(resolve_keycode("lsft"), Some(KeyCode::LShift));
        assert_eq!(resolve_keycode("Esc"), Some(KeyCode::Escape));
        assert_eq!(resolve_keycode("kc_mute"), Some(KeyCode::AudioMute));
        assert_eq!(resolve_keycode("nonsense"), None);
    }

    #[test]
    fn test_aliases_do_not_shadow_names() {
        // Every alias should be reachable, i.e. not already a catalog name
        for alias in KEYCODE_ALIAS.keys() {
            assert_eq!(catalog::from_name(alias), None, "alias {} shadows a keycode name", alias);
        }
    }
}
