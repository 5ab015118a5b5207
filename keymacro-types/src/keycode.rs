//! Keycodes usable in macro sequences.
//!
//! Codes follow the USB HID keyboard page as used by QMK's basic keycode range,
//! so every code fits in a single byte on the wire.
use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// Partition of the macro keycode catalog
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeycodeGroup {
    /// Letters, digits, punctuation, navigation, keypad and modifiers
    Basic,
    /// ISO and JIS specific keys
    Iso,
    /// Extended function keys, media, system and mouse keys
    Media,
}

impl KeycodeGroup {
    pub const fn name(self) -> &'static str {
        match self {
            KeycodeGroup::Basic => "basic",
            KeycodeGroup::Iso => "iso",
            KeycodeGroup::Media => "media",
        }
    }
}

macro_rules! define_keycodes {
    ($( $variant:ident = $code:literal, $qmk:literal, $label:literal, $group:ident; )*) => {
        /// A key the macro encoder can emit.
        ///
        /// Variants are declared in catalog order, see [`MACRO_SEQUENCE_KEYCODES`].
        #[repr(u8)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, FromRepr)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum KeyCode {
            $( $variant = $code, )*
        }

        impl KeyCode {
            /// Canonical name, same as the variant name
            pub const fn name(self) -> &'static str {
                match self {
                    $( KeyCode::$variant => stringify!($variant), )*
                }
            }

            /// QMK style name, e.g. `KC_LSHIFT`
            pub const fn qmk_name(self) -> &'static str {
                match self {
                    $( KeyCode::$variant => $qmk, )*
                }
            }

            /// Label shown on a keycap. Shifted symbols come first, separated by `\n`.
            pub const fn label(self) -> &'static str {
                match self {
                    $( KeyCode::$variant => $label, )*
                }
            }

            pub const fn group(self) -> KeycodeGroup {
                match self {
                    $( KeyCode::$variant => KeycodeGroup::$group, )*
                }
            }
        }

        /// All keycodes available in macro sequences: basic, then ISO, then media.
        pub const MACRO_SEQUENCE_KEYCODES: &[KeyCode] = &[
            $( KeyCode::$variant, )*
        ];
    };
}

define_keycodes! {
    A = 0x04, "KC_A", "A", Basic;
    B = 0x05, "KC_B", "B", Basic;
    C = 0x06, "KC_C", "C", Basic;
    D = 0x07, "KC_D", "D", Basic;
    E = 0x08, "KC_E", "E", Basic;
    F = 0x09, "KC_F", "F", Basic;
    G = 0x0A, "KC_G", "G", Basic;
    H = 0x0B, "KC_H", "H", Basic;
    I = 0x0C, "KC_I", "I", Basic;
    J = 0x0D, "KC_J", "J", Basic;
    K = 0x0E, "KC_K", "K", Basic;
    L = 0x0F, "KC_L", "L", Basic;
    M = 0x10, "KC_M", "M", Basic;
    N = 0x11, "KC_N", "N", Basic;
    O = 0x12, "KC_O", "O", Basic;
    P = 0x13, "KC_P", "P", Basic;
    Q = 0x14, "KC_Q", "Q", Basic;
    R = 0x15, "KC_R", "R", Basic;
    S = 0x16, "KC_S", "S", Basic;
    T = 0x17, "KC_T", "T", Basic;
    U = 0x18, "KC_U", "U", Basic;
    V = 0x19, "KC_V", "V", Basic;
    W = 0x1A, "KC_W", "W", Basic;
    X = 0x1B, "KC_X", "X", Basic;
    Y = 0x1C, "KC_Y", "Y", Basic;
    Z = 0x1D, "KC_Z", "Z", Basic;
    Kc1 = 0x1E, "KC_1", "!\n1", Basic;
    Kc2 = 0x1F, "KC_2", "@\n2", Basic;
    Kc3 = 0x20, "KC_3", "#\n3", Basic;
    Kc4 = 0x21, "KC_4", "$\n4", Basic;
    Kc5 = 0x22, "KC_5", "%\n5", Basic;
    Kc6 = 0x23, "KC_6", "^\n6", Basic;
    Kc7 = 0x24, "KC_7", "&\n7", Basic;
    Kc8 = 0x25, "KC_8", "*\n8", Basic;
    Kc9 = 0x26, "KC_9", "(\n9", Basic;
    Kc0 = 0x27, "KC_0", ")\n0", Basic;
    Enter = 0x28, "KC_ENTER", "Enter", Basic;
    Escape = 0x29, "KC_ESCAPE", "Esc", Basic;
    Backspace = 0x2A, "KC_BSPACE", "Bksp", Basic;
    Tab = 0x2B, "KC_TAB", "Tab", Basic;
    Space = 0x2C, "KC_SPACE", "Space", Basic;
    Minus = 0x2D, "KC_MINUS", "_\n-", Basic;
    Equal = 0x2E, "KC_EQUAL", "+\n=", Basic;
    LeftBracket = 0x2F, "KC_LBRACKET", "{\n[", Basic;
    RightBracket = 0x30, "KC_RBRACKET", "}\n]", Basic;
    Backslash = 0x31, "KC_BSLASH", "|\n\\", Basic;
    Semicolon = 0x33, "KC_SCOLON", ":\n;", Basic;
    Quote = 0x34, "KC_QUOTE", "\"\n'", Basic;
    Grave = 0x35, "KC_GRAVE", "~\n`", Basic;
    Comma = 0x36, "KC_COMMA", "<\n,", Basic;
    Dot = 0x37, "KC_DOT", ">\n.", Basic;
    Slash = 0x38, "KC_SLASH", "?\n/", Basic;
    CapsLock = 0x39, "KC_CAPSLOCK", "Caps\nLock", Basic;
    F1 = 0x3A, "KC_F1", "F1", Basic;
    F2 = 0x3B, "KC_F2", "F2", Basic;
    F3 = 0x3C, "KC_F3", "F3", Basic;
    F4 = 0x3D, "KC_F4", "F4", Basic;
    F5 = 0x3E, "KC_F5", "F5", Basic;
    F6 = 0x3F, "KC_F6", "F6", Basic;
    F7 = 0x40, "KC_F7", "F7", Basic;
    F8 = 0x41, "KC_F8", "F8", Basic;
    F9 = 0x42, "KC_F9", "F9", Basic;
    F10 = 0x43, "KC_F10", "F10", Basic;
    F11 = 0x44, "KC_F11", "F11", Basic;
    F12 = 0x45, "KC_F12", "F12", Basic;
    PrintScreen = 0x46, "KC_PSCREEN", "Print\nScreen", Basic;
    ScrollLock = 0x47, "KC_SCROLLLOCK", "Scroll\nLock", Basic;
    Pause = 0x48, "KC_PAUSE", "Pause", Basic;
    Insert = 0x49, "KC_INSERT", "Insert", Basic;
    Home = 0x4A, "KC_HOME", "Home", Basic;
    PageUp = 0x4B, "KC_PGUP", "Page\nUp", Basic;
    Delete = 0x4C, "KC_DELETE", "Del", Basic;
    End = 0x4D, "KC_END", "End", Basic;
    PageDown = 0x4E, "KC_PGDOWN", "Page\nDown", Basic;
    Right = 0x4F, "KC_RIGHT", "Right", Basic;
    Left = 0x50, "KC_LEFT", "Left", Basic;
    Down = 0x51, "KC_DOWN", "Down", Basic;
    Up = 0x52, "KC_UP", "Up", Basic;
    NumLock = 0x53, "KC_NUMLOCK", "Num\nLock", Basic;
    KpSlash = 0x54, "KC_KP_SLASH", "/", Basic;
    KpAsterisk = 0x55, "KC_KP_ASTERISK", "*", Basic;
    KpMinus = 0x56, "KC_KP_MINUS", "-", Basic;
    KpPlus = 0x57, "KC_KP_PLUS", "+", Basic;
    KpEnter = 0x58, "KC_KP_ENTER", "Num\nEnter", Basic;
    Kp1 = 0x59, "KC_KP_1", "1", Basic;
    Kp2 = 0x5A, "KC_KP_2", "2", Basic;
    Kp3 = 0x5B, "KC_KP_3", "3", Basic;
    Kp4 = 0x5C, "KC_KP_4", "4", Basic;
    Kp5 = 0x5D, "KC_KP_5", "5", Basic;
    Kp6 = 0x5E, "KC_KP_6", "6", Basic;
    Kp7 = 0x5F, "KC_KP_7", "7", Basic;
    Kp8 = 0x60, "KC_KP_8", "8", Basic;
    Kp9 = 0x61, "KC_KP_9", "9", Basic;
    Kp0 = 0x62, "KC_KP_0", "0", Basic;
    KpDot = 0x63, "KC_KP_DOT", ".", Basic;
    KpEqual = 0x67, "KC_KP_EQUAL", "=", Basic;
    Application = 0x65, "KC_APPLICATION", "Menu", Basic;
    LCtrl = 0xE0, "KC_LCTRL", "LCtrl", Basic;
    LShift = 0xE1, "KC_LSHIFT", "LShift", Basic;
    LAlt = 0xE2, "KC_LALT", "LAlt", Basic;
    LGui = 0xE3, "KC_LGUI", "LGui", Basic;
    RCtrl = 0xE4, "KC_RCTRL", "RCtrl", Basic;
    RShift = 0xE5, "KC_RSHIFT", "RShift", Basic;
    RAlt = 0xE6, "KC_RALT", "RAlt", Basic;
    RGui = 0xE7, "KC_RGUI", "RGui", Basic;

    NonusHash = 0x32, "KC_NONUS_HASH", "~\n#", Iso;
    NonusBackslash = 0x64, "KC_NONUS_BSLASH", "|\n\\", Iso;
    International1 = 0x87, "KC_RO", "_\n\\", Iso;
    International2 = 0x88, "KC_KANA", "Kana", Iso;
    International3 = 0x89, "KC_JYEN", "|\n¥", Iso;
    International4 = 0x8A, "KC_HENK", "Henk", Iso;
    International5 = 0x8B, "KC_MHEN", "MHen", Iso;
    International6 = 0x8C, "KC_INT6", "Int6", Iso;
    International7 = 0x8D, "KC_INT7", "Int7", Iso;
    International8 = 0x8E, "KC_INT8", "Int8", Iso;
    International9 = 0x8F, "KC_INT9", "Int9", Iso;
    Language1 = 0x90, "KC_LANG1", "Hang\nul", Iso;
    Language2 = 0x91, "KC_LANG2", "Hanja", Iso;
    Language3 = 0x92, "KC_LANG3", "Lang3", Iso;
    Language4 = 0x93, "KC_LANG4", "Lang4", Iso;
    Language5 = 0x94, "KC_LANG5", "Lang5", Iso;
    Language6 = 0x95, "KC_LANG6", "Lang6", Iso;
    Language7 = 0x96, "KC_LANG7", "Lang7", Iso;
    Language8 = 0x97, "KC_LANG8", "Lang8", Iso;
    Language9 = 0x98, "KC_LANG9", "Lang9", Iso;

    F13 = 0x68, "KC_F13", "F13", Media;
    F14 = 0x69, "KC_F14", "F14", Media;
    F15 = 0x6A, "KC_F15", "F15", Media;
    F16 = 0x6B, "KC_F16", "F16", Media;
    F17 = 0x6C, "KC_F17", "F17", Media;
    F18 = 0x6D, "KC_F18", "F18", Media;
    F19 = 0x6E, "KC_F19", "F19", Media;
    F20 = 0x6F, "KC_F20", "F20", Media;
    F21 = 0x70, "KC_F21", "F21", Media;
    F22 = 0x71, "KC_F22", "F22", Media;
    F23 = 0x72, "KC_F23", "F23", Media;
    F24 = 0x73, "KC_F24", "F24", Media;
    SystemPower = 0xA5, "KC_SYSTEM_POWER", "Power", Media;
    SystemSleep = 0xA6, "KC_SYSTEM_SLEEP", "Sleep", Media;
    SystemWake = 0xA7, "KC_SYSTEM_WAKE", "Wake", Media;
    AudioMute = 0xA8, "KC_AUDIO_MUTE", "Mute", Media;
    AudioVolUp = 0xA9, "KC_AUDIO_VOL_UP", "Vol +", Media;
    AudioVolDown = 0xAA, "KC_AUDIO_VOL_DOWN", "Vol -", Media;
    MediaNextTrack = 0xAB, "KC_MEDIA_NEXT_TRACK", "Media\nNext", Media;
    MediaPrevTrack = 0xAC, "KC_MEDIA_PREV_TRACK", "Media\nPrev", Media;
    MediaStop = 0xAD, "KC_MEDIA_STOP", "Media\nStop", Media;
    MediaPlayPause = 0xAE, "KC_MEDIA_PLAY_PAUSE", "Media\nPlay", Media;
    MediaSelect = 0xAF, "KC_MEDIA_SELECT", "Media\nSelect", Media;
    MediaEject = 0xB0, "KC_MEDIA_EJECT", "Eject", Media;
    Mail = 0xB1, "KC_MAIL", "Mail", Media;
    Calculator = 0xB2, "KC_CALCULATOR", "Calc", Media;
    MyComputer = 0xB3, "KC_MY_COMPUTER", "My\nComp", Media;
    WwwSearch = 0xB4, "KC_WWW_SEARCH", "Web\nSearch", Media;
    WwwHome = 0xB5, "KC_WWW_HOME", "Web\nHome", Media;
    WwwBack = 0xB6, "KC_WWW_BACK", "Web\nBack", Media;
    WwwForward = 0xB7, "KC_WWW_FORWARD", "Web\nFwd", Media;
    WwwStop = 0xB8, "KC_WWW_STOP", "Web\nStop", Media;
    WwwRefresh = 0xB9, "KC_WWW_REFRESH", "Web\nRefr", Media;
    WwwFavorites = 0xBA, "KC_WWW_FAVORITES", "Web\nFav", Media;
    MediaFastForward = 0xBB, "KC_MEDIA_FAST_FORWARD", "Fast\nFwd", Media;
    MediaRewind = 0xBC, "KC_MEDIA_REWIND", "Rewind", Media;
    BrightnessUp = 0xBD, "KC_BRIGHTNESS_UP", "Bright.\nUp", Media;
    BrightnessDown = 0xBE, "KC_BRIGHTNESS_DOWN", "Bright.\nDown", Media;
    Execute = 0x74, "KC_EXECUTE", "Exec", Media;
    Help = 0x75, "KC_HELP", "Help", Media;
    Menu = 0x76, "KC_MENU", "Menu", Media;
    Select = 0x77, "KC_SELECT", "Select", Media;
    Stop = 0x78, "KC_STOP", "Stop", Media;
    Again = 0x79, "KC_AGAIN", "Again", Media;
    Undo = 0x7A, "KC_UNDO", "Undo", Media;
    Cut = 0x7B, "KC_CUT", "Cut", Media;
    Copy = 0x7C, "KC_COPY", "Copy", Media;
    Paste = 0x7D, "KC_PASTE", "Paste", Media;
    Find = 0x7E, "KC_FIND", "Find", Media;
    KbMute = 0x7F, "KC__MUTE", "Kb\nMute", Media;
    KbVolumeUp = 0x80, "KC__VOLUP", "Kb\nVol +", Media;
    KbVolumeDown = 0x81, "KC__VOLDOWN", "Kb\nVol -", Media;
    LockingCapsLock = 0x82, "KC_LOCKING_CAPS", "Locking\nCaps", Media;
    LockingNumLock = 0x83, "KC_LOCKING_NUM", "Locking\nNum", Media;
    LockingScrollLock = 0x84, "KC_LOCKING_SCROLL", "Locking\nScroll", Media;
    MouseUp = 0xCD, "KC_MS_UP", "Mouse\nUp", Media;
    MouseDown = 0xCE, "KC_MS_DOWN", "Mouse\nDown", Media;
    MouseLeft = 0xCF, "KC_MS_LEFT", "Mouse\nLeft", Media;
    MouseRight = 0xD0, "KC_MS_RIGHT", "Mouse\nRight", Media;
    MouseBtn1 = 0xD1, "KC_MS_BTN1", "Mouse\n1", Media;
    MouseBtn2 = 0xD2, "KC_MS_BTN2", "Mouse\n2", Media;
    MouseBtn3 = 0xD3, "KC_MS_BTN3", "Mouse\n3", Media;
    MouseBtn4 = 0xD4, "KC_MS_BTN4", "Mouse\n4", Media;
    MouseBtn5 = 0xD5, "KC_MS_BTN5", "Mouse\n5", Media;
    MouseWheelUp = 0xD6, "KC_MS_WH_UP", "Mouse\nWh Up", Media;
    MouseWheelDown = 0xD7, "KC_MS_WH_DOWN", "Mouse\nWh Down", Media;
    MouseWheelLeft = 0xD8, "KC_MS_WH_LEFT", "Mouse\nWh Left", Media;
    MouseWheelRight = 0xD9, "KC_MS_WH_RIGHT", "Mouse\nWh Right", Media;
    MouseAccel0 = 0xDA, "KC_MS_ACCEL0", "Mouse\nAccel 0", Media;
    MouseAccel1 = 0xDB, "KC_MS_ACCEL1", "Mouse\nAccel 1", Media;
    MouseAccel2 = 0xDC, "KC_MS_ACCEL2", "Mouse\nAccel 2", Media;
}

impl KeyCode {
    /// Numeric code written to the wire
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        (KeyCode::LCtrl.code()..=KeyCode::RGui.code()).contains(&self.code())
    }

    /// Returns `true` if the keycode is a mouse keycode
    pub fn is_mouse_key(self) -> bool {
        (KeyCode::MouseUp.code()..=KeyCode::MouseAccel2.code()).contains(&self.code())
    }

    /// Label as a single line, as it appears in a drop-down list
    pub fn display_label(self) -> impl Iterator<Item = char> {
        self.label().chars().filter(|c| *c != '\n')
    }
}

impl TryFrom<u8> for KeyCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Return original value when there's an error
        Self::from_repr(value).ok_or(value)
    }
}

impl From<KeyCode> for u8 {
    fn from(value: KeyCode) -> Self {
        value.code()
    }
}
