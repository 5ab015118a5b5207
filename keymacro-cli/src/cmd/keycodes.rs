use clap::ValueEnum;
use keymacro_types::catalog;
use keymacro_types::keycode::{KeyCode, KeycodeGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupArg {
    Basic,
    Iso,
    Media,
}

impl From<GroupArg> for KeycodeGroup {
    fn from(value: GroupArg) -> Self {
        match value {
            GroupArg::Basic => KeycodeGroup::Basic,
            GroupArg::Iso => KeycodeGroup::Iso,
            GroupArg::Media => KeycodeGroup::Media,
        }
    }
}

pub fn run(group: Option<GroupArg>) -> anyhow::Result<()> {
    let keycodes: Vec<KeyCode> = match group {
        Some(group) => catalog::group(group.into()).collect(),
        None => catalog::MACRO_SEQUENCE_KEYCODES.to_vec(),
    };
    for keycode in keycodes {
        println!("{}", describe(keycode));
    }
    Ok(())
}

fn describe(keycode: KeyCode) -> String {
    let label: String = keycode.display_label().collect();
    format!(
        "{:#04x}  {:<16} {:<20} {}",
        keycode.code(),
        keycode.name(),
        keycode.qmk_name(),
        label
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_describe() {
        let line = describe(KeyCode::LShift);
        assert!(line.starts_with("0xe1  LShift"));
        assert!(line.contains("KC_LSHIFT"));
    }

    #[test]
    fn test_group_arg() {
        assert_eq!(KeycodeGroup::from(GroupArg::Iso), KeycodeGroup::Iso);
        assert_eq!(catalog::group(GroupArg::Basic.into()).next(), Some(KeyCode::A));
    }
}
