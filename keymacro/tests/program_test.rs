pub mod common;

mod program_test {
    use keymacro::catalog::KC_A;
    use keymacro::keycode::KeyCode;
    use keymacro::{MacroAction, MacroError, MacroEvent, MacroEventKind, MacroProgram};

    use crate::common::record_events;

    fn event(kind: MacroEventKind, index: usize) -> MacroEvent {
        MacroEvent { kind, index }
    }

    #[test]
    fn test_push_insert_remove_notify() {
        let mut program = MacroProgram::new();
        let events = record_events(&mut program);

        program.push(MacroAction::text("a"));
        program.push(MacroAction::Delay(10));
        program.insert(1, MacroAction::Tap(vec![])).unwrap();
        let removed = program.remove(0).unwrap();

        assert_eq!(removed, MacroAction::text("a"));
        assert_eq!(
            program.actions(),
            [MacroAction::Tap(vec![]), MacroAction::Delay(10)]
        );
        assert_eq!(
            *events.borrow(),
            [
                event(MacroEventKind::Added, 0),
                event(MacroEventKind::Added, 1),
                event(MacroEventKind::Added, 1),
                event(MacroEventKind::Removed, 0),
            ]
        );
    }

    #[test]
    fn test_add_key_appends_kc_a() {
        let mut program = MacroProgram::from(vec![MacroAction::Down(vec![KeyCode::LShift])]);
        let events = record_events(&mut program);

        program.add_key(0).unwrap();

        assert_eq!(program.get(0), Some(&MacroAction::Down(vec![KeyCode::LShift, KC_A])));
        assert_eq!(*events.borrow(), [event(MacroEventKind::Changed, 0)]);
    }

    #[test]
    fn test_set_and_remove_key() {
        let mut program = MacroProgram::from(vec![
            MacroAction::text("x"),
            MacroAction::Tap(vec![KeyCode::A, KeyCode::B, KeyCode::C]),
        ]);
        let events = record_events(&mut program);

        program.set_key(1, 1, KeyCode::Enter).unwrap();
        assert_eq!(program.remove_key(1, 0).unwrap(), KeyCode::A);

        assert_eq!(program.get(1), Some(&MacroAction::Tap(vec![KeyCode::Enter, KeyCode::C])));
        assert_eq!(program.serialize(6).unwrap(), [b'x', 1, 1, 0x28, 1, 0x06]);
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn test_replace_and_move() {
        let mut program = MacroProgram::from(vec![
            MacroAction::text("a"),
            MacroAction::text("b"),
            MacroAction::text("c"),
        ]);
        let events = record_events(&mut program);

        let old = program.replace(1, MacroAction::Delay(5)).unwrap();
        program.move_action(0, 2).unwrap();

        assert_eq!(old, MacroAction::text("b"));
        assert_eq!(
            program.actions(),
            [MacroAction::Delay(5), MacroAction::text("c"), MacroAction::text("a")]
        );
        assert_eq!(
            *events.borrow(),
            [
                event(MacroEventKind::Changed, 1),
                event(MacroEventKind::Moved { from: 0 }, 2),
            ]
        );
    }

    #[test]
    fn test_set_text_and_delay() {
        let mut program = MacroProgram::from(vec![MacroAction::text(""), MacroAction::Delay(0)]);
        program.set_text(0, "hello").unwrap();
        program.set_delay(1, 300).unwrap();
        assert_eq!(program.serialize(2).unwrap(), [b'h', b'e', b'l', b'l', b'o', 1, 4, 46, 2]);
    }

    #[test]
    fn test_failed_edits_do_not_notify() {
        let mut program = MacroProgram::from(vec![MacroAction::text("a"), MacroAction::Tap(vec![])]);
        let events = record_events(&mut program);

        assert_eq!(
            program.remove(2),
            Err(MacroError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            program.insert(3, MacroAction::Delay(1)),
            Err(MacroError::IndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(
            program.add_key(0),
            Err(MacroError::ActionKindMismatch {
                index: 0,
                expected: "key sequence"
            })
        );
        assert_eq!(
            program.set_delay(0, 10),
            Err(MacroError::ActionKindMismatch { index: 0, expected: "delay" })
        );
        assert_eq!(
            program.set_text(1, "b"),
            Err(MacroError::ActionKindMismatch { index: 1, expected: "text" })
        );
        assert_eq!(
            program.set_key(1, 0, KeyCode::A),
            Err(MacroError::KeyOutOfRange { position: 0, len: 0 })
        );
        assert_eq!(
            program.remove_key(1, 0),
            Err(MacroError::KeyOutOfRange { position: 0, len: 0 })
        );
        assert_eq!(program.move_action(0, 5), Err(MacroError::IndexOutOfRange { index: 5, len: 2 }));

        assert!(events.borrow().is_empty());
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn test_clear_and_multiple_listeners() {
        let mut program = MacroProgram::from(vec![MacroAction::text("a")]);
        let first = record_events(&mut program);
        let second = record_events(&mut program);

        program.clear();

        assert!(program.is_empty());
        assert_eq!(*first.borrow(), [event(MacroEventKind::Cleared, 0)]);
        assert_eq!(*second.borrow(), *first.borrow());
    }

    #[test]
    fn test_collect_into_program() {
        let program: MacroProgram = ["a", "b"].into_iter().map(MacroAction::text).collect();
        assert_eq!(program.serialize(1).unwrap(), b"ab");
        assert_eq!(
            program.into_actions(),
            vec![MacroAction::text("a"), MacroAction::text("b")]
        );
    }
}
