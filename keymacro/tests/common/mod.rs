use std::cell::RefCell;
use std::rc::Rc;

use keymacro::{MacroEvent, MacroProgram};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Subscribe a recorder to `program`, returning the shared list of received events
pub fn record_events(program: &mut MacroProgram) -> Rc<RefCell<Vec<MacroEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    program.subscribe(move |event: &MacroEvent| sink.borrow_mut().push(*event));
    events
}
