//! Change notifications of a [`MacroProgram`](crate::program::MacroProgram).
//!
//! A host, typically a UI, registers a [`MacroListener`] and re-renders the affected
//! rows on every event. Closures taking `&MacroEvent` are listeners too:
//!
//! ```rust,ignore
//! let mut program = MacroProgram::new();
//! program.subscribe(|event: &MacroEvent| println!("{:?}", event));
//! ```

/// What happened to the program
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MacroEventKind {
    /// A new action was inserted
    Added,
    /// An action was removed
    Removed,
    /// The payload of an action changed, e.g. a key was added to a sequence
    Changed,
    /// An action moved from `from` to the event's index
    Moved { from: usize },
    /// All actions were removed
    Cleared,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MacroEvent {
    pub kind: MacroEventKind,
    /// Index of the affected action after the edit, 0 for `Cleared`
    pub index: usize,
}

impl MacroEvent {
    pub(crate) fn new(kind: MacroEventKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// Receiver of [`MacroEvent`]s
pub trait MacroListener {
    fn on_macro_event(&mut self, event: &MacroEvent);
}

impl<F: FnMut(&MacroEvent)> MacroListener for F {
    fn on_macro_event(&mut self, event: &MacroEvent) {
        self(event)
    }
}
