//! [`MacroProgram`], an editable macro with change notifications.

use core::fmt;

use keymacro_types::catalog::KC_A;
use keymacro_types::keycode::KeyCode;
use keymacro_types::protocol::vial::supports_qmk_prefix;

use crate::action::MacroAction;
use crate::encoder::serialize_into;
use crate::error::{MacroError, MacroResult};
use crate::event::{MacroEvent, MacroEventKind, MacroListener};

/// An ordered list of macro actions, triggered by a single key.
///
/// Every successful edit notifies the subscribed listeners exactly once.
/// Failed edits leave the program untouched and notify nobody.
#[derive(Default)]
pub struct MacroProgram {
    actions: Vec<MacroAction>,
    listeners: Vec<Box<dyn MacroListener>>,
}

impl fmt::Debug for MacroProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacroProgram")
            .field("actions", &self.actions)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl From<Vec<MacroAction>> for MacroProgram {
    fn from(actions: Vec<MacroAction>) -> Self {
        Self {
            actions,
            listeners: Vec::new(),
        }
    }
}

impl FromIterator<MacroAction> for MacroProgram {
    fn from_iter<I: IntoIterator<Item = MacroAction>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl MacroProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for change notifications
    pub fn subscribe(&mut self, listener: impl MacroListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn actions(&self) -> &[MacroAction] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<MacroAction> {
        self.actions
    }

    pub fn get(&self, index: usize) -> Option<&MacroAction> {
        self.actions.get(index)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Whether every action has an encoding in `vial_protocol`.
    ///
    /// Hosts use this to keep delays out of macros for older devices.
    pub fn supports_protocol(&self, vial_protocol: u32) -> bool {
        supports_qmk_prefix(vial_protocol) || !self.actions.iter().any(|a| matches!(a, MacroAction::Delay(_)))
    }

    /// Encode all actions in order, concatenated
    pub fn serialize(&self, vial_protocol: u32) -> MacroResult<Vec<u8>> {
        let mut out = Vec::new();
        self.serialize_into(vial_protocol, &mut out)?;
        Ok(out)
    }

    /// Append the encoded program to `out`.
    ///
    /// Stops at the first action that can't be encoded, `out` is then left as it was.
    pub fn serialize_into(&self, vial_protocol: u32, out: &mut Vec<u8>) -> MacroResult<()> {
        let start = out.len();
        for action in &self.actions {
            if let Err(e) = serialize_into(action, vial_protocol, out) {
                out.truncate(start);
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn push(&mut self, action: MacroAction) {
        self.actions.push(action);
        self.notify(MacroEventKind::Added, self.actions.len() - 1);
    }

    pub fn insert(&mut self, index: usize, action: MacroAction) -> MacroResult<()> {
        if index > self.actions.len() {
            return Err(self.out_of_range(index));
        }
        self.actions.insert(index, action);
        self.notify(MacroEventKind::Added, index);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> MacroResult<MacroAction> {
        self.check_index(index)?;
        let action = self.actions.remove(index);
        self.notify(MacroEventKind::Removed, index);
        Ok(action)
    }

    /// Replace the action at `index`, returning the old one
    pub fn replace(&mut self, index: usize, action: MacroAction) -> MacroResult<MacroAction> {
        self.check_index(index)?;
        let old = core::mem::replace(&mut self.actions[index], action);
        self.notify(MacroEventKind::Changed, index);
        Ok(old)
    }

    /// Move the action at `from` so that it ends up at `to`
    pub fn move_action(&mut self, from: usize, to: usize) -> MacroResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let action = self.actions.remove(from);
        self.actions.insert(to, action);
        self.notify(MacroEventKind::Moved { from }, to);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.actions.clear();
        self.notify(MacroEventKind::Cleared, 0);
    }

    /// Append the default key to the sequence action at `index`
    pub fn add_key(&mut self, index: usize) -> MacroResult<()> {
        self.sequence_mut(index)?.push(KC_A);
        self.notify(MacroEventKind::Changed, index);
        Ok(())
    }

    /// Replace the key at `position` of the sequence action at `index`
    pub fn set_key(&mut self, index: usize, position: usize, keycode: KeyCode) -> MacroResult<()> {
        let sequence = self.sequence_mut(index)?;
        let len = sequence.len();
        let slot = sequence
            .get_mut(position)
            .ok_or(MacroError::KeyOutOfRange { position, len })?;
        *slot = keycode;
        self.notify(MacroEventKind::Changed, index);
        Ok(())
    }

    /// Remove the key at `position` of the sequence action at `index`
    pub fn remove_key(&mut self, index: usize, position: usize) -> MacroResult<KeyCode> {
        let sequence = self.sequence_mut(index)?;
        if position >= sequence.len() {
            return Err(MacroError::KeyOutOfRange {
                position,
                len: sequence.len(),
            });
        }
        let keycode = sequence.remove(position);
        self.notify(MacroEventKind::Changed, index);
        Ok(keycode)
    }

    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> MacroResult<()> {
        self.check_index(index)?;
        match &mut self.actions[index] {
            MacroAction::Text(current) => *current = text.into(),
            _ => return Err(MacroError::ActionKindMismatch { index, expected: "text" }),
        }
        self.notify(MacroEventKind::Changed, index);
        Ok(())
    }

    pub fn set_delay(&mut self, index: usize, delay_ms: u32) -> MacroResult<()> {
        self.check_index(index)?;
        match &mut self.actions[index] {
            MacroAction::Delay(current) => *current = delay_ms,
            _ => return Err(MacroError::ActionKindMismatch { index, expected: "delay" }),
        }
        self.notify(MacroEventKind::Changed, index);
        Ok(())
    }

    fn sequence_mut(&mut self, index: usize) -> MacroResult<&mut Vec<KeyCode>> {
        self.check_index(index)?;
        self.actions[index].sequence_mut().ok_or(MacroError::ActionKindMismatch {
            index,
            expected: "key sequence",
        })
    }

    fn check_index(&self, index: usize) -> MacroResult<()> {
        if index < self.actions.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> MacroError {
        MacroError::IndexOutOfRange {
            index,
            len: self.actions.len(),
        }
    }

    fn notify(&mut self, kind: MacroEventKind, index: usize) {
        let event = MacroEvent::new(kind, index);
        for listener in self.listeners.iter_mut() {
            listener.on_macro_event(&event);
        }
    }
}
