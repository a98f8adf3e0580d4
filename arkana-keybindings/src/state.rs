//! Live pressed-state oracle consulted by the activation predicate.

use std::collections::HashSet;

use crate::trigger::{Key, MetaKey, MouseButton};

/// Answers "is this key or button held right now".
///
/// The resolver never tracks input itself; whoever owns the event stream
/// implements this and passes it to dispatch.
pub trait TriggerState {
    fn is_key_pressed(&self, key: Key) -> bool;

    fn any_key_pressed(&self) -> bool;

    fn is_button_pressed(&self, button: MouseButton) -> bool;

    fn any_button_pressed(&self) -> bool;

    /// Left-or-right state of a meta key. `AnyKey` defers to
    /// [`TriggerState::any_key_pressed`].
    fn is_meta_pressed(&self, meta: MetaKey) -> bool {
        match meta.physical_pair() {
            Some((left, right)) => self.is_key_pressed(left) || self.is_key_pressed(right),
            None => self.any_key_pressed(),
        }
    }
}

/// A plain set-backed [`TriggerState`].
///
/// Useful for tools and tests that drive the registry without a window.
#[derive(Debug, Clone, Default)]
pub struct PressedTriggers {
    keys: HashSet<Key>,
    buttons: HashSet<MouseButton>,
}

impl PressedTriggers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    pub fn press_button(&mut self, button: MouseButton) {
        // The synthetic "any" button is never physically held.
        if button != MouseButton::Any {
            self.buttons.insert(button);
        }
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons.remove(&button);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }
}

impl TriggerState for PressedTriggers {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn any_key_pressed(&self) -> bool {
        !self.keys.is_empty()
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    fn any_button_pressed(&self) -> bool {
        !self.buttons.is_empty()
    }
}
