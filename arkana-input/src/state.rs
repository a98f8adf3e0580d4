//! Live key and button state.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use arkana_keybindings::{Key, MouseButton, TriggerState};

/// Per-key bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
struct KeyRecord {
    pressed: bool,
    repeating: bool,
    /// Start of the current repeat wait. `None` until the next `update`.
    last_trigger: Option<Instant>,
    /// Character produced by the last press, re-injected on repeat.
    last_char: Option<char>,
}

/// Pressed keys, pressed buttons and the cursor position.
///
/// This is the oracle the shortcut registry consults when it resolves a
/// combo chain.
#[derive(Debug, Clone)]
pub struct InputState {
    keys: Vec<KeyRecord>,
    pressed_keys: BTreeSet<Key>,
    pressed_buttons: BTreeSet<MouseButton>,
    last_pressed: Option<Key>,
    cursor: (f64, f64),
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: vec![KeyRecord::default(); Key::COUNT],
            pressed_keys: BTreeSet::new(),
            pressed_buttons: BTreeSet::new(),
            last_pressed: None,
            cursor: (0.0, 0.0),
        }
    }

    /// Record a key-down. Returns `true` on the first press, `false` when
    /// the key was already held (a repeat).
    ///
    /// Either way the repeat wait restarts at the next `update`.
    pub fn press_key(&mut self, key: Key) -> bool {
        let record = &mut self.keys[key.index()];
        let first = !record.pressed;
        if first {
            record.pressed = true;
            record.repeating = false;
            self.pressed_keys.insert(key);
            self.last_pressed = Some(key);
        }
        record.last_trigger = None;
        first
    }

    pub fn release_key(&mut self, key: Key) {
        let record = &mut self.keys[key.index()];
        record.pressed = false;
        record.repeating = false;
        record.last_char = None;
        self.pressed_keys.remove(&key);
    }

    /// Remember `ch` as the character of the most recently pressed key.
    pub fn record_char(&mut self, ch: char) {
        if let Some(key) = self.last_pressed
            && self.keys[key.index()].pressed
        {
            self.keys[key.index()].last_char = Some(ch);
        }
    }

    pub fn last_char(&self, key: Key) -> Option<char> {
        self.keys[key.index()].last_char
    }

    pub fn is_repeating(&self, key: Key) -> bool {
        self.keys[key.index()].repeating
    }

    pub fn last_pressed(&self) -> Option<Key> {
        self.last_pressed
    }

    /// Currently held keys, in code order.
    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.pressed_keys.iter().copied()
    }

    pub fn press_button(&mut self, button: MouseButton) {
        if button != MouseButton::Any {
            self.pressed_buttons.insert(button);
        }
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.pressed_buttons.remove(&button);
    }

    pub fn pressed_buttons(&self) -> impl Iterator<Item = MouseButton> + '_ {
        self.pressed_buttons.iter().copied()
    }

    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    /// Held keys whose repeat wait has elapsed at `now`.
    ///
    /// The first wait after a press is `delay`, later ones `interval`. A key
    /// seen for the first time since its last (re)press only starts its
    /// wait here.
    pub fn due_repeats(&mut self, now: Instant, delay: Duration, interval: Duration) -> Vec<Key> {
        let mut due = Vec::new();
        for &key in &self.pressed_keys {
            let record = &mut self.keys[key.index()];
            let started = *record.last_trigger.get_or_insert(now);
            let wait = if record.repeating { interval } else { delay };
            if now.saturating_duration_since(started) >= wait {
                record.repeating = true;
                due.push(key);
            }
        }
        due
    }

    /// Human-readable list of held keys for trace output.
    pub(crate) fn describe_pressed(&self) -> String {
        let names: Vec<&str> = self.pressed_keys.iter().map(|k| k.name()).collect();
        format!("[{}]", names.join(", "))
    }
}

impl TriggerState for InputState {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys[key.index()].pressed
    }

    fn any_key_pressed(&self) -> bool {
        !self.pressed_keys.is_empty()
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    fn any_button_pressed(&self) -> bool {
        !self.pressed_buttons.is_empty()
    }
}
