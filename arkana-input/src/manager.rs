//! The input manager.
//!
//! Owns the live input state, the current shortcut registry and a stack of
//! saved registries. Raw events come in through the `key_*`, `mouse_*` and
//! `text_input` handlers (or [`InputManager::handle_window_event`]); each
//! one updates the state, then gives the shortcuts and the GUI their turn.

use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

use arkana_config::{InputConfig, KeyRepeatConfig, ShortcutBinding};
use arkana_keybindings::{
    BoxedCommand, ComboId, ComboRegistry, Command, Key, KeyCombo, MetaKey, MouseButton,
    RejectedCombo, ScrollDirection, ShortcutError, Trigger,
};

use crate::error::InputError;
use crate::gui::GuiHandler;
use crate::state::InputState;

/// Resolves input events to shortcuts and GUI handlers.
pub struct InputManager {
    state: InputState,
    shortcuts: ComboRegistry,
    contexts: Vec<ComboRegistry>,
    repeat_enabled: bool,
    repeat_delay: Duration,
    repeat_interval: Duration,
    gui: Option<Box<dyn GuiHandler>>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(&KeyRepeatConfig::default())
    }
}

fn secs_or(secs: f64, fallback: f64, field: &str) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or_else(|_| {
        log::warn!("Invalid key repeat {} {}, using {}", field, secs, fallback);
        Duration::from_secs_f64(fallback)
    })
}

impl InputManager {
    /// Create a manager with an empty shortcut registry.
    pub fn new(repeat: &KeyRepeatConfig) -> Self {
        let defaults = KeyRepeatConfig::default();
        Self {
            state: InputState::new(),
            shortcuts: ComboRegistry::new(),
            contexts: Vec::new(),
            repeat_enabled: repeat.enabled,
            repeat_delay: secs_or(repeat.delay_secs, defaults.delay_secs, "delay"),
            repeat_interval: secs_or(repeat.interval_secs, defaults.interval_secs, "interval"),
            gui: None,
        }
    }

    /// Create a manager and register every configured shortcut.
    ///
    /// `resolve` maps a binding's action to a command; bindings it returns
    /// `None` for are skipped.
    pub fn from_config<F>(config: &InputConfig, resolve: F) -> Self
    where
        F: FnMut(&ShortcutBinding) -> Option<BoxedCommand>,
    {
        let mut manager = Self::new(&config.key_repeat);
        manager.shortcuts.load_bindings(&config.shortcuts, resolve);
        manager
    }

    pub fn set_gui(&mut self, gui: Box<dyn GuiHandler>) {
        self.gui = Some(gui);
    }

    pub fn take_gui(&mut self) -> Option<Box<dyn GuiHandler>> {
        self.gui.take()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        use arkana_keybindings::TriggerState;
        self.state.is_key_pressed(key)
    }

    pub fn cursor(&self) -> (f64, f64) {
        self.state.cursor()
    }

    // ------------------------------------------------------------------
    // Event handlers
    // ------------------------------------------------------------------

    /// A key went down (or is being repeated).
    ///
    /// The GUI gets the first chance unless its focused widget withholds
    /// this key; shortcuts only run when the GUI did not consume it.
    pub fn key_down(&mut self, key: Key) -> bool {
        self.state.press_key(key);
        log::trace!(
            "Key pressed: {} pressed={}",
            key.name(),
            self.state.describe_pressed()
        );

        if let Some(gui) = self.gui.as_mut()
            && gui.focused_widget().accepts_key(key)
            && gui.key_down(key)
        {
            return true;
        }

        self.shortcuts.handle_key(key, &self.state)
    }

    /// A key went up. Release shortcuts run before the GUI sees it.
    pub fn key_up(&mut self, key: Key) -> bool {
        self.state.release_key(key);
        log::trace!(
            "Key released: {} pressed={}",
            key.name(),
            self.state.describe_pressed()
        );

        if self.shortcuts.handle_key(key, &self.state) {
            return true;
        }
        self.gui.as_mut().is_some_and(|gui| gui.key_up(key))
    }

    /// A character was produced by the last key press.
    pub fn text_input(&mut self, ch: char) -> bool {
        self.state.record_char(ch);
        self.gui.as_mut().is_some_and(|gui| gui.text_input(ch))
    }

    pub fn mouse_button_down(&mut self, button: MouseButton) -> bool {
        self.state.press_button(button);
        if self.shortcuts.handle_button(button, &self.state) {
            return true;
        }
        self.gui
            .as_mut()
            .is_some_and(|gui| gui.mouse_button(button, true))
    }

    pub fn mouse_button_up(&mut self, button: MouseButton) -> bool {
        self.state.release_button(button);
        if self.shortcuts.handle_button(button, &self.state) {
            return true;
        }
        self.gui
            .as_mut()
            .is_some_and(|gui| gui.mouse_button(button, false))
    }

    pub fn mouse_scroll(&mut self, direction: ScrollDirection) -> bool {
        if self.shortcuts.handle_scroll(direction, &self.state) {
            return true;
        }
        self.gui.as_mut().is_some_and(|gui| gui.scroll(direction))
    }

    pub fn mouse_move(&mut self, x: f64, y: f64) -> bool {
        self.state.set_cursor(x, y);
        self.gui.as_mut().is_some_and(|gui| gui.mouse_move(x, y))
    }

    /// Synthesize key repeats; call once per tick.
    ///
    /// Each due key runs through `key_down` again and its remembered
    /// character is re-sent to the GUI. Returns the number of repeats.
    pub fn update(&mut self, now: Instant) -> usize {
        if !self.repeat_enabled {
            return 0;
        }

        let due = self
            .state
            .due_repeats(now, self.repeat_delay, self.repeat_interval);
        for &key in &due {
            self.key_down(key);
            if let Some(ch) = self.state.last_char(key)
                && let Some(gui) = self.gui.as_mut()
            {
                gui.text_input(ch);
            }
        }
        due.len()
    }

    /// Press and release a key.
    pub fn simulate_key_press(&mut self, key: Key) -> bool {
        let down = self.key_down(key);
        let up = self.key_up(key);
        down || up
    }

    /// Press and release a mouse button.
    pub fn simulate_click(&mut self, button: MouseButton) -> bool {
        let down = self.mouse_button_down(button);
        let up = self.mouse_button_up(button);
        down || up
    }

    // ------------------------------------------------------------------
    // Shortcuts
    // ------------------------------------------------------------------

    pub fn shortcuts(&self) -> &ComboRegistry {
        &self.shortcuts
    }

    pub fn shortcuts_mut(&mut self) -> &mut ComboRegistry {
        &mut self.shortcuts
    }

    /// Register a prepared combo tree in the current context. A refused
    /// tree comes back inside the error.
    pub fn add(&mut self, combo: KeyCombo) -> Result<ComboId, RejectedCombo> {
        self.shortcuts.add(combo)
    }

    fn add_trigger(
        &mut self,
        name: &str,
        trigger: Trigger,
        command: impl Command + 'static,
        on_press: bool,
    ) -> Result<ComboId, RejectedCombo> {
        self.shortcuts
            .add(KeyCombo::new(name, trigger, command).fires_on(on_press))
    }

    pub fn add_key(
        &mut self,
        name: &str,
        key: Key,
        command: impl Command + 'static,
        on_press: bool,
    ) -> Result<ComboId, RejectedCombo> {
        self.add_trigger(name, Trigger::Key(key), command, on_press)
    }

    pub fn add_meta(
        &mut self,
        name: &str,
        meta: MetaKey,
        command: impl Command + 'static,
        on_press: bool,
    ) -> Result<ComboId, RejectedCombo> {
        self.add_trigger(name, Trigger::Meta(meta), command, on_press)
    }

    pub fn add_button(
        &mut self,
        name: &str,
        button: MouseButton,
        command: impl Command + 'static,
        on_press: bool,
    ) -> Result<ComboId, RejectedCombo> {
        self.add_trigger(name, Trigger::Button(button), command, on_press)
    }

    pub fn add_scroll(
        &mut self,
        name: &str,
        direction: ScrollDirection,
        command: impl Command + 'static,
    ) -> Result<ComboId, RejectedCombo> {
        self.add_trigger(name, Trigger::Scroll(direction), command, true)
    }

    pub fn remove_shortcut(&mut self, name: &str) -> bool {
        self.shortcuts.rem(name)
    }

    pub fn detach_shortcut(&mut self, name: &str) -> bool {
        self.shortcuts.detach(name)
    }

    pub fn attach_shortcut(&mut self, name: &str) -> Result<ComboId, ShortcutError> {
        self.shortcuts.attach(name)
    }

    pub fn remove_all_shortcuts(&mut self) {
        self.shortcuts.rem_all();
    }

    // ------------------------------------------------------------------
    // Context stack
    // ------------------------------------------------------------------

    /// Save the current shortcuts and start over with an empty registry.
    pub fn push_context(&mut self) {
        let saved = std::mem::take(&mut self.shortcuts);
        self.contexts.push(saved);
        log::debug!("Pushed shortcut context (depth {})", self.contexts.len());
    }

    /// Drop the current shortcuts and restore the last pushed ones.
    pub fn pop_context(&mut self) -> Result<(), InputError> {
        let Some(saved) = self.contexts.pop() else {
            log::error!("pop_context called without a matching push_context");
            return Err(InputError::UnbalancedPop);
        };
        self.shortcuts = saved;
        log::debug!("Popped shortcut context (depth {})", self.contexts.len());
        Ok(())
    }

    /// Number of saved contexts below the current one.
    pub fn context_depth(&self) -> usize {
        self.contexts.len()
    }

    /// Push a context that is popped again when the guard drops.
    pub fn scoped_context(&mut self) -> ContextGuard<'_> {
        self.push_context();
        let depth = self.context_depth();
        ContextGuard {
            manager: self,
            depth,
        }
    }
}

/// Pops the context pushed by [`InputManager::scoped_context`] on drop.
///
/// Contexts pushed through the guard and left open are popped too.
pub struct ContextGuard<'a> {
    manager: &'a mut InputManager,
    depth: usize,
}

impl Deref for ContextGuard<'_> {
    type Target = InputManager;

    fn deref(&self) -> &InputManager {
        self.manager
    }
}

impl DerefMut for ContextGuard<'_> {
    fn deref_mut(&mut self) -> &mut InputManager {
        self.manager
    }
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        if self.manager.context_depth() > self.depth {
            log::warn!(
                "Scoped context left {} nested context(s) open",
                self.manager.context_depth() - self.depth
            );
        }
        while self.manager.context_depth() >= self.depth {
            if self.manager.pop_context().is_err() {
                break;
            }
        }
    }
}
