//! Scripted event replay against a binding set.
//!
//! Every configured action is bound to a command that just records its
//! name, so a sequence of synthetic events shows which shortcuts a given
//! config would fire.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use arkana_config::InputConfig;
use arkana_input::InputManager;
use arkana_keybindings::{BoxedCommand, Key, MouseButton, ScrollDirection, Trigger, parse_trigger};

/// One synthetic input event, written `kind:TOKEN` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayEvent {
    /// `down:KEY`
    Down(Key),
    /// `up:KEY`
    Up(Key),
    /// `press:KEY`, a down followed by an up
    Press(Key),
    /// `click:BUTTON`
    Click(MouseButton),
    /// `scroll:DIR`
    Scroll(ScrollDirection),
}

/// Resolve a token to a physical key. Meta keys stand for their left half.
fn physical_key(token: &str) -> Result<Key> {
    match parse_trigger(token)? {
        Trigger::Key(key) => Ok(key),
        Trigger::Meta(meta) => match meta.physical_pair() {
            Some((left, _)) => Ok(left),
            None => bail!("'{}' is not a single key", token),
        },
        other => bail!("'{}' is a {}, not a key", token, other.name()),
    }
}

impl FromStr for ReplayEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, token) = s
            .split_once(':')
            .with_context(|| format!("Event '{}' is missing ':' (e.g. press:Escape)", s))?;
        let token = token.trim();

        let event = match kind.trim().to_ascii_lowercase().as_str() {
            "down" => ReplayEvent::Down(physical_key(token)?),
            "up" => ReplayEvent::Up(physical_key(token)?),
            "press" => ReplayEvent::Press(physical_key(token)?),
            "click" => match parse_trigger(token)? {
                Trigger::Button(button) => ReplayEvent::Click(button),
                _ => bail!("'{}' is not a mouse button", token),
            },
            "scroll" => match parse_trigger(token)? {
                Trigger::Scroll(direction) => ReplayEvent::Scroll(direction),
                _ => bail!("'{}' is not a scroll direction", token),
            },
            other => bail!("Unknown event kind '{}' in '{}'", other, s),
        };
        Ok(event)
    }
}

impl fmt::Display for ReplayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayEvent::Down(key) => write!(f, "down:{}", key.token()),
            ReplayEvent::Up(key) => write!(f, "up:{}", key.token()),
            ReplayEvent::Press(key) => write!(f, "press:{}", key.token()),
            ReplayEvent::Click(button) => write!(f, "click:{}", button.token()),
            ReplayEvent::Scroll(direction) => write!(f, "scroll:{}", direction.token()),
        }
    }
}

/// An input manager whose commands record the shortcuts they belong to.
pub struct Replayer {
    manager: InputManager,
    fired: Rc<RefCell<Vec<String>>>,
    registered: usize,
}

impl Replayer {
    pub fn new(config: &InputConfig) -> Self {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut manager = InputManager::new(&config.key_repeat);

        let sink = Rc::clone(&fired);
        let registered = manager
            .shortcuts_mut()
            .load_bindings(&config.shortcuts, |binding| {
                let sink = Rc::clone(&sink);
                let label = format!("{} ({})", binding.name, binding.action);
                let command: BoxedCommand = Box::new(move || {
                    sink.borrow_mut().push(label.clone());
                    true
                });
                Some(command)
            });
        if registered < config.shortcuts.len() {
            log::warn!(
                "{} of {} bindings were not registered",
                config.shortcuts.len() - registered,
                config.shortcuts.len()
            );
        }

        Self {
            manager,
            fired,
            registered,
        }
    }

    /// Number of bindings that made it into the registry.
    pub fn registered(&self) -> usize {
        self.registered
    }

    pub fn manager(&self) -> &InputManager {
        &self.manager
    }

    /// Apply one event and return the shortcuts it fired, in order.
    pub fn apply(&mut self, event: ReplayEvent) -> Vec<String> {
        match event {
            ReplayEvent::Down(key) => {
                self.manager.key_down(key);
            }
            ReplayEvent::Up(key) => {
                self.manager.key_up(key);
            }
            ReplayEvent::Press(key) => {
                self.manager.simulate_key_press(key);
            }
            ReplayEvent::Click(button) => {
                self.manager.simulate_click(button);
            }
            ReplayEvent::Scroll(direction) => {
                self.manager.mouse_scroll(direction);
            }
        }
        std::mem::take(&mut *self.fired.borrow_mut())
    }
}

/// Register `config`'s bindings and render the resulting combo trees.
pub fn dump(config: &InputConfig) -> String {
    Replayer::new(config).manager().shortcuts().dump()
}
