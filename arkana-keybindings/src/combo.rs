//! Combo trees.
//!
//! A [`KeyCombo`] is one trigger plus an optional command, refined by a list
//! of modifier combos. `Ctrl+Shift+Up` is an `Up` combo modified by a
//! `Ctrl` combo which is in turn modified by a `Shift` combo.
//!
//! `KeyCombo` is the owned, not-yet-registered form. Once a tree is handed
//! to a [`crate::ComboRegistry`] its nodes live in the registry arena and are
//! viewed through [`crate::ComboRef`]. Both forms share the resolution
//! algorithm below.

use std::collections::HashSet;
use std::fmt;

use crate::command::{BoxedCommand, Command};
use crate::error::{RejectedCombo, ShortcutError};
use crate::state::TriggerState;
use crate::trigger::{ScrollDirection, Trigger};

/// Read-only view over a combo tree node.
pub(crate) trait ComboTree<'a>: Copy {
    fn name(self) -> &'a str;

    fn trigger(self) -> Trigger;

    fn fires_on_press(self) -> bool;

    fn modifiers(self) -> impl Iterator<Item = Self>;
}

/// Find the deepest active node below (and including) `node`.
///
/// Returns the node together with the length of the active path leading to
/// it. Sibling modifiers that tie on depth resolve to the one added last.
pub(crate) fn deepest_active<'a, T: ComboTree<'a>>(
    node: T,
    state: &dyn TriggerState,
    scroll: Option<ScrollDirection>,
) -> Option<(T, usize)> {
    if !node.trigger().is_active(node.fires_on_press(), state, scroll) {
        return None;
    }

    let mut best: Option<(T, usize)> = None;
    for modifier in node.modifiers() {
        if let Some((found, depth)) = deepest_active(modifier, state, scroll)
            && best.is_none_or(|(_, max)| depth >= max)
        {
            best = Some((found, depth));
        }
    }

    match best {
        Some((found, depth)) => Some((found, depth + 1)),
        None => Some((node, 1)),
    }
}

/// Depth-first list of every name in the tree rooted at `node`.
pub(crate) fn collect_names<'a, T: ComboTree<'a>>(node: T, out: &mut Vec<String>) {
    out.push(node.name().to_string());
    for modifier in node.modifiers() {
        collect_names(modifier, out);
    }
}

/// Render the tree rooted at `node`, one node per line.
pub(crate) fn print_tree<'a, T: ComboTree<'a>>(node: T, indent: usize, out: &mut String) {
    use std::fmt::Write;

    let _ = writeln!(
        out,
        "{:indent$}{} [{}] {} ({})",
        "",
        node.name(),
        node.trigger().name(),
        if node.fires_on_press() { "on press" } else { "on release" },
        node.trigger().code(),
        indent = indent,
    );
    for modifier in node.modifiers() {
        print_tree(modifier, indent + 2, out);
    }
}

/// An owned combo tree that has not been registered yet.
pub struct KeyCombo {
    pub(crate) name: String,
    pub(crate) trigger: Trigger,
    pub(crate) fires_on_press: bool,
    pub(crate) command: Option<BoxedCommand>,
    pub(crate) modifiers: Vec<KeyCombo>,
}

impl KeyCombo {
    /// A combo that fires `command` when `trigger` is pressed.
    pub fn new(
        name: impl Into<String>,
        trigger: impl Into<Trigger>,
        command: impl Command + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            trigger: trigger.into(),
            fires_on_press: true,
            command: Some(Box::new(command)),
            modifiers: Vec::new(),
        }
    }

    /// A combo with no command. Useful as an intermediate chain node; it is
    /// never successfully invoked.
    pub fn without_command(name: impl Into<String>, trigger: impl Into<Trigger>) -> Self {
        Self {
            name: name.into(),
            trigger: trigger.into(),
            fires_on_press: true,
            command: None,
            modifiers: Vec::new(),
        }
    }

    /// Build from an already boxed command.
    pub fn from_boxed(
        name: impl Into<String>,
        trigger: impl Into<Trigger>,
        command: Option<BoxedCommand>,
        fires_on_press: bool,
    ) -> Self {
        Self {
            name: name.into(),
            trigger: trigger.into(),
            fires_on_press,
            command,
            modifiers: Vec::new(),
        }
    }

    /// Fire when the trigger is released instead of pressed.
    pub fn on_release(mut self) -> Self {
        self.fires_on_press = false;
        self
    }

    /// Set the press/release flavor explicitly.
    pub fn fires_on(mut self, press: bool) -> Self {
        self.fires_on_press = press;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn fires_on_press(&self) -> bool {
        self.fires_on_press
    }

    pub fn has_command(&self) -> bool {
        self.command.is_some()
    }

    pub fn modifiers(&self) -> &[KeyCombo] {
        &self.modifiers
    }

    /// Attach `child` as a modifier of this combo.
    ///
    /// Rejected with [`ShortcutError::DuplicateName`] when any name in the
    /// child's tree already appears in this tree (or twice in the child).
    /// `self` is left unchanged and the child comes back in the error.
    pub fn add_modifier(&mut self, child: KeyCombo) -> Result<&mut Self, RejectedCombo> {
        let mut seen: HashSet<String> = self.all_names().into_iter().collect();
        for name in child.all_names() {
            if !seen.insert(name.clone()) {
                log::warn!(
                    "Duplicate shortcut name '{}' while adding modifier to '{}'",
                    name,
                    self.name
                );
                return Err(RejectedCombo::new(child, ShortcutError::DuplicateName(name)));
            }
        }
        self.modifiers.push(child);
        Ok(self)
    }

    /// Builder form of [`KeyCombo::add_modifier`]. On rejection `self` is
    /// consumed; use `add_modifier` to keep it.
    pub fn with_modifier(mut self, child: KeyCombo) -> Result<Self, RejectedCombo> {
        self.add_modifier(child)?;
        Ok(self)
    }

    /// Give this node a new name, typically after a rejection.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Every name in this tree, depth-first, starting with this node.
    pub fn all_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_names(self, &mut names);
        names
    }

    /// The deepest active node of this tree, if this node is active at all.
    pub fn highest_active_modifier(
        &self,
        state: &dyn TriggerState,
        scroll: Option<ScrollDirection>,
    ) -> Option<&KeyCombo> {
        deepest_active(self, state, scroll).map(|(node, _)| node)
    }

    /// Run the command. `false` when there is none or it reports failure.
    pub fn invoke(&mut self) -> bool {
        match self.command.as_mut() {
            Some(command) => command.invoke(),
            None => false,
        }
    }

    /// Human-readable tree dump.
    pub fn print(&self, indent: usize) -> String {
        let mut out = String::new();
        print_tree(self, indent, &mut out);
        out
    }
}

impl fmt::Debug for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyCombo")
            .field("name", &self.name)
            .field("trigger", &self.trigger)
            .field("fires_on_press", &self.fires_on_press)
            .field("has_command", &self.command.is_some())
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

impl<'a> ComboTree<'a> for &'a KeyCombo {
    fn name(self) -> &'a str {
        &self.name
    }

    fn trigger(self) -> Trigger {
        self.trigger
    }

    fn fires_on_press(self) -> bool {
        self.fires_on_press
    }

    fn modifiers(self) -> impl Iterator<Item = Self> {
        self.modifiers.iter()
    }
}
