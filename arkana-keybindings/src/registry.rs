//! The combo registry.
//!
//! Registered combos live in a slot-map arena. Each node keeps its parent
//! handle and the handles of its modifiers, in insertion order. Roots are
//! bucketed by trigger code, most recently added first, and every node is
//! indexed by its unique name.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use arkana_config::ShortcutBinding;
use slotmap::{SlotMap, new_key_type};

use crate::combo::{self, ComboTree, KeyCombo};
use crate::command::BoxedCommand;
use crate::error::{RejectedCombo, ShortcutError};
use crate::parser::{self, format_combo_chain};
use crate::state::TriggerState;
use crate::trigger::{Key, MetaKey, MouseButton, ScrollDirection, TRIGGER_COUNT, Trigger};

/// Appended to generated prefix names under a release-flavored base.
const RELEASE_SUFFIX: &str = "~release";

new_key_type! {
    /// Stable handle to a registered combo.
    pub struct ComboId;
}

struct ComboNode {
    name: String,
    trigger: Trigger,
    fires_on_press: bool,
    command: Option<BoxedCommand>,
    parent: Option<ComboId>,
    modifiers: Vec<ComboId>,
}

/// Owning collection of combo trees with trigger and name indexes.
pub struct ComboRegistry {
    nodes: SlotMap<ComboId, ComboNode>,
    by_trigger: Vec<VecDeque<ComboId>>,
    by_name: HashMap<String, ComboId>,
    /// Roots of subtrees unlinked by `detach`. Their names stay reserved.
    detached: HashSet<ComboId>,
}

impl Default for ComboRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComboRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboRegistry")
            .field("combos", &self.by_name.len())
            .field("detached", &self.detached.len())
            .finish()
    }
}

impl ComboRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            by_trigger: vec![VecDeque::new(); TRIGGER_COUNT],
            by_name: HashMap::new(),
            detached: HashSet::new(),
        }
    }

    /// Number of registered names, detached ones included.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<ComboRef<'_>> {
        self.by_name.get(name).map(|&id| ComboRef { registry: self, id })
    }

    pub fn combo(&self, id: ComboId) -> Option<ComboRef<'_>> {
        self.nodes
            .contains_key(id)
            .then_some(ComboRef { registry: self, id })
    }

    /// Roots registered under `trigger`, in dispatch order.
    pub fn roots(&self, trigger: Trigger) -> impl Iterator<Item = ComboRef<'_>> {
        self.by_trigger[trigger.code()]
            .iter()
            .map(move |&id| ComboRef { registry: self, id })
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register a combo tree as a new root.
    ///
    /// Every name in the tree is checked first. On any collision nothing is
    /// inserted and the tree comes back inside the error with
    /// [`ShortcutError::DuplicateName`], command included.
    ///
    /// A blank name anywhere in the tree is refused the same way, with
    /// [`ShortcutError::EmptyName`], rather than silently ignored.
    pub fn add(&mut self, combo: KeyCombo) -> Result<ComboId, RejectedCombo> {
        if let Err(source) = self.check_insertable(&combo) {
            return Err(RejectedCombo::new(combo, source));
        }
        let code = combo.trigger.code();
        let id = self.insert_tree(combo, None);
        self.by_trigger[code].push_front(id);
        Ok(id)
    }

    /// Hang a combo tree under an already registered node.
    ///
    /// Refusals hand `child` back the same way [`ComboRegistry::add`] does.
    pub fn add_modifier(&mut self, parent: &str, child: KeyCombo) -> Result<ComboId, RejectedCombo> {
        let Some(&parent_id) = self.by_name.get(parent) else {
            log::debug!("Cannot add modifier '{}': no shortcut '{}'", child.name, parent);
            let source = ShortcutError::UnknownShortcut(parent.to_string());
            return Err(RejectedCombo::new(child, source));
        };
        if let Err(source) = self.check_insertable(&child) {
            return Err(RejectedCombo::new(child, source));
        }
        let id = self.insert_tree(child, Some(parent_id));
        self.nodes[parent_id].modifiers.push(id);
        Ok(id)
    }

    fn check_insertable(&self, combo: &KeyCombo) -> Result<(), ShortcutError> {
        let names = combo.all_names();
        if names.iter().any(|name| name.trim().is_empty()) {
            log::error!(
                "Invalid shortcut tree rooted at '{}': empty name",
                combo.name
            );
            return Err(ShortcutError::EmptyName);
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            if self.by_name.contains_key(&name) || !seen.insert(name.clone()) {
                log::warn!("Duplicate shortcut '{}', not registering '{}'", name, combo.name);
                return Err(ShortcutError::DuplicateName(name));
            }
        }
        Ok(())
    }

    fn insert_tree(&mut self, combo: KeyCombo, parent: Option<ComboId>) -> ComboId {
        let KeyCombo {
            name,
            trigger,
            fires_on_press,
            command,
            modifiers,
        } = combo;

        let id = self.nodes.insert(ComboNode {
            name: name.clone(),
            trigger,
            fires_on_press,
            command,
            parent,
            modifiers: Vec::with_capacity(modifiers.len()),
        });
        self.by_name.insert(name, id);

        for modifier in modifiers {
            let child = self.insert_tree(modifier, Some(id));
            self.nodes[id].modifiers.push(child);
        }
        id
    }

    // ------------------------------------------------------------------
    // Removal, detach and re-attach
    // ------------------------------------------------------------------

    /// Remove a combo and every modifier built on it.
    ///
    /// Unknown names are a no-op. Returns whether anything was removed.
    pub fn rem(&mut self, name: &str) -> bool {
        let Some(&id) = self.by_name.get(name) else {
            log::debug!("rem: no shortcut named '{}'", name);
            return false;
        };
        self.unlink(id);
        self.detached.remove(&id);
        self.destroy(id);
        true
    }

    /// Unlink a combo from its parent (or trigger bucket) without
    /// destroying it. Its names stay reserved until it is removed or
    /// re-attached with [`ComboRegistry::attach`] / [`ComboRegistry::attach_to`].
    pub fn detach(&mut self, name: &str) -> bool {
        let Some(&id) = self.by_name.get(name) else {
            log::debug!("detach: no shortcut named '{}'", name);
            return false;
        };
        if self.detached.contains(&id) {
            log::debug!("detach: '{}' is already detached", name);
            return false;
        }
        self.unlink(id);
        self.detached.insert(id);
        true
    }

    /// Re-link a detached combo as a root, in front of its trigger bucket.
    pub fn attach(&mut self, name: &str) -> Result<ComboId, ShortcutError> {
        let id = self.detached_root(name)?;
        self.detached.remove(&id);
        let code = self.nodes[id].trigger.code();
        self.by_trigger[code].push_front(id);
        Ok(id)
    }

    /// Re-link a detached combo as the newest modifier of `parent`.
    ///
    /// `parent` must be linked into the trees, so a subtree can never end up
    /// under itself.
    pub fn attach_to(&mut self, parent: &str, name: &str) -> Result<ComboId, ShortcutError> {
        let id = self.detached_root(name)?;
        let parent_id = match self.by_name.get(parent) {
            Some(&pid) if !self.is_detached(pid) => pid,
            _ => return Err(ShortcutError::UnknownShortcut(parent.to_string())),
        };
        self.detached.remove(&id);
        self.nodes[id].parent = Some(parent_id);
        self.nodes[parent_id].modifiers.push(id);
        Ok(id)
    }

    fn detached_root(&self, name: &str) -> Result<ComboId, ShortcutError> {
        match self.by_name.get(name) {
            None => Err(ShortcutError::UnknownShortcut(name.to_string())),
            Some(id) if self.detached.contains(id) => Ok(*id),
            Some(_) => Err(ShortcutError::NotDetached(name.to_string())),
        }
    }

    /// Whether the node sits in a detached subtree.
    pub fn is_detached(&self, id: ComboId) -> bool {
        let mut current = id;
        loop {
            if self.detached.contains(&current) {
                return true;
            }
            match self.nodes.get(current).and_then(|node| node.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Remove every combo, detached ones included.
    pub fn rem_all(&mut self) {
        // `rem` can drop several names at once; re-read the first key each
        // round instead of iterating.
        while let Some(name) = self.by_name.keys().next().cloned() {
            self.rem(&name);
        }
        self.detached.clear();
    }

    fn unlink(&mut self, id: ComboId) {
        match self.nodes[id].parent.take() {
            Some(parent) => self.nodes[parent].modifiers.retain(|&m| m != id),
            None => {
                let code = self.nodes[id].trigger.code();
                self.by_trigger[code].retain(|&root| root != id);
            }
        }
    }

    fn destroy(&mut self, id: ComboId) {
        if let Some(node) = self.nodes.remove(id) {
            self.by_name.remove(&node.name);
            for modifier in node.modifiers {
                self.destroy(modifier);
            }
        }
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Run the command of the registered combo with this id.
    pub fn invoke(&mut self, id: ComboId) -> bool {
        match self.nodes.get_mut(id).and_then(|node| node.command.as_mut()) {
            Some(command) => command.invoke(),
            None => false,
        }
    }

    /// Dispatch one event on `trigger`.
    ///
    /// Roots are tried newest first; each one resolves to its deepest active
    /// node, and the first command that reports success ends dispatch.
    pub fn dispatch_key(
        &mut self,
        trigger: Trigger,
        state: &dyn TriggerState,
        scroll: Option<ScrollDirection>,
    ) -> bool {
        let code = trigger.code();
        if self.by_trigger[code].is_empty() {
            return false;
        }

        let roots: Vec<ComboId> = self.by_trigger[code].iter().copied().collect();
        for root in roots {
            let target = ComboRef { registry: self, id: root }
                .highest_active_modifier(state, scroll)
                .map(|node| node.id);
            if let Some(id) = target
                && self.invoke(id)
            {
                log::debug!("Shortcut '{}' fired", self.nodes[id].name);
                return true;
            }
        }
        false
    }

    /// Dispatch a scroll tick; scroll combos are only active for this call.
    pub fn dispatch_scroll(&mut self, direction: ScrollDirection, state: &dyn TriggerState) -> bool {
        self.dispatch_key(Trigger::Scroll(direction), state, Some(direction))
    }

    /// Key fan-out: the physical key, then its meta key, then `AnyKey`.
    pub fn handle_key(&mut self, key: Key, state: &dyn TriggerState) -> bool {
        if self.dispatch_key(Trigger::Key(key), state, None) {
            return true;
        }
        if let Some(meta) = key.meta()
            && self.dispatch_key(Trigger::Meta(meta), state, None)
        {
            return true;
        }
        self.dispatch_key(Trigger::Meta(MetaKey::AnyKey), state, None)
    }

    /// Button fan-out: the button, then `AnyButton`.
    pub fn handle_button(&mut self, button: MouseButton, state: &dyn TriggerState) -> bool {
        if self.dispatch_key(Trigger::Button(button), state, None) {
            return true;
        }
        button != MouseButton::Any
            && self.dispatch_key(Trigger::Button(MouseButton::Any), state, None)
    }

    pub fn handle_scroll(&mut self, direction: ScrollDirection, state: &dyn TriggerState) -> bool {
        self.dispatch_scroll(direction, state)
    }

    // ------------------------------------------------------------------
    // Config
    // ------------------------------------------------------------------

    /// Register config bindings, resolving each action to a command.
    ///
    /// The binding string's last token is the base trigger and the others
    /// are modifiers which must be held, so only the base takes the
    /// binding's press/release flavor. A binding whose chain prefix is
    /// already registered hangs under that node (the one that currently wins
    /// dispatch when several match); missing prefix nodes are created
    /// without a command and named after the prefix text, plus `~release`
    /// when the base fires on release.
    /// Shorter chains load first so parents exist before their children.
    ///
    /// Bindings with unparseable keys, unknown actions or duplicate names
    /// are logged and skipped. Returns how many were registered.
    pub fn load_bindings<F>(&mut self, bindings: &[ShortcutBinding], mut resolve: F) -> usize
    where
        F: FnMut(&ShortcutBinding) -> Option<BoxedCommand>,
    {
        let mut parsed = Vec::with_capacity(bindings.len());
        for binding in bindings {
            match parser::parse_combo_chain(&binding.keys) {
                Ok(chain) => parsed.push((binding, chain)),
                Err(source) => {
                    let err = ShortcutError::Parse {
                        keys: binding.keys.clone(),
                        source,
                    };
                    log::warn!("Skipping shortcut '{}': {}", binding.name, err);
                }
            }
        }
        parsed.sort_by_key(|(_, chain)| chain.len());

        let mut registered = 0;
        for (binding, chain) in parsed {
            let Some(command) = resolve(binding) else {
                log::warn!(
                    "Unknown action '{}' for shortcut '{}'",
                    binding.action,
                    binding.name
                );
                continue;
            };
            match self.register_chain(binding, &chain, command) {
                Ok(_) => {
                    log::debug!("Registered shortcut: {} -> {}", binding.keys, binding.name);
                    registered += 1;
                }
                Err(e) => log::warn!("Skipping shortcut '{}': {}", binding.name, e),
            }
        }

        log::info!(
            "Shortcut registry loaded {} of {} bindings",
            registered,
            bindings.len()
        );
        registered
    }

    fn register_chain(
        &mut self,
        binding: &ShortcutBinding,
        chain: &[Trigger],
        command: BoxedCommand,
    ) -> Result<ComboId, ShortcutError> {
        let base_press = !binding.on_release;
        let press_at = |depth: usize| if depth == 0 { base_press } else { true };

        // Walk the existing prefix as far as it goes.
        let mut parent: Option<ComboId> = None;
        let mut depth = 0;
        while depth + 1 < chain.len() {
            let found = match parent {
                None => self.by_trigger[chain[0].code()]
                    .iter()
                    .copied()
                    .find(|&id| self.nodes[id].fires_on_press == base_press),
                Some(pid) => self.nodes[pid]
                    .modifiers
                    .iter()
                    .rev()
                    .copied()
                    .find(|&id| {
                        self.nodes[id].trigger == chain[depth] && self.nodes[id].fires_on_press
                    }),
            };
            match found {
                Some(id) => {
                    parent = Some(id);
                    depth += 1;
                }
                None => break,
            }
        }

        // Build the missing tail leaf-first.
        let last = chain.len() - 1;
        let mut tree = KeyCombo::from_boxed(
            binding.name.clone(),
            chain[last],
            Some(command),
            press_at(last),
        );
        for level in (depth..last).rev() {
            // Press and release chains over the same keys are separate trees.
            let mut prefix = format_combo_chain(&chain[..=level]);
            if !base_press {
                prefix.push_str(RELEASE_SUFFIX);
            }
            tree = KeyCombo::from_boxed(prefix, chain[level], None, press_at(level))
                .with_modifier(tree)?;
        }

        let added = match parent {
            None => self.add(tree),
            Some(pid) => {
                let parent_name = self.nodes[pid].name.clone();
                self.add_modifier(&parent_name, tree)
            }
        };
        Ok(added?)
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Dump every linked tree, grouped by trigger code.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for bucket in &self.by_trigger {
            for &root in bucket {
                combo::print_tree(ComboRef { registry: self, id: root }, 0, &mut out);
            }
        }
        for &root in &self.detached {
            out.push_str("(detached)\n");
            combo::print_tree(ComboRef { registry: self, id: root }, 2, &mut out);
        }
        out
    }
}

impl Drop for ComboRegistry {
    fn drop(&mut self) {
        if !self.is_empty() {
            log::trace!("Dropping shortcut registry with {} combos", self.len());
        }
    }
}

/// Borrowed view of a registered combo.
#[derive(Clone, Copy)]
pub struct ComboRef<'a> {
    registry: &'a ComboRegistry,
    id: ComboId,
}

impl<'a> ComboRef<'a> {
    fn node(self) -> &'a ComboNode {
        &self.registry.nodes[self.id]
    }

    pub fn id(self) -> ComboId {
        self.id
    }

    pub fn name(self) -> &'a str {
        &self.node().name
    }

    pub fn trigger(self) -> Trigger {
        self.node().trigger
    }

    pub fn fires_on_press(self) -> bool {
        self.node().fires_on_press
    }

    pub fn has_command(self) -> bool {
        self.node().command.is_some()
    }

    /// The combo this one refines, `None` for a root.
    pub fn modified_by(self) -> Option<ComboRef<'a>> {
        self.node().parent.map(|id| ComboRef {
            registry: self.registry,
            id,
        })
    }

    /// Walk up to the root of this tree.
    pub fn base(self) -> ComboRef<'a> {
        let mut current = self;
        while let Some(parent) = current.modified_by() {
            current = parent;
        }
        current
    }

    pub fn modifiers(self) -> impl Iterator<Item = ComboRef<'a>> {
        let registry = self.registry;
        self.node()
            .modifiers
            .iter()
            .map(move |&id| ComboRef { registry, id })
    }

    pub fn is_detached(self) -> bool {
        self.registry.is_detached(self.id)
    }

    /// This name plus every transitive modifier's name, depth-first.
    pub fn all_names(self) -> Vec<String> {
        let mut names = Vec::new();
        combo::collect_names(self, &mut names);
        names
    }

    pub fn highest_active_modifier(
        self,
        state: &dyn TriggerState,
        scroll: Option<ScrollDirection>,
    ) -> Option<ComboRef<'a>> {
        combo::deepest_active(self, state, scroll).map(|(node, _)| node)
    }

    pub fn print(self, indent: usize) -> String {
        let mut out = String::new();
        combo::print_tree(self, indent, &mut out);
        out
    }
}

impl fmt::Debug for ComboRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboRef")
            .field("name", &self.name())
            .field("trigger", &self.trigger())
            .field("fires_on_press", &self.fires_on_press())
            .finish()
    }
}

impl<'a> ComboTree<'a> for ComboRef<'a> {
    fn name(self) -> &'a str {
        ComboRef::name(self)
    }

    fn trigger(self) -> Trigger {
        ComboRef::trigger(self)
    }

    fn fires_on_press(self) -> bool {
        ComboRef::fires_on_press(self)
    }

    fn modifiers(self) -> impl Iterator<Item = Self> {
        ComboRef::modifiers(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PressedTriggers;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() -> bool + 'static) {
        let hits = Rc::new(Cell::new(0));
        let inner = Rc::clone(&hits);
        (hits, move || {
            inner.set(inner.get() + 1);
            true
        })
    }

    #[test]
    fn test_empty_registry() {
        let registry = ComboRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("anything").is_none());
    }

    #[test]
    fn test_add_indexes_every_name() {
        let mut registry = ComboRegistry::new();
        let combo = KeyCombo::without_command("up", Key::ArrowUp)
            .with_modifier(KeyCombo::without_command("up/rot", MetaKey::Control))
            .unwrap();
        registry.add(combo).unwrap();
        assert_eq!(registry.names(), vec!["up", "up/rot"]);
        let rot = registry.get("up/rot").unwrap();
        assert_eq!(rot.base().name(), "up");
        assert_eq!(rot.modified_by().unwrap().name(), "up");
    }

    #[test]
    fn test_duplicate_rejected_without_partial_insert() {
        let mut registry = ComboRegistry::new();
        registry
            .add(KeyCombo::without_command("shared", MetaKey::Shift))
            .unwrap();

        let combo = KeyCombo::without_command("fresh", Key::F)
            .with_modifier(KeyCombo::without_command("shared", MetaKey::Alt))
            .unwrap();
        let err = registry.add(combo).unwrap_err();
        assert_eq!(err.source, ShortcutError::DuplicateName("shared".to_string()));
        assert!(!registry.contains("fresh"));
        assert_eq!(registry.roots(Trigger::Key(Key::F)).count(), 0);
        assert_eq!(err.into_combo().all_names(), vec!["fresh", "shared"]);
    }

    #[test]
    fn test_rejected_combo_keeps_its_command_for_a_retry() {
        let mut registry = ComboRegistry::new();
        registry.add(KeyCombo::without_command("a", Key::A)).unwrap();

        let (hits, cmd) = counter();
        let rejected = registry.add(KeyCombo::new("a", Key::B, cmd)).unwrap_err();
        assert_eq!(rejected.error(), &ShortcutError::DuplicateName("a".to_string()));
        // The closure is still alive inside the returned combo.
        assert_eq!(Rc::strong_count(&hits), 2);

        let mut combo = rejected.into_combo();
        combo.rename("b");
        registry.add(combo).unwrap();

        let mut state = PressedTriggers::new();
        state.press_key(Key::B);
        assert!(registry.handle_key(Key::B, &state));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = ComboRegistry::new();
        let err = registry
            .add(KeyCombo::without_command("  ", Key::A))
            .unwrap_err();
        assert_eq!(err.source, ShortcutError::EmptyName);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_modifier_by_name() {
        let mut registry = ComboRegistry::new();
        let (hits, cmd) = counter();
        registry
            .add(KeyCombo::without_command("tab", Key::Tab))
            .unwrap();
        registry
            .add_modifier("tab", KeyCombo::new("tab/back", MetaKey::Shift, cmd))
            .unwrap();

        let mut state = PressedTriggers::new();
        state.press_key(Key::LeftShift);
        state.press_key(Key::Tab);
        assert!(registry.handle_key(Key::Tab, &state));
        assert_eq!(hits.get(), 1);

        let rejected = registry
            .add_modifier("missing", KeyCombo::without_command("x", Key::X))
            .unwrap_err();
        assert_eq!(
            rejected.source,
            ShortcutError::UnknownShortcut("missing".to_string())
        );
        assert_eq!(rejected.combo.name(), "x");
    }

    #[test]
    fn test_rem_unknown_is_noop() {
        let mut registry = ComboRegistry::new();
        assert!(!registry.rem("ghost"));
        assert!(!registry.detach("ghost"));
    }

    #[test]
    fn test_rem_modifier_unlinks_from_parent() {
        let mut registry = ComboRegistry::new();
        let combo = KeyCombo::without_command("up", Key::ArrowUp)
            .with_modifier(KeyCombo::without_command("up/rot", MetaKey::Control))
            .unwrap();
        registry.add(combo).unwrap();
        assert!(registry.rem("up/rot"));
        assert_eq!(registry.get("up").unwrap().modifiers().count(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_attach_errors() {
        let mut registry = ComboRegistry::new();
        registry.add(KeyCombo::without_command("a", Key::A)).unwrap();
        assert_eq!(
            registry.attach("a"),
            Err(ShortcutError::NotDetached("a".to_string()))
        );
        assert_eq!(
            registry.attach("zzz"),
            Err(ShortcutError::UnknownShortcut("zzz".to_string()))
        );

        registry.detach("a");
        assert_eq!(
            registry.attach_to("a", "a"),
            Err(ShortcutError::UnknownShortcut("a".to_string()))
        );
    }

    #[test]
    fn test_rem_all_clears_detached() {
        let mut registry = ComboRegistry::new();
        registry.add(KeyCombo::without_command("a", Key::A)).unwrap();
        registry.add(KeyCombo::without_command("b", Key::B)).unwrap();
        registry.detach("b");
        registry.rem_all();
        assert!(registry.is_empty());
        assert!(registry.dump().is_empty());
    }

    #[test]
    fn test_dump_lists_roots_and_detached() {
        let mut registry = ComboRegistry::new();
        registry.add(KeyCombo::without_command("a", Key::A)).unwrap();
        registry.add(KeyCombo::without_command("b", Key::B)).unwrap();
        registry.detach("b");
        let dump = registry.dump();
        assert!(dump.starts_with("a [a] on press"));
        assert!(dump.contains("(detached)\n  b [b] on press"));
    }
}
