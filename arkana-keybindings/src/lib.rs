//! Shortcut resolution for arkana.
//!
//! Combos are trees: a base trigger refined by modifier chains such as
//! `Ctrl+Shift+ArrowUp`. The [`ComboRegistry`] owns every tree, buckets the
//! roots by trigger code and resolves each input event to at most one
//! command, preferring the deepest active modifier.
//!
//! Features:
//! - Keys, left-or-right meta keys, "any key", mouse buttons and scroll
//! - On-press and on-release combos
//! - Detach and re-attach of whole subtrees
//! - Registration from config binding strings

mod combo;
mod command;
mod error;
pub mod parser;
mod registry;
mod state;
pub mod trigger;

pub use combo::KeyCombo;
pub use command::{BoxedCommand, Command};
pub use error::{RejectedCombo, ShortcutError};
pub use parser::{ParseError, format_combo_chain, parse_combo_chain, parse_trigger};
pub use registry::{ComboId, ComboRef, ComboRegistry};
pub use state::{PressedTriggers, TriggerState};
pub use trigger::{Key, MetaKey, MouseButton, ScrollDirection, TRIGGER_COUNT, Trigger};
