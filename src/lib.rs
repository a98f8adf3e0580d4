//! arkana input layer.
//!
//! Facade over the member crates plus the pieces behind the
//! `arkana-shortcuts` tool.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod logging;
pub mod replay;

pub use arkana_config as config;
pub use arkana_input as input;
pub use arkana_keybindings as keybindings;

pub use arkana_config::{InputConfig, ShortcutBinding};
pub use arkana_input::InputManager;
pub use arkana_keybindings::{ComboRegistry, KeyCombo};
