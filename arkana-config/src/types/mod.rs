//! Configuration value types.

mod logging;
mod shortcut;

pub use logging::LogLevel;
pub use shortcut::{KeyRepeatConfig, ShortcutBinding};
