//! Shortcut and key-repeat configuration types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Shortcut Types
// ============================================================================

/// A shortcut configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutBinding {
    /// Unique shortcut name, e.g. "cam/up/rot"
    pub name: String,
    /// Binding string, e.g. "Ctrl+Shift+ArrowUp". The last token is the
    /// base trigger, the others are held modifiers.
    pub keys: String,
    /// Action name, e.g. "camera_rotate_up"
    pub action: String,
    /// Fire when the base trigger is released instead of pressed
    #[serde(default = "crate::defaults::bool_false")]
    pub on_release: bool,
}

impl ShortcutBinding {
    pub fn new(name: &str, keys: &str, action: &str) -> Self {
        Self {
            name: name.to_string(),
            keys: keys.to_string(),
            action: action.to_string(),
            on_release: false,
        }
    }

    /// Builder: fire on release.
    pub fn released(mut self) -> Self {
        self.on_release = true;
        self
    }
}

// ============================================================================
// Key Repeat
// ============================================================================

/// Synthesized key repeat timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRepeatConfig {
    /// Whether held keys repeat at all
    #[serde(default = "crate::defaults::bool_true")]
    pub enabled: bool,
    /// Seconds a key must be held before the first repeat
    #[serde(default = "crate::defaults::repeat_delay_secs")]
    pub delay_secs: f64,
    /// Seconds between subsequent repeats
    #[serde(default = "crate::defaults::repeat_interval_secs")]
    pub interval_secs: f64,
}

impl Default for KeyRepeatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_secs: crate::defaults::repeat_delay_secs(),
            interval_secs: crate::defaults::repeat_interval_secs(),
        }
    }
}
