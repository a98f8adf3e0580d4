//! The `InputConfig` struct.

use serde::{Deserialize, Serialize};

use crate::types::{KeyRepeatConfig, LogLevel, ShortcutBinding};

/// Input layer configuration, stored as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Default log filter for the input tools
    #[serde(default)]
    pub log_level: LogLevel,

    /// Synthesized key repeat timing
    #[serde(default)]
    pub key_repeat: KeyRepeatConfig,

    /// Registered shortcuts
    #[serde(default = "crate::defaults::shortcuts")]
    pub shortcuts: Vec<ShortcutBinding>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            key_repeat: KeyRepeatConfig::default(),
            shortcuts: crate::defaults::shortcuts(),
        }
    }
}
