//! Shortcut management and validation methods for `InputConfig`.

use std::collections::HashSet;

use super::config_struct::InputConfig;
use crate::error::ConfigError;

impl InputConfig {
    /// Merge default shortcuts into the user's config.
    ///
    /// Only adds shortcuts whose names don't already exist, so new defaults
    /// reach existing users without overriding their own bindings.
    /// Returns how many were added.
    pub fn merge_default_shortcuts(&mut self) -> usize {
        let existing_names: HashSet<String> =
            self.shortcuts.iter().map(|s| s.name.clone()).collect();

        let mut added_count = 0;
        for default_shortcut in crate::defaults::shortcuts() {
            if !existing_names.contains(&default_shortcut.name) {
                log::info!(
                    "Adding new default shortcut: {} -> {}",
                    default_shortcut.keys,
                    default_shortcut.name
                );
                self.shortcuts.push(default_shortcut);
                added_count += 1;
            }
        }

        if added_count > 0 {
            log::info!(
                "Merged {} new default shortcut(s) into user config",
                added_count
            );
        }
        added_count
    }

    /// Check field values that serde alone cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let repeat = &self.key_repeat;
        if !(repeat.delay_secs.is_finite() && repeat.delay_secs > 0.0) {
            return Err(ConfigError::Validation(format!(
                "key_repeat.delay_secs must be a positive number, got {}",
                repeat.delay_secs
            )));
        }
        if !(repeat.interval_secs.is_finite() && repeat.interval_secs > 0.0) {
            return Err(ConfigError::Validation(format!(
                "key_repeat.interval_secs must be a positive number, got {}",
                repeat.interval_secs
            )));
        }

        let mut seen = HashSet::new();
        for shortcut in &self.shortcuts {
            if shortcut.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "shortcut bound to '{}' has an empty name",
                    shortcut.keys
                )));
            }
            if !seen.insert(shortcut.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate shortcut name '{}'",
                    shortcut.name
                )));
            }
        }
        Ok(())
    }
}
