//! Error types for shortcut registration.

use thiserror::Error;

use crate::combo::KeyCombo;
use crate::parser::ParseError;

/// Errors reported by [`crate::ComboRegistry`] and [`crate::KeyCombo`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShortcutError {
    /// A combo or modifier name is already registered.
    #[error("duplicate shortcut name '{0}'")]
    DuplicateName(String),

    /// No combo with this name is registered.
    #[error("unknown shortcut '{0}'")]
    UnknownShortcut(String),

    /// `attach` on a combo that is still linked into the trees.
    #[error("shortcut '{0}' is not detached")]
    NotDetached(String),

    /// The combo name is empty or whitespace.
    #[error("shortcut name is empty")]
    EmptyName,

    /// A binding string could not be parsed.
    #[error("invalid binding '{keys}': {source}")]
    Parse {
        keys: String,
        #[source]
        source: ParseError,
    },
}

/// A combo tree that was refused, handed back intact.
///
/// The tree keeps its command, so the caller can rename it and try again or
/// just drop it.
#[derive(Debug, Error)]
#[error("shortcut '{}' not registered: {source}", .combo.name())]
pub struct RejectedCombo {
    pub combo: KeyCombo,
    #[source]
    pub source: ShortcutError,
}

impl RejectedCombo {
    pub(crate) fn new(combo: KeyCombo, source: ShortcutError) -> Self {
        Self { combo, source }
    }

    pub fn error(&self) -> &ShortcutError {
        &self.source
    }

    pub fn into_combo(self) -> KeyCombo {
        self.combo
    }
}

impl From<RejectedCombo> for ShortcutError {
    fn from(rejected: RejectedCombo) -> Self {
        rejected.source
    }
}
