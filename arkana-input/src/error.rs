//! Error types for the input manager.

use thiserror::Error;

/// Errors reported by [`crate::InputManager`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// `pop_context` without a matching `push_context`.
    #[error("pop_context called with no pushed context")]
    UnbalancedPop,
}
