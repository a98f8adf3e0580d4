//! Configuration for the arkana input layer.
//!
//! This crate provides configuration loading, saving, and default values
//! for shortcut bindings. It includes:
//!
//! - Shortcut binding and key-repeat types
//! - The default menu shortcut set
//! - YAML persistence with atomic writes

pub mod config;
pub mod defaults;
mod error;
mod types;

pub use config::InputConfig;
pub use error::ConfigError;
pub use types::{KeyRepeatConfig, LogLevel, ShortcutBinding};
