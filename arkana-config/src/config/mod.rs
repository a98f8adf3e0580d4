//! Input configuration management.
//!
//! # Sub-modules
//!
//! - [`config_struct`]: Core `InputConfig` struct and its `Default` impl
//! - [`shortcut_methods`]: `impl InputConfig` methods for shortcut merging and validation
//! - [`persistence`]: `impl InputConfig` methods for load/save/path-resolution

pub mod config_struct;
pub mod persistence;
pub mod shortcut_methods;

pub use config_struct::InputConfig;
