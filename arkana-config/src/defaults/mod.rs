//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on config fields.

mod misc;
mod shortcuts;

// ── Primitives & key repeat ────────────────────────────────────────────────
pub use misc::{bool_false, bool_true, repeat_delay_secs, repeat_interval_secs};

// ── Shortcuts ──────────────────────────────────────────────────────────────
pub use shortcuts::shortcuts;
