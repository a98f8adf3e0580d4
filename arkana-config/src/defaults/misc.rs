//! Default values that do not belong to a single focused subsystem.

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

// ── Key repeat ─────────────────────────────────────────────────────────────

/// Initial hold time before a key starts repeating.
pub fn repeat_delay_secs() -> f64 {
    0.5
}

/// Time between repeats once repeating.
pub fn repeat_interval_secs() -> f64 {
    0.05
}
