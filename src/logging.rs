//! Logger initialisation for the binary.

use log::LevelFilter;

/// Install `env_logger` as the `log` backend.
///
/// Precedence, lowest to highest: the configured level, `RUST_LOG`, the
/// `--log-level` flag. Calling this twice is harmless; the second call is
/// ignored.
pub fn init_logging(config_level: LevelFilter, cli_level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config_level);
    builder.parse_default_env();
    if let Some(level) = cli_level {
        builder.filter_level(level);
    }
    builder.format_timestamp_millis();

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}
