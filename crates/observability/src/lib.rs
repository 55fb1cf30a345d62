//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide tracing/logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
/// A malformed `STOCKLEDGER_LOG_FORMAT` falls back to the default format.
pub fn init() {
    let config = LogConfig::from_env().unwrap_or_default();
    tracing::init(&config);
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogConfig, LogConfigError, LogFormat};
