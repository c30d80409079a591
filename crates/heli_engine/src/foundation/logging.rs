//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// `RUST_LOG` wins when it is set; otherwise `default_level` (e.g. `"info"`) is used.
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    // A second init (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env).format_timestamp_millis().try_init();
}
