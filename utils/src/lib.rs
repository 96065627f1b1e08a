//! Shared utilities for the homework bot workspace.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;

/// Current Unix time in whole seconds.
///
/// A clock set before the epoch yields 0.
pub fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Installs a stdout fmt subscriber.
///
/// `RUST_LOG` wins over `default_directives` when set.
pub fn init_logging(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();
}
