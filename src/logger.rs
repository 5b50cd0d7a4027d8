//! Logging setup for binaries and test harnesses that embed the library.

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a human-readable subscriber. Returns false if one was already set.
pub fn init_logger() -> bool {
    tracing_subscriber::fmt().with_env_filter(env_filter()).try_init().is_ok()
}

/// Install a JSON subscriber. Returns false if one was already set.
pub fn init_json_logger() -> bool {
    tracing_subscriber::fmt().with_env_filter(env_filter()).json().try_init().is_ok()
}
