//! Process-wide logging setup.

use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber: JSON output with timestamps,
/// filtered through `RUST_LOG` (falling back to `info`).
///
/// Idempotent; if a subscriber is already installed the call is a no-op, so
/// binaries and tests may both call it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_timer(SystemTime)
        .with_target(false)
        .try_init();
}
