//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`
/// (e.g. `RUST_LOG=shift_management=debug`).
///
/// # Example
///
/// ```no_run
/// shift_management::logging::init("info");
/// ```
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Initializes a debug-level subscriber writing through the test harness.
///
/// Safe to call from several tests.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
