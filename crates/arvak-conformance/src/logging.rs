//! Logging for test binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the test log filter.
pub const LOG_ENV: &str = "ARVAK_LOG";

/// Install a test-friendly subscriber once per process.
///
/// The filter comes from `ARVAK_LOG` (e.g. `ARVAK_LOG=arvak_conformance=debug`)
/// and falls back to `warn`. Later calls are no-ops.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}
