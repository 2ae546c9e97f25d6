//! Diagnostic logging for the CLIs
//!
//! User-facing messages go to stdout; tracing output goes to stderr so it never mixes
//! with confirmations.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter (e.g. `GAP_LOG=debug`)
pub const LOG_ENV: &str = "GAP_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber; later calls are ignored
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
