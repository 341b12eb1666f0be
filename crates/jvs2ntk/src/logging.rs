//! Tracing setup for the CLI. Logs go to stderr so stdout stays reserved for
//! user-facing messages.

use tracing_subscriber::EnvFilter;

/// Filter for a `-v` count. Without `-v`, `RUST_LOG` applies and falls back
/// to `warn`.
pub fn filter_for(verbosity: u8) -> EnvFilter {
    match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
