//! Tracing setup for the command-line binary.
//!
//! Library users wire their own subscriber; the binary calls
//! `init_tracing` once at startup.

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "AUTOCHART_LOG";

/// Installs a compact stderr subscriber.
///
/// The filter comes from `AUTOCHART_LOG` when set, otherwise `debug` or
/// `info` depending on `debug`. Returns `false` if a global subscriber was
/// already installed.
pub fn init_tracing(debug: bool) -> bool {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
