//! Logging setup for the command-line tools.
//!
//! Diagnostics go to stderr through `tracing`; stdout is left for the
//! per-icon status lines.
//!
//! Level priority: `RUST_LOG` > `--debug` > [`DEFAULT_LOG_LEVEL`].

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `--debug` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs the global subscriber. Call once at the start of `main`.
pub fn init(debug: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
}
