//! Logging setup for binaries and examples built on the client

use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`, or whatever `RUST_LOG` asks for.
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize the logger with a default level used when `RUST_LOG` is unset.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_logger_with_level(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}
