// src/log.rs
use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

const DEFAULT_FILTER: &str = "info";

/// Install the stdout subscriber. `RUST_LOG` overrides the default `info` level.
/// Lines carry the elapsed time since start, e.g. `0.004213s  INFO Generated: ...`.
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stdout)
        .try_init();
}
