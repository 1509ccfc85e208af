//! Logging
//!
//! Library code logs through the `log` facade. Hosts call `init_logger`
//! once to route those records (and any `tracing` events) to stderr.

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Returns false if a subscriber was already installed.
pub fn init_logger(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%H:%M:%S%.3f".to_string()))
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Logger initialized (default filter: {})", default_filter);
    }
    installed
}
