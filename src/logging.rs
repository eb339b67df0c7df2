//! Logging initialization for the command-line driver.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` is honoured and defaults to `warn`. Each `-v` raises the level:
/// 1 = INFO, 2 = DEBUG, 3+ = TRACE.
///
/// # Panics
/// Panics if a global subscriber is already installed.
pub fn init(verbosity: u8) {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let level = match verbosity {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    };
    if let Some(level) = level {
        filter = filter.add_directive(level.into());
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
