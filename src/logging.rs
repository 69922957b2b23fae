//! Diagnostic logging.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer so that stdout
//! carries nothing but command results.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::config::LogLevel;

/// Install the global subscriber at `level`.
///
/// Does nothing if a subscriber is already installed.
pub fn init(level: LogLevel) {
    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::from(level));

    // Fails only when a global subscriber already exists.
    let _ = tracing_subscriber::registry().with(console).try_init();
}
