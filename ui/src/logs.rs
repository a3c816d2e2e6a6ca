//! Logging to the browser console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

const DEFAULT_FILTER: &str = "error,ui=debug";

/// Route `tracing` events from the console code to `console.*`. Called once
/// when the app mounts.
pub fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time() // no std::time in the browser
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_FILTER))
        .with(fmt_layer)
        .try_init();

    match installed {
        Ok(()) => tracing::info!(filter = DEFAULT_FILTER, "Initialized logs"),
        Err(e) => tracing::warn!("Logging already initialized: {e}"),
    }
}
