//! File-backed tracing setup.
//!
//! The TUI owns the terminal once it enters the alternate screen, so log
//! output goes to the file named by the MORTGAGE_LOG env var instead of
//! stdout. Without MORTGAGE_LOG no subscriber is installed and events are
//! discarded.

use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Initializes logging. Call once at startup, before the terminal enters
/// raw mode. Level defaults to INFO; RUST_LOG overrides it.
pub fn init() {
    let Ok(path) = std::env::var("MORTGAGE_LOG") else {
        return;
    };
    let file = match File::options().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("cannot open log file '{path}': {error}");
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .try_init();
}
