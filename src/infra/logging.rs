//! File-backed tracing setup. The terminal belongs to the TUI, so nothing is
//! ever written to stdout/stderr from here.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::constants::{DEFAULT_LOG_FILTER, LOG_DIR, LOG_FILE};

/// Install the global subscriber. The returned guard must live until exit,
/// otherwise buffered lines are dropped.
pub fn init() -> io::Result<WorkerGuard> {
    dotenvy::dotenv().ok();

    let dir = Path::new(LOG_DIR);
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Keep an already-installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(guard)
}
