//! Tracing setup.
//!
//! The form owns the terminal, so logs go to
//! `${AUTHFORM_HOME}/logs/authform.log` through a non-blocking writer.
//! Verbosity comes from `AUTHFORM_LOG` (EnvFilter syntax, default `warn`).

use std::fs;

use authform_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_ENV: &str = "AUTHFORM_LOG";
const LOG_FILE: &str = "authform.log";

/// Installs the global subscriber.
///
/// Returns the writer guard, which must be held until exit so buffered lines
/// are flushed. Returns `None` when the log directory cannot be created;
/// logging is then disabled rather than failing the command.
pub fn init() -> Option<WorkerGuard> {
    let log_dir = paths::logs_dir();
    if fs::create_dir_all(&log_dir).is_err() {
        return None;
    }

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(guard)
}
