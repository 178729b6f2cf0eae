//! Tracing setup: file-only, opt-in through an environment variable.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "TINTED_COUNTER_LOG";

/// Initialize tracing with optional file output.
///
/// Nothing is logged unless `TINTED_COUNTER_LOG` names a file: writing to
/// stderr would tear through the alternate screen. `RUST_LOG` sets the
/// filter, defaulting to `info`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A second init (e.g. tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
