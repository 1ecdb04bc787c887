//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "DIARIST_LOG";
pub const DEFAULT_DIRECTIVES: &str = "diarist=warn";

/// Initialize the logging subsystem
///
/// Logs go to stderr so they never interleave with the journal on stdout.
/// Log level is controlled by the `DIARIST_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DIARIST_LOG=debug diarist
/// DIARIST_LOG=diarist::confirm=trace diarist
/// ```
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();
}
