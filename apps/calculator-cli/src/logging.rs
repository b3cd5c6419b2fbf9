//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Filter directive for the given verbosity, falling back to the configured level.
#[must_use]
pub fn level_directive(cfg: &LoggingConfig, verbose: u8) -> &str {
    match verbose {
        0 => cfg.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber. `RUST_LOG` wins over everything else.
///
/// # Errors
/// Returns an error if the directive is invalid or a subscriber is already set.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level_directive(cfg, verbose))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
