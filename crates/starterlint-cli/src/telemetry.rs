//! Log output for the CLI.
//!
//! Records go to stderr so they never mix with the report on stdout. The
//! compact format is meant for people and omits timestamps; the JSON format
//! is meant for CI log collectors and stamps each record in RFC 3339.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use starterlint_config::{Config, LogFormat};
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

static INSTALLED: OnceCell<()> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub(crate) enum TelemetryError {
    #[error("invalid log filter '{expression}': {message}")]
    InvalidFilter { expression: String, message: String },
    #[error("failed to install log subscriber: {0}")]
    Install(#[source] SetGlobalDefaultError),
}

/// Installs the process-wide subscriber on first use; later calls are no-ops.
pub(crate) fn initialise(config: &Config) -> Result<(), TelemetryError> {
    INSTALLED.get_or_try_init(|| install(config)).map(|&()| ())
}

fn install(config: &Config) -> Result<(), TelemetryError> {
    let filter = parse_filter(config.log_filter())?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        LogFormat::Json => Box::new(
            builder
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_timer(UtcTime::rfc_3339())
                .finish(),
        ),
        LogFormat::Compact => Box::new(
            builder
                .compact()
                .without_time()
                .with_ansi(io::stderr().is_terminal())
                .finish(),
        ),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Install)
}

fn parse_filter(expression: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(expression).map_err(|error| TelemetryError::InvalidFilter {
        expression: expression.to_owned(),
        message: error.to_string(),
    })
}
