//! Layered configuration for the `starterlint` command-line tool.
//!
//! [`Config`] is loaded through `ortho_config`, which merges, from lowest to
//! highest precedence:
//!
//! 1. built-in defaults
//! 2. a TOML file named by `--config-path` or `STARTERLINT_CONFIG_PATH`
//! 3. `STARTERLINT_*` environment variables
//! 4. command-line flags (`--log-filter`, `--log-format`, `--test-global`)
//!
//! Malformed sources are reported together as a single aggregated error.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use starterlint_core::{ConfigError, DetectorConfig};

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_TEST_GLOBAL, default_log_filter, default_log_filter_string,
    default_log_format, default_test_global,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration for one `starterlint` run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "STARTERLINT")]
pub struct Config {
    /// Tracing filter expression, in `EnvFilter` syntax.
    #[serde(default = "default_log_filter_string")]
    log_filter: String,
    /// Output format for log records written to stderr.
    #[serde(default = "default_log_format")]
    log_format: LogFormat,
    /// Name of the test runner global whose bootstrap calls are checked.
    #[serde(default = "default_test_global")]
    test_global: String,
}

impl Config {
    /// Returns the tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the configured test runner global.
    #[must_use]
    pub fn test_global(&self) -> &str {
        &self.test_global
    }

    /// Builds the detector settings described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidIdentifier`] when the configured test
    /// global cannot name a JavaScript variable.
    pub fn detector_config(&self) -> Result<DetectorConfig, ConfigError> {
        DetectorConfig::new(self.test_global.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            test_global: default_test_global(),
        }
    }
}
