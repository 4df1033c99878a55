//! Detector settings naming the test globals to recognise.

use thiserror::Error;

/// Test runner global recognised when nothing else is configured.
const DEFAULT_TEST_GLOBAL: &str = "QUnit";

/// Receivers that may qualify the test global (`window.QUnit`).
const DEFAULT_GLOBAL_RECEIVERS: [&str; 3] = ["window", "globalThis", "self"];

/// Detector configuration.
///
/// # Defaults
///
/// - `test_global`: `QUnit`
/// - `global_receivers`: `window`, `globalThis`, `self`
///
/// # Example
///
/// ```
/// use starterlint_core::DetectorConfig;
///
/// let config = DetectorConfig::default();
/// assert_eq!(config.test_global(), "QUnit");
/// assert!(config.is_global_receiver("globalThis"));
///
/// let custom = DetectorConfig::new("Runner")?;
/// assert_eq!(custom.test_global(), "Runner");
/// # Ok::<(), starterlint_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Name of the global test-configuration object.
    test_global: String,
    /// Global objects through which the test global may be reached.
    global_receivers: Vec<String>,
}

impl DetectorConfig {
    /// Creates a configuration for the given test global, keeping the default
    /// receivers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidIdentifier`] when `test_global` is not a
    /// plain JavaScript identifier.
    pub fn new(test_global: impl Into<String>) -> Result<Self, ConfigError> {
        let test_global = test_global.into();
        validate_identifier(&test_global)?;
        Ok(Self {
            test_global,
            ..Self::default()
        })
    }

    /// Replaces the receivers allowed in front of the test global.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidIdentifier`] when any receiver is not a
    /// plain JavaScript identifier.
    pub fn with_global_receivers<I, S>(mut self, receivers: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let receivers: Vec<String> = receivers.into_iter().map(Into::into).collect();
        for receiver in &receivers {
            validate_identifier(receiver)?;
        }
        self.global_receivers = receivers;
        Ok(self)
    }

    /// Returns the test global name.
    #[must_use]
    pub fn test_global(&self) -> &str {
        &self.test_global
    }

    /// Returns the receivers allowed in front of the test global.
    #[must_use]
    pub fn global_receivers(&self) -> &[String] {
        &self.global_receivers
    }

    /// Returns `true` if `name` may qualify the test global.
    #[must_use]
    pub fn is_global_receiver(&self, name: &str) -> bool {
        self.global_receivers.iter().any(|receiver| receiver == name)
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            test_global: DEFAULT_TEST_GLOBAL.to_owned(),
            global_receivers: DEFAULT_GLOBAL_RECEIVERS
                .iter()
                .map(|receiver| (*receiver).to_owned())
                .collect(),
        }
    }
}

/// Errors raised while building a [`DetectorConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configured name cannot appear as a bare identifier in source code.
    #[error("'{name}' is not a valid JavaScript identifier")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
    },
}

fn validate_identifier(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$');

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier {
            name: name.to_owned(),
        })
    }
}
