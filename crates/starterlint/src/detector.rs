//! The pattern detector facade.

use std::iter::FusedIterator;
use std::path::Path;

use starterlint_core::{DetectorConfig, Diagnostic, SourceUnit};
use starterlint_syntax::{Parser, SupportedLanguage};
use tracing::debug;

use crate::error::ParseError;
use crate::rules::prefer_test_starter;

const DETECTOR_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::detector");

/// Scans source units for the legacy test bootstrap pattern.
///
/// The detector is immutable after construction and carries no state
/// between calls: scanning the same unit twice yields the same diagnostics.
/// Units are independent, so one detector may be shared across threads.
///
/// # Example
///
/// ```
/// use starterlint::{Detector, SourceUnit};
///
/// let detector = Detector::default();
/// let unit = SourceUnit::new(
///     "legacy.qunit.js",
///     "QUnit.config.autostart = false;\n\
///      sap.ui.require([], function() { QUnit.start(); });",
/// );
///
/// let diagnostics: Vec<_> = detector.detect(&unit)?.collect();
/// assert_eq!(diagnostics.len(), 1);
/// # Ok::<(), starterlint::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Creates a detector with the given configuration.
    #[must_use]
    pub const fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Returns the detector configuration.
    #[must_use]
    pub const fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Scans one unit, inferring its language from the unit identifier.
    ///
    /// Identifiers without a recognised extension are parsed as JavaScript.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the text contains a syntax error. No
    /// diagnostics are produced for such a unit.
    pub fn detect(&self, unit: &SourceUnit) -> Result<Diagnostics, ParseError> {
        let language = SupportedLanguage::from_path(Path::new(unit.id())).unwrap_or_default();
        self.detect_with_language(unit, language)
    }

    /// Scans one unit as the given language.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the text contains a syntax error or the
    /// parser cannot be initialised.
    pub fn detect_with_language(
        &self,
        unit: &SourceUnit,
        language: SupportedLanguage,
    ) -> Result<Diagnostics, ParseError> {
        if unit.is_empty() {
            debug!(target: DETECTOR_TARGET, unit = unit.id(), "empty unit");
            return Ok(Diagnostics::default());
        }

        let mut parser = Parser::new(language).map_err(|err| ParseError::parser(unit.id(), err))?;
        let parsed = parser
            .parse(unit.text())
            .map_err(|err| ParseError::parser(unit.id(), err))?;

        if let Some(info) = parsed.first_error() {
            debug!(
                target: DETECTOR_TARGET,
                unit = unit.id(),
                line = info.line,
                column = info.column,
                "rejecting unit with syntax errors"
            );
            return Err(ParseError::syntax(unit.id(), language, info));
        }

        let found: Vec<Diagnostic> =
            prefer_test_starter::check(parsed.root_node(), parsed.source(), &self.config)
                .into_iter()
                .collect();
        debug!(
            target: DETECTOR_TARGET,
            unit = unit.id(),
            %language,
            diagnostics = found.len(),
            "scanned unit"
        );
        Ok(Diagnostics::new(found))
    }
}

/// Diagnostics produced for one unit, in source order.
///
/// The sequence is finite and owned; clone it to iterate again.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    inner: std::vec::IntoIter<Diagnostic>,
}

impl Diagnostics {
    fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            inner: diagnostics.into_iter(),
        }
    }

    /// Returns the diagnostics not yet consumed, without advancing.
    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        self.inner.as_slice()
    }
}

impl Iterator for Diagnostics {
    type Item = Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Diagnostics {}

impl FusedIterator for Diagnostics {}
