//! Error types for the detector.

use starterlint_syntax::{SupportedLanguage, SyntaxError, SyntaxErrorInfo};
use thiserror::Error;

/// A source unit could not be analysed.
///
/// The detector never reports diagnostics for a unit it failed to parse;
/// callers are expected to report the error and continue with other units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The text contains a syntax error.
    #[error("{unit}:{line}:{column}: {message}")]
    Syntax {
        /// Identifier of the rejected unit.
        unit: String,
        /// Language the unit was parsed as.
        language: SupportedLanguage,
        /// One-based line of the first syntax error.
        line: u32,
        /// One-based column of the first syntax error.
        column: u32,
        /// Description of the first syntax error.
        message: String,
    },

    /// The parser could not be set up or produced no tree.
    #[error("{unit}: {source}")]
    Parser {
        /// Identifier of the unit being parsed.
        unit: String,
        /// The underlying syntax layer failure.
        source: SyntaxError,
    },
}

impl ParseError {
    pub(crate) fn syntax(unit: &str, language: SupportedLanguage, info: SyntaxErrorInfo) -> Self {
        Self::Syntax {
            unit: unit.to_owned(),
            language,
            line: info.line,
            column: info.column,
            message: info.message,
        }
    }

    pub(crate) fn parser(unit: &str, source: SyntaxError) -> Self {
        Self::Parser {
            unit: unit.to_owned(),
            source,
        }
    }

    /// Returns the identifier of the unit that failed.
    #[must_use]
    pub fn unit(&self) -> &str {
        match self {
            Self::Syntax { unit, .. } | Self::Parser { unit, .. } => unit,
        }
    }

    /// Returns the one-based line and column of a syntax error.
    ///
    /// Parser failures have no position and return `None`.
    #[must_use]
    pub const fn position(&self) -> Option<(u32, u32)> {
        match self {
            Self::Syntax { line, column, .. } => Some((*line, *column)),
            Self::Parser { .. } => None,
        }
    }
}
