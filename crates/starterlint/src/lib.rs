//! Detection of the legacy QUnit bootstrap pattern.
//!
//! Older test files switch off the runner's automatic start and restart it
//! by hand once their test modules have loaded:
//!
//! ```js
//! QUnit.config.autostart = false;
//!
//! sap.ui.require(["app/test/unit/controller/App.controller"], function() {
//!     "use strict";
//!     QUnit.start();
//! });
//! ```
//!
//! The [`Detector`] recognises this shape structurally, using a Tree-sitter
//! syntax tree, and reports a single `prefer-test-starter` [`Diagnostic`]
//! recommending the declarative Test Starter instead. Files with only one of
//! the two halves are not flagged, and files that fail to parse produce a
//! [`ParseError`] rather than partial results.
//!
//! The detector performs no I/O. Reading files, rendering diagnostics, and
//! choosing an exit status are left to the caller (see the `starterlint`
//! command-line tool).

mod detector;
mod error;
mod rules;

pub use detector::{Detector, Diagnostics};
pub use error::ParseError;
pub use starterlint_core::{
    ConfigError, DetectorConfig, Diagnostic, LineCol, RelatedSpan, RuleId, Severity, SourceUnit,
    Span,
};
pub use starterlint_syntax::SupportedLanguage;

#[cfg(test)]
mod tests;
