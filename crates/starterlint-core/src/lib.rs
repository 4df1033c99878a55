//! Core data model for the `starterlint` migration checks.
//!
//! This crate holds the types shared by the detector, the syntax layer, and
//! the reporting CLI: source units handed in by callers, byte and
//! line/column spans, structured diagnostics, and the detector settings.
//!
//! # Core types
//!
//! - [`SourceUnit`]: an identifier plus the full text to scan
//! - [`Span`] and [`LineCol`]: byte and line/column source positions
//! - [`Diagnostic`], [`RuleId`], and [`Severity`]: reported findings
//! - [`DetectorConfig`]: names of the test globals the detector recognises
//!
//! # Example
//!
//! ```
//! use starterlint_core::{LineCol, SourceUnit, Span};
//!
//! let unit = SourceUnit::new("legacy.qunit.js", "QUnit.config.autostart = false;");
//! assert_eq!(unit.id(), "legacy.qunit.js");
//!
//! let span = Span::new(0, 31, LineCol::new(0, 0), LineCol::new(0, 31));
//! assert_eq!(span.start().one_based(), (1, 1));
//! ```

mod config;
mod diagnostic;
mod source;
mod span;

pub use config::{ConfigError, DetectorConfig};
pub use diagnostic::{Diagnostic, RelatedSpan, RuleId, Severity};
pub use source::SourceUnit;
pub use span::{LineCol, Span};

#[cfg(test)]
mod tests;
