//! Diagnostic types for structured migration reports.
//!
//! A [`Diagnostic`] is what the detector hands back when a source unit
//! matches a rule. Each entry carries a stable [`RuleId`], a fixed
//! [`Severity`], a primary [`Span`], secondary locations that explain the
//! finding, and free-form notes with migration hints. Diagnostics are plain
//! data: they are never persisted and can be rendered by any reporting
//! layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Stable identifiers for the rules shipped with `starterlint`.
///
/// # Example
///
/// ```
/// use starterlint_core::RuleId;
///
/// assert_eq!(RuleId::PreferTestStarter.to_string(), "prefer-test-starter");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum RuleId {
    /// Manual autostart control that the Test Starter replaces.
    PreferTestStarter,
}

impl RuleId {
    /// Returns the kebab-case rule name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreferTestStarter => "prefer-test-starter",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How seriously a reporting layer should treat a finding.
///
/// Detector rules always report [`Severity::Warning`]; [`Severity::Error`]
/// exists so reporters can label units that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The source works but should be migrated.
    Warning,
    /// The source could not be analysed.
    Error,
}

impl Severity {
    /// Returns the lower-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A secondary location that contributed to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedSpan {
    /// Where the related code lives.
    span: Span,
    /// Short label shown next to the location.
    label: String,
}

impl RelatedSpan {
    /// Creates a related span with a label.
    #[must_use]
    pub fn new(span: Span, label: impl Into<String>) -> Self {
        Self {
            span,
            label: label.into(),
        }
    }

    /// Returns the related location.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A single finding produced by a rule.
///
/// # Example
///
/// ```
/// use starterlint_core::{Diagnostic, LineCol, RuleId, Severity, Span};
///
/// let span = Span::new(0, 31, LineCol::new(4, 0), LineCol::new(4, 31));
/// let diag = Diagnostic::warning(RuleId::PreferTestStarter, "use the Test Starter", span);
/// assert_eq!(diag.severity(), Severity::Warning);
/// assert_eq!(diag.to_string(), "5:1: warning[prefer-test-starter]: use the Test Starter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic.
    rule: RuleId,
    /// How the finding should be treated.
    severity: Severity,
    /// A human-readable description of the problem.
    message: String,
    /// The primary location of the finding.
    span: Span,
    /// Secondary locations that explain the finding.
    related: Vec<RelatedSpan>,
    /// Additional notes providing context or suggestions.
    notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a warning diagnostic with no related spans or notes.
    #[must_use]
    pub fn warning(rule: RuleId, message: impl Into<String>, span: Span) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            message: message.into(),
            span,
            related: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Attaches a secondary location.
    #[must_use]
    pub fn with_related(mut self, related: RelatedSpan) -> Self {
        self.related.push(related);
        self
    }

    /// Attaches a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Returns the rule identifier.
    #[must_use]
    pub const fn rule(&self) -> RuleId {
        self.rule
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    /// Returns the secondary locations.
    #[must_use]
    pub fn related(&self) -> &[RelatedSpan] {
        &self.related
    }

    /// Returns the supplementary notes.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}[{}]: {}",
            self.span.start(),
            self.severity,
            self.rule,
            self.message
        )
    }
}
