//! Report rendering for scan results.
//!
//! Findings are written to stdout either as human-readable blocks with
//! source context or as a single JSON array for tooling.

mod render;

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use starterlint::Diagnostic;

use crate::AppError;

pub(crate) use render::render_finding;

/// Output format selection for the report.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `human` for terminal output and `json` for redirected output.
    Auto,
    /// Always render human-readable output.
    Human,
    /// Always emit a JSON array of findings.
    Json,
}

/// Output format after resolving `auto` based on TTY detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// Human-readable output with source context.
    Human,
    /// A JSON array of findings.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto => {
                if stdout_is_terminal {
                    ResolvedOutputFormat::Human
                } else {
                    ResolvedOutputFormat::Json
                }
            }
            Self::Human => ResolvedOutputFormat::Human,
            Self::Json => ResolvedOutputFormat::Json,
        }
    }
}

/// One diagnostic together with the unit it was reported for.
#[derive(Debug, Serialize)]
pub(crate) struct Finding<'a> {
    /// Identifier (path) of the unit.
    pub(crate) unit: &'a str,
    /// Full text of the unit, used for source context.
    #[serde(skip)]
    pub(crate) text: &'a str,
    /// The reported diagnostic.
    pub(crate) diagnostic: Diagnostic,
}

/// Writes all findings in the requested format.
pub(crate) fn emit_findings<W: Write>(
    stdout: &mut W,
    findings: &[Finding<'_>],
    format: ResolvedOutputFormat,
) -> Result<(), AppError> {
    match format {
        ResolvedOutputFormat::Human => {
            for finding in findings {
                render_finding(stdout, finding).map_err(AppError::EmitReport)?;
            }
        }
        ResolvedOutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *stdout, findings)
                .map_err(AppError::SerialiseFindings)?;
            stdout.write_all(b"\n").map_err(AppError::EmitReport)?;
        }
    }
    stdout.flush().map_err(AppError::EmitReport)
}
