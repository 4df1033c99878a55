//! Command-line runtime for the `starterlint` migration checker.
//!
//! The module owns argument parsing, configuration bootstrapping, source
//! collection, and report rendering. The interface is designed to be
//! exercised both from the binary entrypoint and from tests where
//! configuration loading and IO streams can be substituted.
//!
//! # Exit status
//!
//! - `0`: no legacy bootstrap found (units that failed to decode or parse
//!   are reported on stderr but do not fail the run)
//! - `1`: at least one diagnostic was reported
//! - `2`: usage, configuration, or I/O failure

use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use starterlint::{ConfigError, Detector, SupportedLanguage};
use starterlint_config::Config;
use thiserror::Error;
use tracing::{info, warn};

mod config;
mod output;
mod sources;
mod telemetry;

use config::{prepare_cli_arguments, split_config_arguments};
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
use output::{Finding, emit_findings};
pub use output::{OutputFormat, ResolvedOutputFormat};
use sources::{LoadedSource, LoadedUnit, load_units};
use telemetry::TelemetryError;

/// CLI flags recognised by the configuration loader.
///
/// MAINTENANCE: This list must be kept in sync with the fields of
/// `starterlint_config::Config`.
const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--test-global",
];

/// Exit status when at least one diagnostic was reported.
const EXIT_FINDINGS: u8 = 1;
/// Exit status for usage, configuration, and I/O failures.
const EXIT_FAILURE: u8 = 2;

const CLI_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::run");

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
    stdout_is_terminal: bool,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self {
            stdout,
            stderr,
            stdout_is_terminal: io::stdout().is_terminal(),
        }
    }

    #[cfg(test)]
    pub(crate) const fn with_terminal_status(
        stdout: &'a mut W,
        stderr: &'a mut E,
        stdout_is_terminal: bool,
    ) -> Self {
        Self {
            stdout,
            stderr,
            stdout_is_terminal,
        }
    }

    pub(crate) const fn stdout_is_terminal(&self) -> bool {
        self.stdout_is_terminal
    }
}

struct CliRunner<'io, 'a, W: Write, E: Write, L: ConfigLoader> {
    io: &'io mut IoStreams<'a, W, E>,
    loader: &'io L,
}

impl<'io, 'a, W, E, L> CliRunner<'io, 'a, W, E, L>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    const fn new(io: &'io mut IoStreams<'a, W, E>, loader: &'io L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let arguments: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&arguments);
        let cli_arguments = prepare_cli_arguments(&arguments, &split);

        let cli = match Cli::try_parse_from(cli_arguments) {
            Ok(cli) => cli,
            Err(error) if !error.use_stderr() => {
                // `--help` and `--version` are successful requests for output.
                return match write!(self.io.stdout, "{error}") {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(_) => ExitCode::from(EXIT_FAILURE),
                };
            }
            Err(error) => return self.fail(&AppError::CliUsage(error)),
        };

        let result = self
            .loader
            .load(&split.config_arguments)
            .and_then(|config| self.scan(&cli, &config));

        match result {
            Ok(exit_code) => exit_code,
            Err(error) => self.fail(&error),
        }
    }

    fn scan(&mut self, cli: &Cli, config: &Config) -> Result<ExitCode, AppError> {
        telemetry::initialise(config)?;
        let detector = Detector::new(config.detector_config()?);
        let sources = load_units(&cli.paths)?;

        let mut findings: Vec<Finding<'_>> = Vec::new();
        let mut skipped = 0usize;
        for source in &sources {
            let LoadedUnit { unit, language } = match source {
                LoadedSource::Decoded(loaded) => loaded,
                LoadedSource::Undecodable(undecodable) => {
                    self.report_skipped(&undecodable.path, undecodable)?;
                    skipped += 1;
                    continue;
                }
            };
            let effective = cli.language.or(*language).unwrap_or_default();
            match detector.detect_with_language(unit, effective) {
                Ok(diagnostics) => findings.extend(diagnostics.map(|diagnostic| Finding {
                    unit: unit.id(),
                    text: unit.text(),
                    diagnostic,
                })),
                Err(error) => {
                    self.report_skipped(unit.id(), &error)?;
                    skipped += 1;
                }
            }
        }

        let format = cli.output.resolve(self.io.stdout_is_terminal());
        emit_findings(self.io.stdout, &findings, format)?;
        info!(
            target: CLI_TARGET,
            units = sources.len(),
            diagnostics = findings.len(),
            skipped,
            "scan complete"
        );

        if findings.is_empty() {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::from(EXIT_FINDINGS))
        }
    }

    /// Reports a unit that could not be scanned without stopping the run.
    fn report_skipped(
        &mut self,
        unit: &str,
        reason: &dyn std::error::Error,
    ) -> Result<(), AppError> {
        warn!(target: CLI_TARGET, unit, %reason, "skipping unit");
        writeln!(self.io.stderr, "error: {reason}").map_err(AppError::EmitReport)
    }

    fn fail(&mut self, error: &AppError) -> ExitCode {
        // Nothing more can be reported if stderr itself is broken.
        writeln!(self.io.stderr, "{error}").ok();
        ExitCode::from(EXIT_FAILURE)
    }
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
#[must_use]
pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}

/// Reports JavaScript and TypeScript test files that still bootstrap QUnit
/// by hand instead of using the Test Starter.
///
/// Configuration flags (`--config-path`, `--log-filter`, `--log-format`,
/// `--test-global`) must come before the options below.
#[derive(Parser, Debug)]
#[command(name = "starterlint", version)]
struct Cli {
    /// Controls how findings are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,
    /// Parses every unit as this language instead of inferring it from the
    /// file extension.
    #[arg(long, value_name = "LANGUAGE")]
    language: Option<SupportedLanguage>,
    /// Files or directories to scan.
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("invalid configuration: {0}")]
    DetectorConfig(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: String,
        source: walkdir::Error,
    },
    #[error("failed to read {path}: {source}")]
    ReadSource { path: String, source: io::Error },
    #[error("failed to serialise findings: {0}")]
    SerialiseFindings(serde_json::Error),
    #[error("failed to write report: {0}")]
    EmitReport(io::Error),
}

#[cfg(test)]
mod tests;
