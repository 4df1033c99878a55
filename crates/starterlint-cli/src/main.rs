//! CLI entrypoint for the `starterlint` migration checker.
//!
//! The binary delegates to [`starterlint_cli::run`], which loads layered
//! configuration, scans the named files and directories, and reports any
//! legacy test bootstrap it finds.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    starterlint_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
