//! Unit tests for the CLI runtime with a substituted configuration loader.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use rstest::{fixture, rstest};
use starterlint_config::Config;
use tempfile::TempDir;

use crate::{AppError, ConfigLoader, IoStreams, run_with_loader};

const LEGACY: &str = "QUnit.config.autostart = false;\n\
                      sap.ui.require([\"my/app/test/unit/AllTests\"], function() {\n\
                      \x20 QUnit.start();\n\
                      });\n";

const CLEAN: &str = "QUnit.module(\"Formatter\");\n";

const TRUNCATED: &str = "QUnit.config.autostart = false;\nsap.ui.require([], function() {\n";

/// Loader that ignores configuration flags and returns a fixed value.
struct FixedLoader(Config);

impl ConfigLoader for FixedLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(self.0.clone())
    }
}

struct Outcome {
    code: ExitCode,
    stdout: String,
    stderr: String,
}

#[fixture]
fn workspace() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("legacy.qunit.js"), LEGACY).expect("write legacy");
    fs::write(dir.path().join("clean.qunit.js"), CLEAN).expect("write clean");
    fs::write(dir.path().join("truncated.js"), TRUNCATED).expect("write truncated");
    dir
}

fn invoke(args: &[&str], terminal: bool) -> Outcome {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = {
        let mut io = IoStreams::with_terminal_status(&mut stdout, &mut stderr, terminal);
        let arguments = std::iter::once("starterlint")
            .chain(args.iter().copied())
            .map(OsString::from);
        run_with_loader(arguments, &mut io, &FixedLoader(Config::default()))
    };
    Outcome {
        code,
        stdout: String::from_utf8(stdout).expect("stdout utf8"),
        stderr: String::from_utf8(stderr).expect("stderr utf8"),
    }
}

fn path_arg(dir: &Path, name: &str) -> String {
    dir.join(name).display().to_string()
}

#[rstest]
fn legacy_file_exits_with_findings(workspace: TempDir) {
    let target = path_arg(workspace.path(), "legacy.qunit.js");
    let outcome = invoke(&["--output", "json", &target], false);

    assert_eq!(outcome.code, ExitCode::from(1));
    let report: serde_json::Value = serde_json::from_str(&outcome.stdout).expect("json report");
    let findings = report.as_array().expect("array");
    assert_eq!(findings.len(), 1);
    let finding = findings.first().expect("one finding");
    assert_eq!(finding["unit"], target.as_str());
    assert_eq!(finding["diagnostic"]["rule"], "prefer-test-starter");
    assert_eq!(finding["diagnostic"]["span"]["start"]["line"], 0);
    assert!(outcome.stderr.is_empty(), "stderr: {}", outcome.stderr);
}

#[rstest]
fn clean_file_exits_successfully(workspace: TempDir) {
    let target = path_arg(workspace.path(), "clean.qunit.js");
    let outcome = invoke(&["--output", "json", &target], false);

    assert_eq!(outcome.code, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "[]\n");
}

#[rstest]
fn auto_output_renders_human_report_on_terminals(workspace: TempDir) {
    let target = path_arg(workspace.path(), "legacy.qunit.js");
    let outcome = invoke(&[&target], true);

    assert_eq!(outcome.code, ExitCode::from(1));
    assert!(
        outcome
            .stdout
            .starts_with(&format!("{target}:1:1: warning[prefer-test-starter]:")),
        "stdout: {}",
        outcome.stdout
    );
    assert!(outcome.stdout.contains("deferred `QUnit.start()` call"));
}

#[rstest]
fn auto_output_emits_json_when_redirected(workspace: TempDir) {
    let target = path_arg(workspace.path(), "clean.qunit.js");
    let outcome = invoke(&[&target], false);

    assert_eq!(outcome.stdout, "[]\n");
}

#[rstest]
fn parse_errors_are_reported_without_failing_the_run(workspace: TempDir) {
    let target = path_arg(workspace.path(), "truncated.js");
    let outcome = invoke(&["--output", "json", &target], false);

    assert_eq!(outcome.code, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "[]\n");
    assert!(
        outcome.stderr.starts_with(&format!("error: {target}:")),
        "stderr: {}",
        outcome.stderr
    );
}

#[rstest]
fn directories_are_scanned_recursively(workspace: TempDir) {
    let root = workspace.path().display().to_string();
    let outcome = invoke(&["--output", "json", &root], false);

    assert_eq!(outcome.code, ExitCode::from(1));
    let report: serde_json::Value = serde_json::from_str(&outcome.stdout).expect("json report");
    assert_eq!(report.as_array().map(Vec::len), Some(1));
    assert!(outcome.stderr.contains("truncated.js"));
}

#[test]
fn undecodable_files_do_not_stop_the_batch() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("a_legacy.js"), LEGACY).expect("write legacy");
    fs::write(dir.path().join("b_binary.js"), [0xff_u8, 0xfe, 0x00, 0x41]).expect("write binary");
    let root = dir.path().display().to_string();

    let outcome = invoke(&["--output", "json", &root], false);

    assert_eq!(outcome.code, ExitCode::from(1));
    let report: serde_json::Value = serde_json::from_str(&outcome.stdout).expect("json report");
    assert_eq!(report.as_array().map(Vec::len), Some(1));
    let binary = path_arg(dir.path(), "b_binary.js");
    assert!(
        outcome
            .stderr
            .starts_with(&format!("error: {binary}: not valid UTF-8 text")),
        "stderr: {}",
        outcome.stderr
    );
}

#[rstest]
fn language_override_applies_to_every_unit(workspace: TempDir) {
    let target = path_arg(workspace.path(), "legacy.qunit.js");
    let outcome = invoke(&["--language", "typescript", "--output", "json", &target], false);

    assert_eq!(outcome.code, ExitCode::from(1));
}

#[rstest]
fn missing_paths_fail_with_usage_status(workspace: TempDir) {
    let target = path_arg(workspace.path(), "absent.js");
    let outcome = invoke(&[&target], false);

    assert_eq!(outcome.code, ExitCode::from(2));
    assert!(outcome.stderr.starts_with("failed to walk"), "stderr: {}", outcome.stderr);
    assert!(outcome.stdout.is_empty());
}

#[test]
fn missing_path_argument_is_a_usage_error() {
    let outcome = invoke(&[], false);

    assert_eq!(outcome.code, ExitCode::from(2));
    assert!(outcome.stderr.contains("PATH"), "stderr: {}", outcome.stderr);
}

#[rstest]
#[case("--help")]
#[case("--version")]
fn informational_flags_print_to_stdout(#[case] flag: &str) {
    let outcome = invoke(&[flag], false);

    assert_eq!(outcome.code, ExitCode::SUCCESS);
    assert!(outcome.stdout.contains("starterlint"), "stdout: {}", outcome.stdout);
}

#[rstest]
fn loader_failures_exit_with_failure_status(workspace: TempDir) {
    struct RejectingLoader;

    impl ConfigLoader for RejectingLoader {
        fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
            Err(AppError::DetectorConfig(
                starterlint::DetectorConfig::new("not-valid").expect_err("invalid name"),
            ))
        }
    }

    let target = path_arg(workspace.path(), "legacy.qunit.js");
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = {
        let mut io = IoStreams::with_terminal_status(&mut stdout, &mut stderr, false);
        let arguments = ["starterlint", target.as_str()].map(OsString::from);
        run_with_loader(arguments, &mut io, &RejectingLoader)
    };

    assert_eq!(code, ExitCode::from(2));
    assert!(stdout.is_empty());
    let message = String::from_utf8(stderr).expect("stderr utf8");
    assert_eq!(
        message,
        "invalid configuration: 'not-valid' is not a valid JavaScript identifier\n"
    );
}
