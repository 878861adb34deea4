// SPDX-License-Identifier: MIT OR Apache-2.0
//! Argument surface and command execution.
//!
//! Kept out of `main.rs` so the whole pipeline - input acquisition,
//! comparison, rendering, output, and the exit-code mapping - is reachable
//! from tests. `main` only parses, runs, and exits.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use oisin_core::Value;
use oisin_diff::{CompareResult, DiffOptions, Differ, render};

use crate::input;

/// Command-line arguments for the `oisin` binary.
#[derive(Debug, Parser)]
#[command(name = "oisin")]
#[command(version, about = "Compare JSON documents to detect structural changes")]
pub struct Args {
    /// Old document: file path or HTTP(S) URL
    #[arg(value_name = "OLD")]
    pub old: Option<String>,

    /// New document: file path or HTTP(S) URL
    ///
    /// With both positionals omitted, stdin is read instead and must hold
    /// two JSON documents separated by a line containing only `---`.
    #[arg(value_name = "NEW")]
    pub new: Option<String>,

    /// Paths to ignore, subtree-wide (e.g. user.id metadata.timestamp)
    #[arg(short, long, num_args = 1..)]
    pub ignore: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
    pub format: Format,

    /// Colorized output
    #[arg(long)]
    pub color: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Output format for a comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Multi-line human-oriented report with summary
    Pretty,
    /// One line per difference
    Compact,
    /// Machine-readable JSON
    Json,
}

/// Process exit code for a run outcome: 0 identical, 1 differences found,
/// 2 operational error.
#[must_use]
pub fn exit_code(outcome: &Result<bool>) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Execute a comparison per `args`.
///
/// Returns whether the inputs were identical.
///
/// # Errors
///
/// Fails on unreadable or malformed inputs and on output I/O; these are
/// the operational-error (exit 2) cases.
pub fn run(args: &Args) -> Result<bool> {
    let (old, new) = load_inputs(args)?;

    let differ = Differ::new(DiffOptions {
        ignore_paths: args.ignore.clone(),
    });
    let result = differ.compare(&old, &new);

    let output = render_result(&result, args)?;
    write_output(&output, args.output.as_deref())?;
    Ok(result.summary.identical)
}

fn load_inputs(args: &Args) -> Result<(Value, Value)> {
    match (&args.old, &args.new) {
        (Some(old), Some(new)) => Ok((input::load_source(old)?, input::load_source(new)?)),
        (None, None) => {
            let mut payload = String::new();
            io::stdin()
                .read_to_string(&mut payload)
                .context("failed to read stdin")?;
            input::split_payload(&payload)
        }
        _ => bail!("provide two sources, or none to read both documents from stdin"),
    }
}

fn render_result(result: &CompareResult, args: &Args) -> Result<String> {
    Ok(match args.format {
        Format::Pretty => render::render_pretty(result, args.color),
        Format::Compact => render::render_compact(result),
        Format::Json => render::render_json(result)?,
    })
}

fn write_output(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{output}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{output}").context("failed to write stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    fn json_file(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    fn args(old: &str, new: &str, format: Format, output: PathBuf) -> Args {
        Args {
            old: Some(old.to_string()),
            new: Some(new.to_string()),
            ignore: Vec::new(),
            format,
            color: false,
            output: Some(output),
        }
    }

    #[test]
    fn test_identical_inputs_exit_zero() {
        let dir = TempDir::new().unwrap();
        let old = json_file(&dir, "old.json", r#"{"a":1}"#);
        let new = json_file(&dir, "new.json", r#"{"a":1}"#);
        let out = NamedTempFile::new().unwrap();

        let outcome = run(&args(&old, &new, Format::Compact, out.path().to_path_buf()));
        assert!(outcome.as_ref().is_ok_and(|identical| *identical));
        assert_eq!(exit_code(&outcome), 0);
        assert_eq!(fs::read_to_string(out.path()).unwrap(), "IDENTICAL\n");
    }

    #[test]
    fn test_differing_inputs_exit_one() {
        let dir = TempDir::new().unwrap();
        let old = json_file(&dir, "old.json", r#"{"a":1}"#);
        let new = json_file(&dir, "new.json", r#"{"a":2}"#);
        let out = NamedTempFile::new().unwrap();

        let outcome = run(&args(&old, &new, Format::Compact, out.path().to_path_buf()));
        assert!(outcome.as_ref().is_ok_and(|identical| !identical));
        assert_eq!(exit_code(&outcome), 1);
        assert_eq!(fs::read_to_string(out.path()).unwrap(), "~ a\n");
    }

    #[test]
    fn test_malformed_input_exits_two() {
        let dir = TempDir::new().unwrap();
        let old = json_file(&dir, "old.json", "{not json");
        let new = json_file(&dir, "new.json", r#"{"a":1}"#);
        let out = NamedTempFile::new().unwrap();

        let outcome = run(&args(&old, &new, Format::Pretty, out.path().to_path_buf()));
        assert!(outcome.is_err());
        assert_eq!(exit_code(&outcome), 2);
    }

    #[test]
    fn test_missing_file_exits_two() {
        let dir = TempDir::new().unwrap();
        let new = json_file(&dir, "new.json", r#"{"a":1}"#);
        let out = NamedTempFile::new().unwrap();
        let missing = dir.path().join("absent.json").to_str().unwrap().to_string();

        let outcome = run(&args(&missing, &new, Format::Pretty, out.path().to_path_buf()));
        assert_eq!(exit_code(&outcome), 2);
    }

    #[test]
    fn test_single_positional_is_an_error() {
        let args = Args {
            old: Some("old.json".to_string()),
            new: None,
            ignore: Vec::new(),
            format: Format::Pretty,
            color: false,
            output: None,
        };
        let outcome = run(&args);
        assert!(outcome.is_err());
        assert_eq!(exit_code(&outcome), 2);
    }

    #[test]
    fn test_ignore_paths_reach_the_engine() {
        let dir = TempDir::new().unwrap();
        let old = json_file(&dir, "old.json", r#"{"a":1,"ts":100}"#);
        let new = json_file(&dir, "new.json", r#"{"a":1,"ts":200}"#);
        let out = NamedTempFile::new().unwrap();

        let mut args = args(&old, &new, Format::Compact, out.path().to_path_buf());
        args.ignore = vec!["ts".to_string()];
        let outcome = run(&args);
        assert_eq!(exit_code(&outcome), 0);
    }

    #[test]
    fn test_json_format_writes_parseable_output() {
        let dir = TempDir::new().unwrap();
        let old = json_file(&dir, "old.json", r#"{"a":1}"#);
        let new = json_file(&dir, "new.json", r#"{"a":2}"#);
        let out = NamedTempFile::new().unwrap();

        let outcome = run(&args(&old, &new, Format::Json, out.path().to_path_buf()));
        assert_eq!(exit_code(&outcome), 1);
        let text = fs::read_to_string(out.path()).unwrap();
        let parsed: CompareResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.summary.changed, 1);
    }
}
