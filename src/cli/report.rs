//! Report formatting and printing utilities.
//!
//! Separate from the engine so apikeys can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CheckSummary, CommandResult, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::WriteOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match result {
        CommandResult::Extract(summary) => print_extract(summary, verbose, out, err),
        CommandResult::Check(summary) => print_check(summary, verbose, out, err),
        CommandResult::Init(summary) => print_init(summary, out, err),
    }
}

/// Path shown to the user, relative to the project root when possible.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn print_build_errors<E: Write>(errors: &[String], err: &mut E) {
    for error in errors {
        let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), error);
    }
}

fn print_keys<O: Write>(keys: &[String], out: &mut O) {
    for key in keys {
        let _ = writeln!(out, "  - {}", key);
    }
}

fn print_extract<O: Write, E: Write>(
    summary: &ExtractSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    print_build_errors(&summary.stats.errors, err);

    if !summary.enabled {
        let _ = writeln!(
            out,
            "{} No paths configured, extraction skipped.",
            "Note:".bold()
        );
        return;
    }

    if !summary.stats.emitted {
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Build has {} error(s); declaration not refreshed.",
                summary.stats.errors.len()
            )
            .red()
        );
        return;
    }

    for declaration in &summary.stats.declarations {
        let path = display_path(&declaration.path, &summary.root_dir);
        let count = declaration.keys.len();
        let message = match declaration.outcome {
            WriteOutcome::Written => format!("Wrote {} key(s) to {}", count, path),
            WriteOutcome::Unchanged => format!("{} is up to date ({} key(s))", path, count),
        };
        let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), message.green());

        if verbose {
            print_keys(&declaration.keys, out);
        }
    }
}

fn print_check<O: Write, E: Write>(
    summary: &CheckSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    print_build_errors(&summary.errors, err);

    let declaration = &summary.declaration;
    let path = display_path(&declaration.path, &summary.root_dir);
    let count = declaration.keys.len();

    if summary.up_to_date {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} is up to date ({} key(s))", path, count).green()
        );
    } else {
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} is out of date ({} key(s) found)", path, count).red()
        );
        let _ = writeln!(
            out,
            "  {} run `apikeys extract` to regenerate it",
            "help:".bold().cyan()
        );
    }

    if verbose {
        print_keys(&declaration.keys, out);
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}

// ============================================================
// Tests
// ============================================================
