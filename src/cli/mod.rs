//! Command-line interface layer.
//!
//! Parses arguments, runs the command against the library and prints the
//! outcome. Logging from the library is routed through `tracing` to stderr.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
mod commands;
mod context;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "APIKEYS_LOG";

/// Install the stderr log subscriber.
///
/// `APIKEYS_LOG` wins when set; otherwise only warnings are shown, or debug
/// output from this crate with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "apikeys=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from_result(&result))
}
