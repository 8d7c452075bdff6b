//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: run one build pass and write the declaration file when it changed
//! - `check`: report whether the declaration file on disk is stale, without writing
//! - `init`: create a `.apikeysrc.json` with the default options

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by commands that scan a project.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root used as build context (default: current directory)
    #[arg(long, env = "APIKEYS_ROOT")]
    pub root: Option<PathBuf>,

    /// Read original sources from `*.map` files in this directory instead of the source tree
    #[arg(long, value_name = "DIR")]
    pub maps: Option<PathBuf>,

    /// Path fragment a module identifier must contain (overrides config file)
    /// Can be specified multiple times: --path /src/modules --path /src/components
    #[arg(long = "path", value_name = "FRAGMENT")]
    pub paths: Vec<String>,

    /// Base name of the files to scan, without extension (overrides config file)
    #[arg(long)]
    pub filename: Option<String>,

    /// Output directory relative to the root (overrides config file)
    #[arg(long)]
    pub output_path: Option<String>,

    /// Output file name (overrides config file)
    #[arg(long)]
    pub output_filename: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the declaration even when some inputs could not be read
    #[arg(long)]
    pub emit_on_errors: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract API keys and write the declaration file if it changed
    Extract(ExtractCommand),
    /// Exit with status 1 when the declaration file is out of date
    Check(CheckCommand),
    /// Initialize a new .apikeysrc.json configuration file
    Init,
}
