use std::path::PathBuf;

use crate::core::Stats;
use crate::plugin::PreparedDeclaration;

#[derive(Debug)]
pub struct ExtractSummary {
    pub root_dir: PathBuf,
    pub stats: Stats,
    /// False when the configuration has no path fragments, so no emit hook ran.
    pub enabled: bool,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub root_dir: PathBuf,
    pub declaration: PreparedDeclaration,
    pub up_to_date: bool,
    pub errors: Vec<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running apikeys commands
#[derive(Debug)]
pub enum CommandResult {
    Extract(ExtractSummary),
    Check(CheckSummary),
    Init(InitSummary),
}
