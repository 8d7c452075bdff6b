use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and nothing needs attention
/// - `Failure` (1): Command completed but the declaration is stale, the build
///   had errors, or the config file already exists
/// - `Error` (2): Command failed due to internal error (config error, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and nothing needs attention.
    Success,
    /// Command completed but reported a problem.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl ExitStatus {
    pub(crate) fn from_result(result: &CommandResult) -> Self {
        let failed = match result {
            CommandResult::Extract(summary) => !summary.stats.errors.is_empty(),
            CommandResult::Check(summary) => !summary.up_to_date || !summary.errors.is_empty(),
            CommandResult::Init(summary) => !summary.created,
        };

        if failed {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
