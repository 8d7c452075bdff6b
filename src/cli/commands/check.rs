use anyhow::Result;

use super::{CheckSummary, CommandResult};
use crate::cli::{args::CheckCommand, context::BuildContext};

/// Render the declaration for the current sources and compare it with the
/// file on disk. Nothing is written.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = BuildContext::new(&cmd.common)?;
    let plugin = ctx.plugin()?;
    let compilation = ctx.load_compilation()?;

    let declaration = plugin.prepare(compilation.as_ref());
    let up_to_date = declaration.is_up_to_date();

    Ok(CommandResult::Check(CheckSummary {
        root_dir: ctx.root_dir,
        declaration,
        up_to_date,
        errors: compilation.errors().to_vec(),
    }))
}
