use std::sync::Arc;

use anyhow::Result;

use super::{CommandResult, ExtractSummary};
use crate::cli::{args::ExtractCommand, context::BuildContext};
use crate::core::Compiler;

/// Run one build pass through the compiler host with the plugin applied.
pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = BuildContext::new(&cmd.common)?;
    let plugin = Arc::new(ctx.plugin()?);
    let compilation = ctx.load_compilation()?;

    let mut compiler =
        Compiler::new(Some(ctx.root_dir.clone())).with_emit_on_errors(cmd.emit_on_errors);
    compiler.apply(plugin);
    let enabled = compiler.hooks.emit_taps() > 0;

    let stats = compiler.run(compilation.as_ref());

    Ok(CommandResult::Extract(ExtractSummary {
        root_dir: ctx.root_dir,
        stats,
        enabled,
    }))
}
