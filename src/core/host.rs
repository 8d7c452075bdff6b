//! Minimal build-host contract.
//!
//! The extractor never sees a real bundler. Adapters translate whatever the
//! host produces into these narrow traits, and [`Compiler`] plays the part of
//! the host's lifecycle: it owns the registered hooks and fires `emit` and
//! `done` once per build.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, warn};

use super::{error::ExtractError, output::WriteOutcome};

/// One compiled source unit.
pub trait ModuleSource {
    /// Identifier used for path matching, usually the resource path.
    fn identifier(&self) -> &str;

    /// Original (pre-compilation) source text, when the host can recover it.
    fn original_source(&self) -> Option<&str>;
}

/// A group of modules emitted together.
pub trait Chunk {
    fn modules(&self) -> Box<dyn Iterator<Item = &dyn ModuleSource> + '_>;
}

/// The result of one build, handed to `emit` hooks.
pub trait Compilation {
    /// Root context of the build. Output paths are resolved against it.
    fn context(&self) -> &Path;

    fn chunks(&self) -> Box<dyn Iterator<Item = &dyn Chunk> + '_>;

    /// Errors the host ran into while producing this compilation.
    fn errors(&self) -> &[String] {
        &[]
    }
}

/// What `done` hooks get to see about a finished build.
pub trait BuildStats {
    fn has_errors(&self) -> bool;
}

/// Something that registers hooks on a [`Compiler`].
pub trait Plugin {
    fn name(&self) -> &'static str;

    fn apply(self: Arc<Self>, compiler: &mut Compiler);
}

/// A declaration file produced by an emit hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedDeclaration {
    pub path: PathBuf,
    pub keys: Vec<String>,
    pub outcome: WriteOutcome,
}

pub type EmitHook =
    Box<dyn FnMut(&dyn Compilation) -> Result<EmittedDeclaration, ExtractError>>;
pub type DoneHook = Box<dyn FnMut(&dyn BuildStats)>;

/// Registered lifecycle callbacks, in tap order.
#[derive(Default)]
pub struct Hooks {
    emit: Vec<(&'static str, EmitHook)>,
    done: Vec<(&'static str, DoneHook)>,
}

impl Hooks {
    pub fn tap_emit<F>(&mut self, name: &'static str, hook: F)
    where
        F: FnMut(&dyn Compilation) -> Result<EmittedDeclaration, ExtractError> + 'static,
    {
        self.emit.push((name, Box::new(hook)));
    }

    pub fn tap_done<F>(&mut self, name: &'static str, hook: F)
    where
        F: FnMut(&dyn BuildStats) + 'static,
    {
        self.done.push((name, Box::new(hook)));
    }

    pub fn emit_taps(&self) -> usize {
        self.emit.len()
    }

    pub fn done_taps(&self) -> usize {
        self.done.len()
    }
}

/// Outcome of [`Compiler::run`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub errors: Vec<String>,
    /// Whether the emit phase ran for this build.
    pub emitted: bool,
    pub declarations: Vec<EmittedDeclaration>,
}

impl BuildStats for Stats {
    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub struct Compiler {
    context: Option<PathBuf>,
    pub hooks: Hooks,
    emit_on_errors: bool,
}

impl Compiler {
    pub fn new(context: Option<PathBuf>) -> Self {
        Self {
            context,
            hooks: Hooks::default(),
            emit_on_errors: false,
        }
    }

    /// Run the emit phase even when the compilation already has errors.
    pub fn with_emit_on_errors(mut self, emit_on_errors: bool) -> Self {
        self.emit_on_errors = emit_on_errors;
        self
    }

    pub fn context(&self) -> Option<&Path> {
        self.context.as_deref()
    }

    pub fn apply<P: Plugin>(&mut self, plugin: Arc<P>) {
        debug!(plugin = plugin.name(), "applying plugin");
        plugin.apply(self);
    }

    /// Fire `emit` then `done` for one finished compilation.
    ///
    /// Errors returned by emit hooks are recorded in the stats rather than
    /// aborting the build.
    pub fn run(&mut self, compilation: &dyn Compilation) -> Stats {
        let mut stats = Stats {
            errors: compilation.errors().to_vec(),
            ..Default::default()
        };

        if stats.errors.is_empty() || self.emit_on_errors {
            for (name, hook) in &mut self.hooks.emit {
                match hook(compilation) {
                    Ok(declaration) => stats.declarations.push(declaration),
                    Err(err) => {
                        warn!(hook = *name, "emit hook failed: {}", err);
                        stats.errors.push(format!("{}: {}", name, err));
                    }
                }
            }
            stats.emitted = true;
        } else {
            debug!(
                errors = stats.errors.len(),
                "skipping emit phase for failed compilation"
            );
        }

        for (_, hook) in &mut self.hooks.done {
            hook(&stats);
        }

        stats
    }
}
