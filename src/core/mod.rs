//! Extraction engine.
//!
//! One pass runs leaf to root:
//!
//! 1. `pattern`: build the module identifier regex from configuration
//! 2. `scanner`: find key-like tokens in one module's original source
//! 3. `traversal`: walk every chunk and module, accumulating unique keys
//! 4. `declaration`: render the keys as a tuple type declaration
//! 5. `output`: compare with the file on disk and write only on change
//!
//! `host` holds the narrow contracts the engine consumes from a build host.

pub mod declaration;
pub mod error;
pub mod host;
pub mod output;
pub mod pattern;
pub mod scanner;
pub mod traversal;

pub use declaration::render_declaration;
pub use error::ExtractError;
pub use host::{
    BuildStats, Chunk, Compilation, Compiler, EmittedDeclaration, Hooks, ModuleSource, Plugin,
    Stats,
};
pub use output::{WriteOutcome, is_same_content, is_same_file, write_if_changed};
pub use pattern::module_pattern;
pub use scanner::scan_keys;
pub use traversal::{KeySet, collect_keys};
