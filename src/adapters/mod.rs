//! Adapters that turn concrete build inputs into a [`Compilation`].
//!
//! - `fs`: script files read straight from a source tree
//! - `source_map`: original sources embedded in emitted `*.map` files
//!
//! [`Compilation`]: crate::core::Compilation

pub mod fs;
pub mod source_map;

pub use fs::FsCompilation;
pub use source_map::SourceMapCompilation;
