//! apikeys - API key declaration generator
//!
//! apikeys scans the original sources of a build for object-literal keys that
//! look like API endpoint identifiers and writes them to a TypeScript
//! declaration file as a literal tuple type:
//!
//! ```text
//! declare const keys: ['login', 'logout']
//! ```
//!
//! The file is only rewritten when its content changes (ignoring whitespace).
//!
//! ## Module Structure
//!
//! - `adapters`: Turn source trees or emitted source maps into compilations
//! - `cli`: Command-line interface layer
//! - `config`: Option normalization and `.apikeysrc.json` loading
//! - `core`: Extraction engine and the build-host contract
//! - `plugin`: The extractor packaged as a build plugin
//! - `utils`: Shared utility functions

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod plugin;
pub mod utils;
