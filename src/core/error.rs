use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that can surface from an extraction pass or its input adapters.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to write declaration file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input path does not exist: {}", .path.display())]
    MissingInput { path: PathBuf },
}
