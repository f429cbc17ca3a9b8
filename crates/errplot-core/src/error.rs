// File: crates/errplot-core/src/error.rs
// Summary: Typed errors for dataset loading and validation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a dataset or validating it for rendering.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        reason: String,
    },

    /// The dataset cannot be rendered: empty, a single point where a value
    /// range is required, or error values unusable for the requested scaling.
    #[error("degenerate dataset: {0}")]
    Degenerate(String),
}
