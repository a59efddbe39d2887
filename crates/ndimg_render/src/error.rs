//! # Render Error Types

use std::path::PathBuf;

use ndimg_core::CoreError;
use thiserror::Error;

/// Errors raised by renderer backends.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The frame or configuration was rejected, or image output failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
