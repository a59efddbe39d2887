//! # Core Error Types
//!
//! Everything that can reject a frame, a matrix or a configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by matrix construction, validation, plotting and config loading.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Nested rows of different lengths cannot be linearized.
    #[error("ragged rows: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// A flat buffer does not hold exactly `nrow * ncol` values.
    #[error("dimension mismatch: {nrow}x{ncol} needs {expected} values, buffer has {found}")]
    DimensionMismatch {
        /// Declared rows.
        nrow: usize,
        /// Declared columns.
        ncol: usize,
        /// `nrow * ncol`.
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },

    /// The raster cannot be addressed with 32-bit coordinates.
    #[error("raster {nrow}x{ncol} exceeds addressable size")]
    DimensionOverflow {
        /// Requested rows.
        nrow: usize,
        /// Requested columns.
        ncol: usize,
    },

    /// More position-less cells than the raster has slots.
    #[error("too many cells: {count} cells for a {nrow}x{ncol} raster")]
    TooManyCells {
        /// Number of cells supplied.
        count: usize,
        /// Raster rows.
        nrow: usize,
        /// Raster columns.
        ncol: usize,
    },

    /// A positioned cell lies outside the raster.
    #[error("cell {index} at ({x}, {y}) is outside the {nrow}x{ncol} raster")]
    PositionOutOfBounds {
        /// Index of the cell in its buffer.
        index: usize,
        /// Column of the cell.
        x: u32,
        /// Row of the cell.
        y: u32,
        /// Raster rows.
        nrow: usize,
        /// Raster columns.
        ncol: usize,
    },

    /// The rendered image would exceed the configured pixel budget.
    #[error("image of {width}x{height} pixels exceeds the budget of {max_pixels}")]
    ImageTooLarge {
        /// Image width.
        width: u64,
        /// Image height.
        height: u64,
        /// Configured budget.
        max_pixels: u64,
    },

    /// Configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::RenderConfig`].
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Encoding or writing an image failed.
    #[error("image output failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
