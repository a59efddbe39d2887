//! # NDIMG Core
//!
//! Everything between a caller's nested data and the pixels of an image.
//!
//! ## Pipeline
//!
//! ```text
//! nested rows ──from_rows──▶ MatrixBuffer ──(ptr, nrow, ncol)──▶ boundary
//!                                                                   │
//!                      MatrixView::new (validated) ◀────────────────┘
//!                                │
//!                   DenseGrid ── scaled ── render ──▶ RgbaImage ──▶ PNG
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use ndimg_core::{DenseGrid, Plottable, RenderConfig};
//!
//! let config = RenderConfig { scaling_factor: 10, ..RenderConfig::default() };
//!
//! let mut matrix = DenseGrid::from_elem(10, 10, 0_u8)?;
//! matrix[[0, 1]] = 1;
//!
//! matrix.scaled(&config)?.plot(&config, "image.png")?;
//! # Ok::<(), ndimg_core::CoreError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod grid;
pub mod matrix;
pub mod plot;
pub mod validate;

pub use config::{RenderConfig, CONFIG_ENV};
pub use error::{CoreError, CoreResult};
pub use grid::{DenseGrid, GridShape, Sample, SparseGrid};
pub use matrix::{MatrixBuffer, MatrixView};
pub use plot::{render_with, Plottable, Shade};
