//! Buffers the host programs send.

use ndimg_core::{CoreResult, MatrixBuffer};
use ndimg_shared::{Cell, CellWithPosition, Color, Position, RasterDims};

/// Raster used by `do_cells`.
pub const CELL_RASTER: RasterDims = RasterDims::new(100, 100);

/// Two cells of value 10, a transparent black one and a transparent white one.
#[must_use]
pub fn cells() -> Vec<Cell> {
    positioned_cells().into_iter().map(CellWithPosition::cell).collect()
}

/// The cells of [`cells`] at `(x: 20, y: 10)` and `(x: 30, y: 50)`.
#[must_use]
pub fn positioned_cells() -> Vec<CellWithPosition> {
    let black = Color::new(0, 0, 0, 0);
    let white = Color::new(255, 255, 255, 0);
    vec![
        CellWithPosition::new(Position::new(20, 10), 10, black),
        CellWithPosition::new(Position::new(30, 50), 10, white),
    ]
}

/// A 3 × 3 matrix built from nested rows.
///
/// # Errors
///
/// Never fails for these rows; the signature follows
/// [`MatrixBuffer::from_rows`].
pub fn matrix() -> CoreResult<MatrixBuffer> {
    MatrixBuffer::from_rows(&[
        [10.0_f32, 20.0, 30.0],
        [40.0, 50.0, 60.0],
        [10.0, 20.0, 30.0],
    ])
}

/// A short signed vector.
#[must_use]
pub fn vector() -> Vec<f32> {
    vec![1.0, -2.0, 3.0, -4.0, 5.0]
}
