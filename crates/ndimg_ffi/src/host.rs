//! Safe calls into the entry points from Rust.
//!
//! Each wrapper passes `slice.as_ptr()` and `slice.len()` exactly as a C
//! host passes `v.data()` and `v.size()`, then reports the resulting status.

use ndimg_core::MatrixBuffer;
use ndimg_shared::{Cell, CellWithPosition, RasterDims};

use crate::error::{last_status, NdimgStatus};
use crate::exports;

/// Sends `cells` through [`exports::read_cells`].
pub fn read_cells(cells: &[Cell], dims: RasterDims) -> NdimgStatus {
    // SAFETY: pointer and length come from one live slice.
    unsafe { exports::read_cells(cells.as_ptr(), cells.len(), dims.nrow, dims.ncol) };
    last_status()
}

/// Sends `cells` through [`exports::read_cells_with_position`].
pub fn read_cells_with_position(cells: &[CellWithPosition]) -> NdimgStatus {
    // SAFETY: pointer and length come from one live slice.
    unsafe { exports::read_cells_with_position(cells.as_ptr(), cells.len()) };
    last_status()
}

/// Sends `matrix` through [`exports::show_matrix`].
pub fn show_matrix(matrix: &MatrixBuffer) -> NdimgStatus {
    // SAFETY: the buffer holds exactly nrow * ncol floats.
    unsafe { exports::show_matrix(matrix.as_ptr(), matrix.nrow(), matrix.ncol()) };
    last_status()
}

/// Sends `data` through [`exports::show_vector`].
pub fn show_vector(data: &[f32]) -> NdimgStatus {
    // SAFETY: pointer and length come from one live slice.
    unsafe { exports::show_vector(data.as_ptr(), data.len()) };
    last_status()
}
