//! Raster dimensions supplied alongside a frame.

use serde::{Deserialize, Serialize};

use crate::records::{CellWithPosition, Position};

/// Target raster size, `nrow × ncol`.
///
/// Dimensions are supplied by the caller independently of the cells placed
/// into the raster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RasterDims {
    /// Number of rows
    pub nrow: usize,
    /// Number of columns
    pub ncol: usize,
}

impl RasterDims {
    /// Creates new dimensions
    #[must_use]
    pub const fn new(nrow: usize, ncol: usize) -> Self {
        Self { nrow, ncol }
    }

    /// Number of cells in the raster, `None` on overflow.
    #[must_use]
    pub const fn area(self) -> Option<usize> {
        self.nrow.checked_mul(self.ncol)
    }

    /// True if the raster has no cells.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.nrow == 0 || self.ncol == 0
    }

    /// True if `pos` lies inside the raster.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        (pos.y as usize) < self.nrow && (pos.x as usize) < self.ncol
    }

    /// Smallest raster that holds every position in `cells`.
    ///
    /// An empty slice yields a `0 × 0` raster.
    #[must_use]
    pub fn enclosing(cells: &[CellWithPosition]) -> Self {
        cells.iter().fold(Self::default(), |dims, cell| Self {
            nrow: dims.nrow.max(cell.pos.y as usize + 1),
            ncol: dims.ncol.max(cell.pos.x as usize + 1),
        })
    }
}
