//! Row-major `f32` matrix buffers.
//!
//! The boundary takes a matrix as a flat pointer plus `nrow`/`ncol`. Nested
//! rows are linearized here, row after row:
//!
//! ```text
//! [10 20 30]
//! [40 50 60]   →   [10, 20, 30, 40, 50, 60, 10, 20, 30]
//! [10 20 30]
//! ```

use crate::error::{CoreError, CoreResult};
use crate::grid::DenseGrid;
use crate::validate::check_matrix_len;

/// Owned row-major matrix, ready to be handed across the boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatrixBuffer {
    data: Vec<f32>,
    nrow: usize,
    ncol: usize,
}

impl MatrixBuffer {
    /// Linearizes nested rows.
    ///
    /// An empty slice gives a `0 × 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RaggedRows`] if rows differ in length.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> CoreResult<Self> {
        let ncol = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * ncol);

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncol {
                return Err(CoreError::RaggedRows {
                    row: index,
                    expected: ncol,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { data, nrow: rows.len(), ncol })
    }

    /// Wraps an already linearized buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len() != nrow * ncol`.
    pub fn from_vec(data: Vec<f32>, nrow: usize, ncol: usize) -> CoreResult<Self> {
        check_matrix_len(data.len(), nrow, ncol)?;
        Ok(Self { data, nrow, ncol })
    }

    /// A `1 × n` matrix.
    #[must_use]
    pub fn row_vector(data: Vec<f32>) -> Self {
        let ncol = data.len();
        Self { data, nrow: 1, ncol }
    }

    /// Number of rows.
    #[must_use]
    pub const fn nrow(&self) -> usize {
        self.nrow
    }

    /// Number of columns.
    #[must_use]
    pub const fn ncol(&self) -> usize {
        self.ncol
    }

    /// Number of elements, always `nrow * ncol`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the matrix has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat row-major contents.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Pointer to the first element, for the boundary call.
    #[must_use]
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    /// Element at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.view().get(row, col)
    }

    /// Borrowed view.
    #[must_use]
    pub fn view(&self) -> MatrixView<'_> {
        MatrixView { data: &self.data, nrow: self.nrow, ncol: self.ncol }
    }
}

/// Borrowed row-major matrix, as received from the boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixView<'a> {
    data: &'a [f32],
    nrow: usize,
    ncol: usize,
}

impl<'a> MatrixView<'a> {
    /// Checks `data.len() == nrow * ncol` and wraps the slice.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] or [`CoreError::DimensionOverflow`].
    pub fn new(data: &'a [f32], nrow: usize, ncol: usize) -> CoreResult<Self> {
        check_matrix_len(data.len(), nrow, ncol)?;
        Ok(Self { data, nrow, ncol })
    }

    /// A `1 × n` view.
    #[must_use]
    pub const fn row_vector(data: &'a [f32]) -> Self {
        Self { data, nrow: 1, ncol: data.len() }
    }

    /// Number of rows.
    #[must_use]
    pub const fn nrow(&self) -> usize {
        self.nrow
    }

    /// Number of columns.
    #[must_use]
    pub const fn ncol(&self) -> usize {
        self.ncol
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the view has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat row-major contents.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Element at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.nrow || col >= self.ncol {
            return None;
        }
        self.data.get(row * self.ncol + col).copied()
    }

    /// Iterates rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &'a [f32]> + '_ {
        let data = self.data;
        let ncol = self.ncol;
        (0..self.nrow).map(move |row| &data[row * ncol..(row + 1) * ncol])
    }

    /// Copies the view into a plottable grid.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionOverflow`] if the shape does not fit
    /// 32-bit grid coordinates.
    pub fn to_grid(&self) -> CoreResult<DenseGrid<f32>> {
        DenseGrid::from_vec(self.nrow, self.ncol, self.data.to_vec())
    }
}
