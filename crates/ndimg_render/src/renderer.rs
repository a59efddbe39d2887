//! The renderer capability.
//!
//! Each boundary function maps to one method. Buffers are borrowed for the
//! duration of the call only; a renderer that keeps data must copy it.

use ndimg_core::MatrixView;
use ndimg_shared::{Cell, CellWithPosition, RasterDims};

use crate::error::RenderResult;

/// Something that consumes cell frames and matrices.
pub trait Renderer {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Lays `cells` onto an `nrow × ncol` raster in buffer order.
    ///
    /// # Errors
    ///
    /// Backends reject frames that do not fit `dims`.
    fn read_cells(&mut self, cells: &[Cell], dims: RasterDims) -> RenderResult<()>;

    /// Places each cell at its own position on an `nrow × ncol` raster.
    ///
    /// # Errors
    ///
    /// Backends reject cells outside `dims`.
    fn read_cells_with_position(
        &mut self,
        cells: &[CellWithPosition],
        dims: RasterDims,
    ) -> RenderResult<()>;

    /// Shows a row-major matrix.
    ///
    /// # Errors
    ///
    /// Backend specific.
    fn show_matrix(&mut self, matrix: MatrixView<'_>) -> RenderResult<()>;

    /// Shows a vector, as a `1 × n` matrix unless the backend knows better.
    ///
    /// # Errors
    ///
    /// Backend specific.
    fn show_vector(&mut self, data: &[f32]) -> RenderResult<()> {
        self.show_matrix(MatrixView::row_vector(data))
    }

    /// Raster used for positioned cells when the caller supplies none.
    fn positioned_dims(&self, cells: &[CellWithPosition]) -> RasterDims {
        RasterDims::enclosing(cells)
    }

    /// Doubles `input`, saturating at the `i32` range.
    fn double_input(&self, input: i32) -> i32 {
        input.saturating_mul(2)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn read_cells(&mut self, cells: &[Cell], dims: RasterDims) -> RenderResult<()> {
        (**self).read_cells(cells, dims)
    }

    fn read_cells_with_position(
        &mut self,
        cells: &[CellWithPosition],
        dims: RasterDims,
    ) -> RenderResult<()> {
        (**self).read_cells_with_position(cells, dims)
    }

    fn show_matrix(&mut self, matrix: MatrixView<'_>) -> RenderResult<()> {
        (**self).show_matrix(matrix)
    }

    fn show_vector(&mut self, data: &[f32]) -> RenderResult<()> {
        (**self).show_vector(data)
    }

    fn positioned_dims(&self, cells: &[CellWithPosition]) -> RasterDims {
        (**self).positioned_dims(cells)
    }

    fn double_input(&self, input: i32) -> i32 {
        (**self).double_input(input)
    }
}
