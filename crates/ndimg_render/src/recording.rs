//! Frame recorder.
//!
//! Copies every call it receives so the receiving side of the boundary can
//! be inspected after the fact.

use ndimg_core::validate::{check_cell_count, check_positions};
use ndimg_core::{MatrixBuffer, MatrixView};
use ndimg_shared::{Cell, CellWithPosition, RasterDims};

use crate::error::RenderResult;
use crate::renderer::Renderer;

/// One received call.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// `read_cells`
    Cells {
        /// Cells in buffer order.
        cells: Vec<Cell>,
        /// Raster supplied by the caller.
        dims: RasterDims,
    },
    /// `read_cells_with_position`
    PositionedCells {
        /// Cells in buffer order.
        cells: Vec<CellWithPosition>,
        /// Raster the cells were placed on.
        dims: RasterDims,
    },
    /// `show_matrix`
    Matrix(MatrixBuffer),
    /// `show_vector`
    Vector(Vec<f32>),
}

impl Frame {
    /// Number of elements the frame carries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Cells { cells, .. } => cells.len(),
            Self::PositionedCells { cells, .. } => cells.len(),
            Self::Matrix(matrix) => matrix.len(),
            Self::Vector(data) => data.len(),
        }
    }

    /// True if the frame carries no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renderer that stores frames in memory.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<Frame>,
    validate: bool,
}

impl RecordingRenderer {
    /// Recorder that accepts every frame as-is.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder that applies the same checks as the image backend.
    #[must_use]
    pub fn validating() -> Self {
        Self { frames: Vec::new(), validate: true }
    }

    /// Frames received so far, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Most recent frame.
    #[must_use]
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Removes and returns all frames.
    pub fn take_frames(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.frames)
    }

    fn push(&mut self, frame: Frame) {
        tracing::debug!(index = self.frames.len(), len = frame.len(), "recorded frame");
        self.frames.push(frame);
    }
}

impl Renderer for RecordingRenderer {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn read_cells(&mut self, cells: &[Cell], dims: RasterDims) -> RenderResult<()> {
        if self.validate {
            check_cell_count(cells.len(), dims)?;
        }
        self.push(Frame::Cells { cells: cells.to_vec(), dims });
        Ok(())
    }

    fn read_cells_with_position(
        &mut self,
        cells: &[CellWithPosition],
        dims: RasterDims,
    ) -> RenderResult<()> {
        if self.validate {
            check_positions(cells, dims)?;
        }
        self.push(Frame::PositionedCells { cells: cells.to_vec(), dims });
        Ok(())
    }

    fn show_matrix(&mut self, matrix: MatrixView<'_>) -> RenderResult<()> {
        let buffer = MatrixBuffer::from_vec(matrix.as_slice().to_vec(), matrix.nrow(), matrix.ncol())?;
        self.push(Frame::Matrix(buffer));
        Ok(())
    }

    fn show_vector(&mut self, data: &[f32]) -> RenderResult<()> {
        self.push(Frame::Vector(data.to_vec()));
        Ok(())
    }
}
