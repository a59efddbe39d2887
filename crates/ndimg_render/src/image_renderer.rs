//! PNG rasterizer.
//!
//! Every call produces one image in `output_dir`, named
//! `<file_prefix>_<NNNN>.png` with a per-renderer sequence number.
//!
//! Cell placement:
//! - position-less cells fill the raster row by row, cell `i` at
//!   `(i / ncol, i % ncol)`
//! - positioned cells land at `(pos.y, pos.x)`; a later cell at the same
//!   position replaces an earlier one

use std::path::{Path, PathBuf};

use image::RgbaImage;
use ndimg_core::validate::{check_cell_count, check_image_budget, check_positions};
use ndimg_core::{render_with, CoreError, MatrixView, Plottable, RenderConfig, Shade, SparseGrid};
use ndimg_shared::colors::WHITE;
use ndimg_shared::{Cell, CellWithPosition, RasterDims};

use crate::error::{RenderError, RenderResult};
use crate::renderer::Renderer;

/// Renderer that writes PNG files.
#[derive(Debug)]
pub struct ImageRenderer {
    config: RenderConfig,
    sequence: u32,
    last_output: Option<PathBuf>,
}

impl ImageRenderer {
    /// Validates `config` and creates its output directory.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid config or an unusable output directory.
    pub fn new(config: RenderConfig) -> RenderResult<Self> {
        config.validate()?;
        std::fs::create_dir_all(&config.output_dir).map_err(|source| RenderError::OutputDir {
            path: config.output_dir.clone(),
            source,
        })?;
        tracing::debug!(output_dir = %config.output_dir.display(), "image renderer ready");
        Ok(Self { config, sequence: 0, last_output: None })
    }

    /// Path of the most recently written image.
    #[must_use]
    pub fn last_output(&self) -> Option<&Path> {
        self.last_output.as_deref()
    }

    /// Number of images written so far.
    #[must_use]
    pub const fn images_written(&self) -> u32 {
        self.sequence
    }

    fn next_path(&self) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}_{:04}.png", self.config.file_prefix, self.sequence))
    }

    fn write(&mut self, img: &RgbaImage) -> RenderResult<()> {
        let path = self.next_path();
        img.save(&path).map_err(CoreError::from)?;
        tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "wrote image");
        self.sequence = self.sequence.wrapping_add(1);
        self.last_output = Some(path);
        Ok(())
    }

    fn paint_cells(&mut self, grid: &SparseGrid<Cell>) -> RenderResult<()> {
        let scaled = grid.scaled_by(self.config.scale())?;
        let (min, max) = value_range(scaled.values().map(|cell| cell.value));
        let shade = Shade::new(f64::from(min), f64::from(max));
        let with_color = self.config.with_color;

        let img = render_with(scaled.shape(), &self.config, |row, col| {
            match scaled.get(row, col) {
                None => WHITE,
                Some(cell) if with_color => cell.color,
                Some(cell) => shade.color(Some(f64::from(cell.value))),
            }
        })?;
        self.write(&img)
    }
}

impl Renderer for ImageRenderer {
    fn name(&self) -> &'static str {
        "image"
    }

    fn read_cells(&mut self, cells: &[Cell], dims: RasterDims) -> RenderResult<()> {
        tracing::debug!(count = cells.len(), nrow = dims.nrow, ncol = dims.ncol, "read_cells");
        check_cell_count(cells.len(), dims)?;
        check_image_budget(dims, &self.config)?;

        let mut grid = SparseGrid::empty(dims.nrow, dims.ncol)?;
        let shape = grid.shape();
        for (index, cell) in cells.iter().enumerate() {
            let (row, col) = shape.coords(index);
            grid.set(row, col, *cell);
        }
        self.paint_cells(&grid)
    }

    fn read_cells_with_position(
        &mut self,
        cells: &[CellWithPosition],
        dims: RasterDims,
    ) -> RenderResult<()> {
        tracing::debug!(
            count = cells.len(),
            nrow = dims.nrow,
            ncol = dims.ncol,
            "read_cells_with_position"
        );
        check_positions(cells, dims)?;
        check_image_budget(dims, &self.config)?;

        let mut grid = SparseGrid::empty(dims.nrow, dims.ncol)?;
        for cell in cells {
            grid.set(cell.pos.y, cell.pos.x, cell.cell());
        }
        self.paint_cells(&grid)
    }

    fn show_matrix(&mut self, matrix: MatrixView<'_>) -> RenderResult<()> {
        tracing::debug!(nrow = matrix.nrow(), ncol = matrix.ncol(), "show_matrix");
        check_image_budget(RasterDims::new(matrix.nrow(), matrix.ncol()), &self.config)?;
        let grid = matrix.to_grid()?.scaled(&self.config)?;
        let img = grid.render(&self.config)?;
        self.write(&img)
    }

    fn positioned_dims(&self, cells: &[CellWithPosition]) -> RasterDims {
        self.config
            .positioned_raster
            .unwrap_or_else(|| RasterDims::enclosing(cells))
    }
}

/// `(min, max)` of `values`, `(0, 0)` when there are none.
fn value_range(values: impl Iterator<Item = i32>) -> (i32, i32) {
    values
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((min, max)) => Some((i32::min(min, v), i32::max(max, v))),
        })
        .unwrap_or((0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndimg_shared::colors::{BLUE, RED};
    use ndimg_shared::{Color, Position};

    fn temp_config(name: &str) -> RenderConfig {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        RenderConfig {
            output_dir: std::env::temp_dir().join(format!("ndimg_{name}_{id}")),
            annotate_image: false,
            ..RenderConfig::default()
        }
    }

    fn load(renderer: &ImageRenderer) -> RgbaImage {
        image::open(renderer.last_output().unwrap()).unwrap().to_rgba8()
    }

    #[test]
    fn test_cells_fill_row_major() {
        let config = temp_config("row_major");
        let dir = config.output_dir.clone();
        let mut renderer = ImageRenderer::new(config).unwrap();

        let cells = [
            Cell::new(1, Color::new(10, 0, 0, 255)),
            Cell::new(2, Color::new(20, 0, 0, 255)),
            Cell::new(3, Color::new(30, 0, 0, 255)),
        ];
        renderer.read_cells(&cells, RasterDims::new(2, 2)).unwrap();

        let img = load(&renderer);
        assert_eq!(img.dimensions(), (3, 3));
        assert_eq!(img.get_pixel(0, 0).0, [10, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [20, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [30, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 1).0, WHITE.to_array());

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_positioned_cells_scaled() {
        let mut config = temp_config("positioned");
        config.scaling_factor = 3;
        let dir = config.output_dir.clone();
        let mut renderer = ImageRenderer::new(config).unwrap();

        let cells = [
            CellWithPosition::new(Position::new(2, 0), 10, Color::new(0, 0, 0, 255)),
            CellWithPosition::new(Position::new(0, 1), 10, Color::new(255, 255, 255, 0)),
        ];
        renderer.read_cells_with_position(&cells, RasterDims::new(2, 3)).unwrap();

        let img = load(&renderer);
        assert_eq!(img.dimensions(), (10, 7));
        // (row 0, col 2) scaled into pixels x 6..9, y 0..3
        assert_eq!(img.get_pixel(7, 1).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 4).0, [255, 255, 255, 0]);
        assert_eq!(img.get_pixel(4, 1).0, WHITE.to_array());

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_value_shading_without_color() {
        let mut config = temp_config("shading");
        config.with_color = false;
        let dir = config.output_dir.clone();
        let mut renderer = ImageRenderer::new(config).unwrap();

        let cells = [
            Cell::new(10, Color::new(0, 255, 0, 255)),
            Cell::new(-5, Color::new(0, 255, 0, 255)),
        ];
        renderer.read_cells(&cells, RasterDims::new(1, 2)).unwrap();

        let img = load(&renderer);
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 255]);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_show_matrix_and_sequence() {
        let mut config = temp_config("matrix");
        config.annotate_image = true;
        config.scaling_factor = 2;
        let dir = config.output_dir.clone();
        let mut renderer = ImageRenderer::new(config).unwrap();

        let data = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 10.0, 20.0, 30.0];
        renderer.show_matrix(MatrixView::new(&data, 3, 3).unwrap()).unwrap();
        renderer.show_vector(&[1.0, -1.0]).unwrap();

        assert_eq!(renderer.images_written(), 2);
        assert!(renderer.last_output().unwrap().ends_with("ndimg_0001.png"));
        assert!(dir.join("ndimg_0000.png").exists());

        let img = load(&renderer);
        assert_eq!(img.dimensions(), (5, 3));
        assert_eq!(img.get_pixel(1, 1).0, RED.to_array());
        assert_eq!(img.get_pixel(2, 1).0, BLUE.to_array());
        assert_eq!(img.get_pixel(3, 1).0, [0, 0, 0, 255]);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let config = temp_config("bounds");
        let dir = config.output_dir.clone();
        let mut renderer = ImageRenderer::new(config).unwrap();

        let cell = CellWithPosition::new(Position::new(30, 50), 10, Color::default());
        let err = renderer.read_cells_with_position(&[cell], RasterDims::new(10, 10)).unwrap_err();
        assert!(matches!(err, RenderError::Core(CoreError::PositionOutOfBounds { .. })));
        assert_eq!(renderer.images_written(), 0);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_positioned_dims_prefers_config() {
        let mut config = temp_config("dims");
        let dir = config.output_dir.clone();
        let cells = [CellWithPosition::new(Position::new(4, 1), 0, Color::default())];

        let renderer = ImageRenderer::new(config.clone()).unwrap();
        assert_eq!(renderer.positioned_dims(&cells), RasterDims::new(2, 5));

        config.positioned_raster = Some(RasterDims::new(100, 100));
        let renderer = ImageRenderer::new(config).unwrap();
        assert_eq!(renderer.positioned_dims(&cells), RasterDims::new(100, 100));

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_sequence_wraps_instead_of_overflowing() {
        let config = temp_config("wrap");
        let dir = config.output_dir.clone();
        let mut renderer = ImageRenderer::new(config).unwrap();
        renderer.sequence = u32::MAX;

        renderer.show_vector(&[1.0]).unwrap();

        assert_eq!(renderer.images_written(), 0);
        assert!(renderer.last_output().unwrap().ends_with("ndimg_4294967295.png"));

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_budget_checked_before_raster() {
        let mut config = temp_config("budget");
        config.max_pixels = 100;
        let dir = config.output_dir.clone();
        let mut renderer = ImageRenderer::new(config).unwrap();

        let err = renderer.read_cells(&[Cell::default()], RasterDims::new(60_000, 60_000)).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Core(CoreError::ImageTooLarge { width: 60_001, height: 60_001, .. })
        ));
        assert_eq!(renderer.images_written(), 0);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_value_range() {
        assert_eq!(value_range([3, -2, 7].into_iter()), (-2, 7));
        assert_eq!(value_range(std::iter::empty()), (0, 0));
    }
}
