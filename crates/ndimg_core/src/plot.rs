//! Plotting of grids into RGBA images.
//!
//! For [`SparseGrid`]:
//!    - `None` is white
//!    - a positive value is a shade of red
//!    - a negative value is a shade of black
//!
//! For [`DenseGrid`]:
//!    - 0 is white
//!    - a positive value is a shade of red
//!    - a negative value is a shade of black
//!
//! The image is one pixel wider and taller than the grid so the closing
//! row and column boundaries can be drawn.

use std::path::Path;

use image::{Rgba, RgbaImage};
use ndimg_shared::colors::{BLACK, BLUE, RED, TRANSPARENT, WHITE};
use ndimg_shared::Color;

use crate::config::RenderConfig;
use crate::error::{CoreError, CoreResult};
use crate::grid::{DenseGrid, GridShape, Sample, SparseGrid};
use crate::validate::check_image_budget;

/// A grid that can be turned into an image.
pub trait Plottable<T: Sample>: Sized {
    /// `(min, max)` of the values used for shading.
    fn min_max(&self) -> (T, T);

    /// Upscales by the configured scaling factor.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ImageTooLarge`] before allocating if the scaled
    /// image would exceed the budget, or [`CoreError::DimensionOverflow`].
    fn scaled(&self, config: &RenderConfig) -> CoreResult<Self>;

    /// Renders into an in-memory image.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ImageTooLarge`] if the image exceeds the budget.
    fn render(&self, config: &RenderConfig) -> CoreResult<RgbaImage>;

    /// Renders and writes the image to `path`. The format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    fn plot(&self, config: &RenderConfig, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        let img = self.render(config)?;
        tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "writing image");
        img.save(path)?;
        Ok(())
    }
}

impl<T: Sample> Plottable<T> for DenseGrid<T> {
    fn min_max(&self) -> (T, T) {
        self.as_slice().iter().fold((T::ZERO, T::ZERO), |(min, max), &v| {
            (if v < min { v } else { min }, if v > max { v } else { max })
        })
    }

    fn scaled(&self, config: &RenderConfig) -> CoreResult<Self> {
        tracing::trace!(factor = config.scale(), "scaling dense grid");
        check_image_budget(self.shape().dims(), config)?;
        self.scaled_by(config.scale())
    }

    fn render(&self, config: &RenderConfig) -> CoreResult<RgbaImage> {
        let (min, max) = self.min_max();
        let shade = Shade::new(min.to_f64(), max.to_f64());
        render_with(self.shape(), config, |row, col| {
            shade.color(self.get(row, col).map(|v| v.to_f64()))
        })
    }
}

impl<T: Sample> Plottable<T> for SparseGrid<T> {
    fn min_max(&self) -> (T, T) {
        let mut values = self.values().copied();
        let Some(first) = values.next() else {
            return (T::ZERO, T::ZERO);
        };
        values.fold((first, first), |(min, max), v| {
            (if v < min { v } else { min }, if v > max { v } else { max })
        })
    }

    fn scaled(&self, config: &RenderConfig) -> CoreResult<Self> {
        tracing::trace!(factor = config.scale(), "scaling sparse grid");
        check_image_budget(self.shape().dims(), config)?;
        self.scaled_by(config.scale())
    }

    fn render(&self, config: &RenderConfig) -> CoreResult<RgbaImage> {
        let (min, max) = self.min_max();
        let shade = Shade::new(min.to_f64(), max.to_f64());
        render_with(self.shape(), config, |row, col| {
            shade.color(self.get(row, col).map(|v| v.to_f64()))
        })
    }
}

/// Maps values to colors relative to the extremes of a grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shade {
    min: f64,
    max: f64,
}

impl Shade {
    /// Shade for values in `[min, max]`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Color of a slot. `None`, zero and NaN are white.
    #[must_use]
    pub fn color(&self, value: Option<f64>) -> Color {
        match value {
            Some(v) if v > 0.0 => RED.with_alpha(intensity(v, self.max)),
            Some(v) if v < 0.0 => BLACK.with_alpha(intensity(v.abs(), self.min.abs())),
            _ => WHITE,
        }
    }
}

/// `ceil(value / extreme * 255)`, clamped to a channel.
fn intensity(value: f64, extreme: f64) -> u8 {
    if extreme <= 0.0 || !extreme.is_finite() {
        return u8::MAX;
    }
    (value / extreme * f64::from(u8::MAX)).ceil().clamp(0.0, f64::from(u8::MAX)) as u8
}

/// Renders a grid of `shape` with `paint` supplying the color of each slot.
///
/// Annotations are drawn over the slots; trailing pixels that no annotation
/// claims stay transparent.
///
/// # Errors
///
/// Returns [`CoreError::ImageTooLarge`] if `(ncol + 1) * (nrow + 1)` exceeds
/// `config.max_pixels`.
pub fn render_with<F>(shape: GridShape, config: &RenderConfig, paint: F) -> CoreResult<RgbaImage>
where
    F: Fn(u32, u32) -> Color,
{
    let width = shape.ncol() + 1;
    let height = shape.nrow() + 1;
    let pixels = u64::from(width) * u64::from(height);
    if pixels > config.max_pixels {
        return Err(CoreError::ImageTooLarge {
            width: u64::from(width),
            height: u64::from(height),
            max_pixels: config.max_pixels,
        });
    }

    tracing::debug!(width, height, "rendering grid");

    let scale = config.scale();
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let color = if config.annotate_image && config.draw_diagonal && x == y {
                RED
            } else if config.annotate_image
                && config.draw_boundaries
                && (x % scale == 0 || y % scale == 0)
            {
                BLUE
            } else if x == shape.ncol() || y == shape.nrow() {
                TRANSPARENT
            } else {
                paint(y, x)
            };
            img.put_pixel(x, y, Rgba(color.to_array()));
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_config() -> RenderConfig {
        RenderConfig {
            annotate_image: false,
            ..RenderConfig::default()
        }
    }

    fn sample_grid() -> SparseGrid<i32> {
        let mut matrix = SparseGrid::empty(10, 10).unwrap();
        matrix[[1, 2]] = Some(1);
        matrix[[2, 5]] = Some(7);
        matrix[[4, 5]] = Some(10);
        matrix[[5, 5]] = Some(5);
        matrix[[5, 4]] = Some(-15);
        matrix[[8, 9]] = Some(-190);
        matrix
    }

    #[test]
    fn test_sparse_min_max() {
        assert_eq!(sample_grid().min_max(), (-190, 10));
    }

    #[test]
    fn test_sparse_min_max_all_positive() {
        let mut grid = SparseGrid::empty(2, 2).unwrap();
        grid[[0, 0]] = Some(3_u8);
        grid[[1, 1]] = Some(9_u8);
        assert_eq!(grid.min_max(), (3, 9));
    }

    #[test]
    fn test_dense_min_max_includes_zero() {
        let grid = DenseGrid::from_vec(1, 3, vec![2.0_f32, 4.0, 8.0]).unwrap();
        assert_eq!(grid.min_max(), (0.0, 8.0));
    }

    #[test]
    fn test_shade() {
        let shade = Shade::new(-190.0, 10.0);
        assert_eq!(shade.color(None), WHITE);
        assert_eq!(shade.color(Some(0.0)), WHITE);
        assert_eq!(shade.color(Some(f64::NAN)), WHITE);
        assert_eq!(shade.color(Some(10.0)), Color::new(255, 0, 0, 255));
        assert_eq!(shade.color(Some(5.0)), Color::new(255, 0, 0, 128));
        assert_eq!(shade.color(Some(-190.0)), Color::new(0, 0, 0, 255));
        assert_eq!(shade.color(Some(-15.0)), Color::new(0, 0, 0, 21));
    }

    #[test]
    fn test_render_plain() {
        let img = sample_grid().render(&plain_config()).unwrap();
        assert_eq!(img.dimensions(), (11, 11));
        // (row 4, col 5) holds the maximum
        assert_eq!(img.get_pixel(5, 4).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0, WHITE.to_array());
        // trailing column stays transparent without annotations
        assert_eq!(img.get_pixel(10, 3).0, TRANSPARENT.to_array());
    }

    #[test]
    fn test_render_annotations() {
        let config = RenderConfig {
            scaling_factor: 5,
            ..RenderConfig::default()
        };
        let grid = sample_grid().scaled(&config).unwrap();
        let img = grid.render(&config).unwrap();

        assert_eq!(img.dimensions(), (51, 51));
        assert_eq!(img.get_pixel(3, 3).0, RED.to_array());
        assert_eq!(img.get_pixel(5, 7).0, BLUE.to_array());
        assert_eq!(img.get_pixel(7, 50).0, BLUE.to_array());
        // inside block (row 4, col 5) of the unscaled grid
        assert_eq!(img.get_pixel(27, 22).0, [255, 0, 0, 255]);
        // empty slot away from any annotation
        assert_eq!(img.get_pixel(1, 3).0, WHITE.to_array());
    }

    #[test]
    fn test_boundaries_need_their_flag() {
        let config = RenderConfig {
            scaling_factor: 5,
            draw_boundaries: false,
            draw_diagonal: false,
            ..RenderConfig::default()
        };
        let img = sample_grid().render(&config).unwrap();
        assert_eq!(img.get_pixel(5, 7).0, WHITE.to_array());
    }

    #[test]
    fn test_pixel_budget() {
        let config = RenderConfig {
            max_pixels: 100,
            ..RenderConfig::default()
        };
        assert!(matches!(
            sample_grid().render(&config),
            Err(CoreError::ImageTooLarge { width: 11, height: 11, .. })
        ));
    }

    #[test]
    fn test_scaling_checks_budget_first() {
        let config = RenderConfig {
            scaling_factor: 1000,
            max_pixels: 1 << 20,
            ..RenderConfig::default()
        };
        assert!(matches!(
            sample_grid().scaled(&config),
            Err(CoreError::ImageTooLarge { width: 10_001, height: 10_001, .. })
        ));
    }

    #[test]
    fn test_plot_writes_png() {
        let config = RenderConfig {
            scaling_factor: 4,
            ..RenderConfig::default()
        };
        let path = std::env::temp_dir().join(format!("ndimg_plot_{}.png", std::process::id()));

        sample_grid().scaled(&config).unwrap().plot(&config, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (41, 41));
        std::fs::remove_file(&path).ok();
    }
}
