//! Frame validation.
//!
//! Callers of the boundary are trusted for nothing: counts, raster sizes and
//! positions are checked here before any pixel is touched.

use ndimg_shared::{CellWithPosition, RasterDims};

use crate::config::RenderConfig;
use crate::error::{CoreError, CoreResult};

/// Number of slots in `dims`.
///
/// # Errors
///
/// Returns [`CoreError::DimensionOverflow`] if `nrow * ncol` overflows `usize`.
pub fn raster_area(dims: RasterDims) -> CoreResult<usize> {
    dims.area().ok_or(CoreError::DimensionOverflow {
        nrow: dims.nrow,
        ncol: dims.ncol,
    })
}

/// Checks that `count` position-less cells fit into `dims`.
///
/// # Errors
///
/// Returns [`CoreError::TooManyCells`] if the raster has fewer slots than cells.
pub fn check_cell_count(count: usize, dims: RasterDims) -> CoreResult<()> {
    if count > raster_area(dims)? {
        return Err(CoreError::TooManyCells {
            count,
            nrow: dims.nrow,
            ncol: dims.ncol,
        });
    }
    Ok(())
}

/// Checks that every positioned cell lies inside `dims`.
///
/// # Errors
///
/// Returns [`CoreError::PositionOutOfBounds`] for the first offending cell.
pub fn check_positions(cells: &[CellWithPosition], dims: RasterDims) -> CoreResult<()> {
    match cells.iter().position(|cell| !dims.contains(cell.pos)) {
        Some(index) => {
            let pos = cells[index].pos;
            Err(CoreError::PositionOutOfBounds {
                index,
                x: pos.x,
                y: pos.y,
                nrow: dims.nrow,
                ncol: dims.ncol,
            })
        }
        None => Ok(()),
    }
}

/// Checks that a flat buffer of `len` values describes an `nrow × ncol` matrix.
///
/// # Errors
///
/// Returns [`CoreError::DimensionOverflow`] or [`CoreError::DimensionMismatch`].
pub fn check_matrix_len(len: usize, nrow: usize, ncol: usize) -> CoreResult<()> {
    let expected = raster_area(RasterDims::new(nrow, ncol))?;
    if len != expected {
        return Err(CoreError::DimensionMismatch {
            nrow,
            ncol,
            expected,
            found: len,
        });
    }
    Ok(())
}

/// Checks that `dims`, upscaled by the configured factor, renders within
/// `config.max_pixels`.
///
/// Runs before any grid is allocated.
///
/// # Errors
///
/// Returns [`CoreError::ImageTooLarge`] over budget, or
/// [`CoreError::DimensionOverflow`] if the image size is not representable.
pub fn check_image_budget(dims: RasterDims, config: &RenderConfig) -> CoreResult<()> {
    let scale = u64::from(config.scale());
    let side = |n: usize| {
        u64::try_from(n)
            .ok()
            .and_then(|n| n.checked_mul(scale))
            .and_then(|n| n.checked_add(1))
    };
    let (Some(width), Some(height)) = (side(dims.ncol), side(dims.nrow)) else {
        return Err(CoreError::DimensionOverflow { nrow: dims.nrow, ncol: dims.ncol });
    };
    match width.checked_mul(height) {
        Some(pixels) if pixels <= config.max_pixels => Ok(()),
        _ => Err(CoreError::ImageTooLarge { width, height, max_pixels: config.max_pixels }),
    }
}
