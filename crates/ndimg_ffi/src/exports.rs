//! `extern "C"` entry points.
//!
//! Every entry point:
//! 1. turns its pointer and count into a slice (null only with a zero count)
//! 2. hands the slice to the installed renderer
//! 3. logs any error and records it for [`ndimg_last_status`]
//!
//! Pointers are read during the call only and never retained.

use std::ffi::c_int;
use std::panic::{catch_unwind, AssertUnwindSafe};

use ndimg_core::validate::raster_area;
use ndimg_core::MatrixView;
use ndimg_shared::{Cell, CellWithPosition, RasterDims};

use crate::error::{last_status, set_last_status, FfiError, FfiResult, NdimgStatus};
use crate::slot::{with_installed, with_renderer};

/// Borrows `count` elements at `ptr`.
///
/// # Safety
///
/// If `count > 0` and `ptr` passes the null and alignment checks, `ptr` must
/// point to `count` initialized values of `T` that stay valid and unmodified
/// for `'a`.
unsafe fn borrow_slice<'a, T>(function: &'static str, ptr: *const T, count: usize) -> FfiResult<&'a [T]> {
    if count == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(FfiError::NullBuffer { function, count });
    }
    let align = std::mem::align_of::<T>();
    if (ptr as usize) % align != 0 {
        return Err(FfiError::Misaligned { function, address: ptr as usize, align });
    }
    let fits = count
        .checked_mul(std::mem::size_of::<T>())
        .is_some_and(|bytes| isize::try_from(bytes).is_ok());
    if !fits {
        return Err(FfiError::BufferTooLarge { function, count });
    }
    // SAFETY: non-null, aligned, size fits isize; validity is the caller's contract.
    Ok(unsafe { std::slice::from_raw_parts(ptr, count) })
}

/// Runs a boundary call, converting errors and panics into a status.
fn guarded(function: &'static str, body: impl FnOnce() -> FfiResult<()>) {
    let outcome = catch_unwind(AssertUnwindSafe(body)).unwrap_or(Err(FfiError::Panicked(function)));
    match outcome {
        Ok(()) => set_last_status(NdimgStatus::Ok),
        Err(err) => {
            tracing::error!(function, error = %err, "boundary call failed");
            set_last_status(NdimgStatus::from(&err));
        }
    }
}

/// Lays `length` cells onto an `nrow × ncol` raster in buffer order.
///
/// # Safety
///
/// `cells` must point to `length` valid [`Cell`] records, or be null with
/// `length == 0`.
#[no_mangle]
pub unsafe extern "C" fn read_cells(cells: *const Cell, length: usize, nrow: usize, ncol: usize) {
    guarded("read_cells", || {
        // SAFETY: forwarded from this function's contract.
        let cells = unsafe { borrow_slice("read_cells", cells, length)? };
        with_renderer(|renderer| renderer.read_cells(cells, RasterDims::new(nrow, ncol)))??;
        Ok(())
    });
}

/// Places `size` positioned cells on a raster.
///
/// The raster is the renderer's configured positioned raster, or the
/// smallest raster enclosing every position.
///
/// # Safety
///
/// `cells` must point to `size` valid [`CellWithPosition`] records, or be
/// null with `size == 0`.
#[no_mangle]
pub unsafe extern "C" fn read_cells_with_position(cells: *const CellWithPosition, size: usize) {
    guarded("read_cells_with_position", || {
        // SAFETY: forwarded from this function's contract.
        let cells = unsafe { borrow_slice("read_cells_with_position", cells, size)? };
        with_renderer(|renderer| {
            let dims = renderer.positioned_dims(cells);
            renderer.read_cells_with_position(cells, dims)
        })??;
        Ok(())
    });
}

/// Shows an `nrow × ncol` row-major matrix.
///
/// # Safety
///
/// `data` must point to `nrow * ncol` valid floats, or be null when the
/// product is zero.
#[no_mangle]
pub unsafe extern "C" fn show_matrix(data: *const f32, nrow: usize, ncol: usize) {
    guarded("show_matrix", || {
        let len = raster_area(RasterDims::new(nrow, ncol))?;
        // SAFETY: forwarded from this function's contract.
        let data = unsafe { borrow_slice("show_matrix", data, len)? };
        let matrix = MatrixView::new(data, nrow, ncol)?;
        with_renderer(|renderer| renderer.show_matrix(matrix))??;
        Ok(())
    });
}

/// Shows a vector of `size` floats.
///
/// # Safety
///
/// `data` must point to `size` valid floats, or be null with `size == 0`.
#[no_mangle]
pub unsafe extern "C" fn show_vector(data: *const f32, size: usize) {
    guarded("show_vector", || {
        // SAFETY: forwarded from this function's contract.
        let data = unsafe { borrow_slice("show_vector", data, size)? };
        with_renderer(|renderer| renderer.show_vector(data))??;
        Ok(())
    });
}

/// Doubles `input`, saturating at the `int` range.
///
/// An installed renderer may override the result. With none installed this
/// never creates the default renderer, so it touches no files.
#[no_mangle]
pub extern "C" fn double_input(input: c_int) -> c_int {
    let mut output = input.saturating_mul(2);
    guarded("double_input", || {
        if let Some(doubled) = with_installed(|renderer| renderer.double_input(input)) {
            output = doubled;
        }
        Ok(())
    });
    output
}

/// Outcome of the most recent boundary call as an [`NdimgStatus`] code.
#[no_mangle]
pub extern "C" fn ndimg_last_status() -> c_int {
    last_status() as c_int
}
