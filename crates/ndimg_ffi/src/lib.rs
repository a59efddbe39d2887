//! # NDIMG FFI
//!
//! C linkage for ndimg. A C or C++ host fills a contiguous buffer of
//! records (or floats) and passes its address and element count:
//!
//! ```c
//! cell_t cells[2] = {{10, {255, 0, 0, 255}}, {20, {0, 0, 255, 255}}};
//! read_cells(cells, 2, 100, 100);
//! ```
//!
//! Record layouts are those of [`ndimg_shared::Cell`] and
//! [`ndimg_shared::CellWithPosition`]; `include/ndimg.h` mirrors them.
//!
//! ## Failure reporting
//!
//! The entry points return nothing to C. A rejected call is logged through
//! `tracing` and leaves a code readable with [`ndimg_last_status`]; it never
//! unwinds into the caller.

#![deny(missing_docs)]
#![allow(unsafe_code)]
#![warn(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod exports;
pub mod host;
pub mod slot;

pub use error::{last_status, FfiError, FfiResult, NdimgStatus};
pub use exports::{
    double_input, ndimg_last_status, read_cells, read_cells_with_position, show_matrix,
    show_vector,
};
pub use slot::{install_renderer, take_renderer, with_installed, with_renderer, BoxedRenderer};
