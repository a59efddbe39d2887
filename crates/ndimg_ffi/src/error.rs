//! # Boundary Error Types

use std::sync::atomic::{AtomicI32, Ordering};

use ndimg_core::CoreError;
use ndimg_render::RenderError;
use thiserror::Error;

/// Errors raised while crossing the boundary.
#[derive(Error, Debug)]
pub enum FfiError {
    /// A null pointer was passed with a non-zero element count.
    #[error("{function}: null buffer with {count} elements")]
    NullBuffer {
        /// Boundary function that was called.
        function: &'static str,
        /// Element count passed alongside the pointer.
        count: usize,
    },

    /// The pointer is not aligned for its element type.
    #[error("{function}: buffer at {address:#x} is not aligned to {align} bytes")]
    Misaligned {
        /// Boundary function that was called.
        function: &'static str,
        /// Address passed in.
        address: usize,
        /// Required alignment.
        align: usize,
    },

    /// `count * size_of::<T>()` does not fit in `isize`.
    #[error("{function}: {count} elements do not fit in memory")]
    BufferTooLarge {
        /// Boundary function that was called.
        function: &'static str,
        /// Element count passed in.
        count: usize,
    },

    /// The renderer rejected the frame or failed to output it.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Dimensions could not be validated before reaching a renderer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The call panicked inside Rust.
    #[error("{0} panicked")]
    Panicked(&'static str),
}

/// Result type for boundary operations.
pub type FfiResult<T> = Result<T, FfiError>;

/// Outcome of the most recent boundary call, readable from C.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NdimgStatus {
    /// Success
    Ok = 0,
    /// Null, misaligned or oversized buffer
    InvalidBuffer = 1,
    /// Frame rejected by validation
    InvalidFrame = 2,
    /// Image output or renderer setup failed
    OutputFailed = 3,
    /// Rust code panicked
    Panicked = 4,
}

impl From<&FfiError> for NdimgStatus {
    fn from(err: &FfiError) -> Self {
        match err {
            FfiError::NullBuffer { .. } | FfiError::Misaligned { .. } | FfiError::BufferTooLarge { .. } => {
                Self::InvalidBuffer
            }
            FfiError::Core(core) | FfiError::Render(RenderError::Core(core)) => match core {
                CoreError::Image(_) | CoreError::ConfigIo { .. } | CoreError::ConfigParse(_) => {
                    Self::OutputFailed
                }
                _ => Self::InvalidFrame,
            },
            FfiError::Render(RenderError::OutputDir { .. }) => Self::OutputFailed,
            FfiError::Panicked(_) => Self::Panicked,
        }
    }
}

static LAST_STATUS: AtomicI32 = AtomicI32::new(NdimgStatus::Ok as i32);

/// Records the outcome of a boundary call.
pub(crate) fn set_last_status(status: NdimgStatus) {
    LAST_STATUS.store(status as i32, Ordering::Relaxed);
}

/// Outcome of the most recent boundary call.
#[must_use]
pub fn last_status() -> NdimgStatus {
    match LAST_STATUS.load(Ordering::Relaxed) {
        0 => NdimgStatus::Ok,
        1 => NdimgStatus::InvalidBuffer,
        2 => NdimgStatus::InvalidFrame,
        3 => NdimgStatus::OutputFailed,
        _ => NdimgStatus::Panicked,
    }
}
