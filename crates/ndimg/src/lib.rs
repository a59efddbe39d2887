//! # NDIMG
//!
//! Host side of ndimg: logging setup, the image renderer install, and the
//! buffers the `do_*` programs send through the C entry points.
//!
//! ## Crates
//!
//! - `ndimg_shared`: `#[repr(C)]` records
//! - `ndimg_core`: matrices, grids, plotting, config
//! - `ndimg_render`: the `Renderer` trait and its backends
//! - `ndimg_ffi`: `extern "C"` entry points
//!
//! ## Running
//!
//! ```text
//! NDIMG_CONFIG=ndimg.toml NDIMG_LOG=debug cargo run --bin do_matrix
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use ndimg_core::RenderConfig;
use ndimg_ffi::{install_renderer, FfiResult, NdimgStatus};
use ndimg_render::ImageRenderer;

pub mod demo;
pub mod logging;

pub use logging::{init_logging, LOG_ENV};

/// Re-exports for host programs.
pub mod prelude {
    pub use ndimg_core::{MatrixBuffer, RenderConfig};
    pub use ndimg_ffi::host;
    pub use ndimg_ffi::NdimgStatus;
    pub use ndimg_shared::{Cell, CellWithPosition, Color, Position, RasterDims};
}

/// Loads the config, starts logging and installs an [`ImageRenderer`].
///
/// # Errors
///
/// Returns an error if the config file or the output directory is unusable.
pub fn prepare() -> FfiResult<RenderConfig> {
    let config = RenderConfig::from_env()?;
    init_logging(&config);
    tracing::info!(
        output_dir = %config.output_dir.display(),
        scaling_factor = config.scaling_factor,
        "ndimg host starting"
    );
    install_renderer(Box::new(ImageRenderer::new(config.clone())?));
    Ok(config)
}

/// Exit code for a boundary status.
#[must_use]
pub fn exit_code(step: &str, status: NdimgStatus) -> ExitCode {
    if status == NdimgStatus::Ok {
        tracing::info!(step, "done");
        ExitCode::SUCCESS
    } else {
        tracing::error!(step, ?status, "boundary call failed");
        ExitCode::FAILURE
    }
}
