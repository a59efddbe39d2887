//! # NDIMG Render
//!
//! The boundary functions of ndimg, as a capability object.
//!
//! ```text
//! read_cells               ─┐
//! read_cells_with_position ─┤
//! show_matrix              ─┼──▶ dyn Renderer ──▶ ImageRenderer     (PNG files)
//! show_vector              ─┤                 └─▶ RecordingRenderer (in-memory frames)
//! double_input             ─┘
//! ```
//!
//! A C caller reaches a renderer through `ndimg_ffi`; Rust callers hold one
//! directly.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod image_renderer;
pub mod recording;
pub mod renderer;

pub use error::{RenderError, RenderResult};
pub use image_renderer::ImageRenderer;
pub use recording::{Frame, RecordingRenderer};
pub use renderer::Renderer;
