//! # NDIMG Shared
//!
//! Canonical records used on both sides of the rendering boundary.
//!
//! ## CRITICAL RULE
//!
//! Field order and primitive widths of every record in [`records`] are part
//! of the C ABI. They mirror `ndimg_ffi/include/ndimg.h` exactly:
//!
//! ```text
//! Cell             = { int32 value; uint8 red, green, blue, alpha }               (8 bytes)
//! CellWithPosition = { uint32 x; uint32 y; int32 value; uint8 red, green, blue, alpha } (16 bytes)
//! ```
//!
//! Neither record has padding, so both are [`bytemuck::Pod`] and can be viewed
//! as raw bytes without copying.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod colors;
pub mod raster;
pub mod records;

pub use raster::RasterDims;
pub use records::{Cell, CellWithPosition, Color, Position};
