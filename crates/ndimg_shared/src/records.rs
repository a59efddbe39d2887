//! Cell records with a fixed C layout.
//!
//! These are the only record definitions in the workspace. Every other
//! crate and `include/ndimg.h` use these.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Raster coordinate. `x` is the column, `y` the row.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Position {
    /// Column index
    pub x: u32,
    /// Row index
    pub y: u32,
}

impl Position {
    /// Creates a new position
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// RGBA color, one byte per channel.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Alpha channel
    pub alpha: u8,
}

impl Color {
    /// Creates a new color
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Channels in RGBA order
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Same color with a different alpha channel
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }
}

/// A labeled, colored point without a position.
///
/// Position-less cells are laid onto a raster in buffer order.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Cell {
    /// Cell value (C `int`)
    pub value: i32,
    /// Cell color
    pub color: Color,
}

impl Cell {
    /// Creates a new cell
    #[must_use]
    pub const fn new(value: i32, color: Color) -> Self {
        Self { value, color }
    }

    /// Attaches a position to this cell
    #[must_use]
    pub const fn at(self, pos: Position) -> CellWithPosition {
        CellWithPosition::new(pos, self.value, self.color)
    }
}

/// A labeled, colored point at an explicit raster position.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct CellWithPosition {
    /// Raster position
    pub pos: Position,
    /// Cell value (C `int`)
    pub value: i32,
    /// Cell color
    pub color: Color,
}

impl CellWithPosition {
    /// Creates a new positioned cell
    #[must_use]
    pub const fn new(pos: Position, value: i32, color: Color) -> Self {
        Self { pos, value, color }
    }

    /// Drops the position
    #[must_use]
    pub const fn cell(self) -> Cell {
        Cell::new(self.value, self.color)
    }
}
