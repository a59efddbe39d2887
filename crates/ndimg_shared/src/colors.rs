//! Named colors used by the renderers.

use crate::records::Color;

/// Opaque black.
pub const BLACK: Color = Color::new(0, 0, 0, 255);

/// Opaque white. Background of empty cells.
pub const WHITE: Color = Color::new(255, 255, 255, 255);

/// Half-transparent red. Used for the diagonal annotation.
pub const RED: Color = Color::new(255, 0, 0, 125);

/// Opaque blue. Used for row and column boundaries.
pub const BLUE: Color = Color::new(0, 0, 255, 255);

/// Fully transparent.
pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
