//! Row-major 2D grids.
//!
//! Two flavours, sharing one shape:
//! - [`DenseGrid`]: every slot holds a value, zero means empty.
//! - [`SparseGrid`]: slots are `Option<T>`, `None` means empty.
//!
//! Coordinates are `(row, col)`. Linearization goes through `ndshape` with
//! the column as the fastest axis, which is exactly row-major order.

use std::ops::{Index, IndexMut};

use ndimg_shared::RasterDims;
use ndshape::{RuntimeShape, Shape};

use crate::error::{CoreError, CoreResult};

/// Numeric element of a plottable grid.
pub trait Sample: Copy + PartialOrd {
    /// Additive identity.
    const ZERO: Self;

    /// Lossy widening used for shading.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Sample for $ty {
                const ZERO: Self = $zero;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(
    i8 => 0, i16 => 0, i32 => 0, i64 => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0,
    f32 => 0.0, f64 => 0.0,
);

/// Dimensions of a grid, limited to 32-bit coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridShape {
    nrow: u32,
    ncol: u32,
}

impl GridShape {
    /// Creates a shape.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionOverflow`] unless both sides and the
    /// total size fit below `u32::MAX`.
    pub fn new(nrow: usize, ncol: usize) -> CoreResult<Self> {
        let overflow = || CoreError::DimensionOverflow { nrow, ncol };

        let rows = u32::try_from(nrow).ok().filter(|&n| n < u32::MAX).ok_or_else(overflow)?;
        let cols = u32::try_from(ncol).ok().filter(|&n| n < u32::MAX).ok_or_else(overflow)?;
        if u64::from(rows) * u64::from(cols) > u64::from(u32::MAX) {
            return Err(overflow());
        }

        Ok(Self { nrow: rows, ncol: cols })
    }

    /// Number of rows.
    #[must_use]
    pub const fn nrow(self) -> u32 {
        self.nrow
    }

    /// Number of columns.
    #[must_use]
    pub const fn ncol(self) -> u32 {
        self.ncol
    }

    /// Number of slots.
    #[must_use]
    pub const fn len(self) -> usize {
        self.nrow as usize * self.ncol as usize
    }

    /// True if the grid has no slots.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.nrow == 0 || self.ncol == 0
    }

    /// True if `(row, col)` is inside the grid.
    #[must_use]
    pub const fn contains(self, row: u32, col: u32) -> bool {
        row < self.nrow && col < self.ncol
    }

    /// `ndshape` layout with the column as the fastest axis.
    #[must_use]
    pub fn linear(self) -> RuntimeShape<u32, 2> {
        RuntimeShape::<u32, 2>::new([self.ncol, self.nrow])
    }

    /// Linear index of `(row, col)`.
    #[must_use]
    pub fn index(self, row: u32, col: u32) -> usize {
        self.linear().linearize([col, row]) as usize
    }

    /// `(row, col)` of a linear index.
    #[must_use]
    pub fn coords(self, index: usize) -> (u32, u32) {
        let [col, row] = self.linear().delinearize(index as u32);
        (row, col)
    }

    /// Same shape as raster dimensions.
    #[must_use]
    pub const fn dims(self) -> RasterDims {
        RasterDims::new(self.nrow as usize, self.ncol as usize)
    }

    /// Linear index of `[row, col]`, `None` outside the grid.
    #[must_use]
    pub fn checked_index(self, [row, col]: [usize; 2]) -> Option<usize> {
        let row = u32::try_from(row).ok()?;
        let col = u32::try_from(col).ok()?;
        self.contains(row, col).then(|| self.index(row, col))
    }

    #[track_caller]
    fn index_or_panic(self, at: [usize; 2]) -> usize {
        match self.checked_index(at) {
            Some(index) => index,
            None => panic!("grid index {at:?} out of bounds for {}x{}", self.nrow, self.ncol),
        }
    }

    /// Shape of this grid upscaled by `factor` in both directions.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionOverflow`] if the scaled grid is too large.
    pub fn scaled(self, factor: u32) -> CoreResult<Self> {
        let factor = factor as usize;
        Self::new(self.nrow as usize * factor, self.ncol as usize * factor)
    }
}

/// Grid where every slot holds a value.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseGrid<T> {
    shape: GridShape,
    data: Vec<T>,
}

impl<T: Clone> DenseGrid<T> {
    /// Grid filled with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionOverflow`] for oversized shapes.
    pub fn from_elem(nrow: usize, ncol: usize, value: T) -> CoreResult<Self> {
        let shape = GridShape::new(nrow, ncol)?;
        Ok(Self { shape, data: vec![value; shape.len()] })
    }

    /// Wraps a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape overflows or `data.len() != nrow * ncol`.
    pub fn from_vec(nrow: usize, ncol: usize, data: Vec<T>) -> CoreResult<Self> {
        let shape = GridShape::new(nrow, ncol)?;
        if data.len() != shape.len() {
            return Err(CoreError::DimensionMismatch {
                nrow,
                ncol,
                expected: shape.len(),
                found: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Nearest-neighbour upscale: `B[i][j] = A[i / factor][j / factor]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionOverflow`] if the result is too large.
    pub fn scaled_by(&self, factor: u32) -> CoreResult<Self> {
        if factor <= 1 {
            return Ok(self.clone());
        }
        let shape = self.shape.scaled(factor)?;
        let data = upscale(self.shape, shape, factor, &self.data);
        Ok(Self { shape, data })
    }
}

impl<T> DenseGrid<T> {
    /// Grid shape.
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<&T> {
        if !self.shape.contains(row, col) {
            return None;
        }
        self.data.get(self.shape.index(row, col))
    }

    /// Row-major contents.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<[usize; 2]> for DenseGrid<T> {
    type Output = T;

    fn index(&self, at: [usize; 2]) -> &T {
        &self.data[self.shape.index_or_panic(at)]
    }
}

impl<T> IndexMut<[usize; 2]> for DenseGrid<T> {
    fn index_mut(&mut self, at: [usize; 2]) -> &mut T {
        let index = self.shape.index_or_panic(at);
        &mut self.data[index]
    }
}

/// Grid where slots may be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseGrid<T> {
    shape: GridShape,
    data: Vec<Option<T>>,
}

impl<T: Clone> SparseGrid<T> {
    /// Grid with every slot empty.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionOverflow`] for oversized shapes.
    pub fn empty(nrow: usize, ncol: usize) -> CoreResult<Self> {
        let shape = GridShape::new(nrow, ncol)?;
        Ok(Self { shape, data: vec![None; shape.len()] })
    }

    /// Nearest-neighbour upscale: `B[i][j] = A[i / factor][j / factor]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionOverflow`] if the result is too large.
    pub fn scaled_by(&self, factor: u32) -> CoreResult<Self> {
        if factor <= 1 {
            return Ok(self.clone());
        }
        let shape = self.shape.scaled(factor)?;
        let data = upscale(self.shape, shape, factor, &self.data);
        Ok(Self { shape, data })
    }
}

impl<T> SparseGrid<T> {
    /// Grid shape.
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Value at `(row, col)`, `None` if empty or outside.
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<&T> {
        if !self.shape.contains(row, col) {
            return None;
        }
        self.data[self.shape.index(row, col)].as_ref()
    }

    /// Stores `value` at `(row, col)`, replacing what was there.
    ///
    /// Returns false if the slot is outside the grid.
    pub fn set(&mut self, row: u32, col: u32, value: T) -> bool {
        if !self.shape.contains(row, col) {
            return false;
        }
        let index = self.shape.index(row, col);
        self.data[index] = Some(value);
        true
    }

    /// Present values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter().flatten()
    }
}

impl<T> Index<[usize; 2]> for SparseGrid<T> {
    type Output = Option<T>;

    fn index(&self, at: [usize; 2]) -> &Option<T> {
        &self.data[self.shape.index_or_panic(at)]
    }
}

impl<T> IndexMut<[usize; 2]> for SparseGrid<T> {
    fn index_mut(&mut self, at: [usize; 2]) -> &mut Option<T> {
        let index = self.shape.index_or_panic(at);
        &mut self.data[index]
    }
}

fn upscale<C: Clone>(from: GridShape, to: GridShape, factor: u32, data: &[C]) -> Vec<C> {
    let source = from.linear();
    let target = to.linear();
    (0..to.len() as u32)
        .map(|index| {
            let [col, row] = target.delinearize(index);
            data[source.linearize([col / factor, row / factor]) as usize].clone()
        })
        .collect()
}
