//! A runtime-sized cell set packed into unsigned words.
//!
//! Boards range from 5×5 up to 26×26, which no single primitive integer can
//! hold, so cells are spread across a `Vec` of words `T`. Cell `(row, col)`
//! lives at bit `row * cols + col`.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{BitAnd, BitOr};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    EmptyDimensions { rows: usize, cols: usize },
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
    /// `rows * cols` does not fit in `usize`.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyDimensions { rows, cols } => {
                write!(f, "EmptyDimensions: {}x{} grid has no cells", rows, cols)
            }
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            GridError::TooLarge { rows, cols } => {
                write!(f, "TooLarge: {}x{} cells overflow usize", rows, cols)
            }
        }
    }
}

/// A `rows × cols` set of cells stored in words of type `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid<T = u64>
where
    T: PrimInt + Unsigned + Zero,
{
    rows: usize,
    cols: usize,
    words: Vec<T>,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn word_bits() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Create an empty grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        let words = len.div_ceil(Self::word_bits());
        Ok(BitGrid {
            rows,
            cols,
            words: vec![T::zero(); words],
        })
    }

    /// Creates a grid from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(rows: usize, cols: usize, iter: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(rows, cols)?;
        for (r, c) in iter {
            grid.set(r, c)?;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the number of set cells.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let (word, bit) = self.locate(row, col)?;
        Ok(((self.words[word] >> bit) & T::one()) != T::zero())
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] | (T::one() << bit);
        Ok(())
    }

    /// Clears the cell at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] & !(T::one() << bit);
        Ok(())
    }

    /// Toggles the cell at (row, col).
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] ^ (T::one() << bit);
        Ok(())
    }

    /// Sets every cell.
    pub fn fill(&mut self) {
        for w in self.words.iter_mut() {
            *w = !T::zero();
        }
        // bits past the last cell must stay clear for count_ones
        let tail = self.len() % Self::word_bits();
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last = (T::one() << tail) - T::one();
            }
        }
    }

    /// Clears every cell.
    pub fn clear_all(&mut self) {
        for w in self.words.iter_mut() {
            *w = T::zero();
        }
    }

    /// Row-major index of a cell, as used by random sampling.
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        self.check_bounds(row, col)?;
        Ok(row * self.cols + col)
    }

    /// Inverse of [`BitGrid::index_of`].
    pub fn coords_of(&self, idx: usize) -> Option<(usize, usize)> {
        if idx < self.len() {
            Some((idx / self.cols, idx % self.cols))
        } else {
            None
        }
    }

    /// Iterator over the set cells in row-major order.
    pub fn iter_set_bits(&self) -> Cells<'_, T> {
        Cells {
            grid: self,
            idx: 0,
            want: true,
        }
    }

    /// Iterator over the clear cells in row-major order.
    pub fn iter_clear_bits(&self) -> Cells<'_, T> {
        Cells {
            grid: self,
            idx: 0,
            want: false,
        }
    }

    #[inline]
    fn bit_at(&self, idx: usize) -> bool {
        let w = Self::word_bits();
        ((self.words[idx / w] >> (idx % w)) & T::one()) != T::zero()
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), GridError> {
        let idx = self.index_of(row, col)?;
        let w = Self::word_bits();
        Ok((idx / w, idx % w))
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            Err(GridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    fn zip_with(&self, rhs: &Self, op: impl Fn(T, T) -> T) -> Self {
        assert_eq!(
            (self.rows, self.cols),
            (rhs.rows, rhs.cols),
            "grid dimensions differ"
        );
        BitGrid {
            rows: self.rows,
            cols: self.cols,
            words: self
                .words
                .iter()
                .zip(rhs.words.iter())
                .map(|(&a, &b)| op(a, b))
                .collect(),
        }
    }
}

/// Iterator over the set (or clear) cells of a grid.
#[derive(Clone)]
pub struct Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T>,
    idx: usize,
    want: bool,
}

impl<'a, T> Iterator for Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.grid.len() {
            let idx = self.idx;
            self.idx += 1;
            if self.grid.bit_at(idx) == self.want {
                return self.grid.coords_of(idx);
            }
        }
        None
    }
}

/// Intersection of two grids.
///
/// # Panics
///
/// Panics if the grids differ in rows or columns.
impl<T> BitAnd for &BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = BitGrid<T>;
    fn bitand(self, rhs: Self) -> BitGrid<T> {
        self.zip_with(rhs, |a, b| a & b)
    }
}

/// Union of two grids.
///
/// # Panics
///
/// Panics if the grids differ in rows or columns.
impl<T> BitOr for &BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = BitGrid<T>;
    fn bitor(self, rhs: Self) -> BitGrid<T> {
        self.zip_with(rhs, |a, b| a | b)
    }
}

impl<T> fmt::Display for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let bit = if self.bit_at(r * self.cols + c) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BitGrid<{}> {}x{}:",
            core::any::type_name::<T>(),
            self.rows,
            self.cols
        )?;
        writeln!(f, "{}", self)
    }
}
