//! Board state: an NxN grid of occupancy bits.
//!
//! The search owns a single `Board` and mutates it in place with strictly
//! paired [`Board::place`] / [`Board::unplace`] calls.

use std::fmt;

use crate::constants::{EMPTY, QUEEN};

/// A `(row, col)` cell coordinate.
pub type Cell = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// An empty `size`x`size` board. Panics on a zero size.
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board size must be positive");
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Whether a queen stands on `(row, col)`. Off-board cells are empty.
    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        self.cells[self.idx(row, col)]
    }

    /// Put a queen on an empty cell.
    pub fn place(&mut self, row: usize, col: usize) {
        let i = self.idx(row, col);
        debug_assert!(!self.cells[i], "cell ({row}, {col}) already occupied");
        self.cells[i] = true;
    }

    /// Remove the queen placed by the matching [`Board::place`].
    pub fn unplace(&mut self, row: usize, col: usize) {
        let i = self.idx(row, col);
        debug_assert!(self.cells[i], "cell ({row}, {col}) is not occupied");
        self.cells[i] = false;
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| !c)
    }

    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// All occupied cells in row-major order.
    pub fn queens(&self) -> impl Iterator<Item = Cell> + '_ {
        let s = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(i, _)| (i / s, i % s))
    }

    /// Row of the queen in each column, or `None` unless every column holds
    /// exactly one queen.
    pub fn solution(&self) -> Option<Vec<usize>> {
        (0..self.size)
            .map(|col| {
                let mut rows = (0..self.size).filter(|&row| self.is_occupied(row, col));
                match (rows.next(), rows.next()) {
                    (Some(row), None) => Some(row),
                    _ => None,
                }
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = if self.is_occupied(row, col) { QUEEN } else { EMPTY };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
