//! Dynamic-programming tables for the longest common subsequence.
//!
//! [`LcsGrid`] stores two `rows x cols` tables in row-major order: the LCS
//! length of every prefix pair and the [`Direction`] that produced it.
//!
//! # Invariants
//!
//! - `count(i, j) == count(i-1, j-1) + 1` when `old[i] == new[j]`, otherwise
//!   `max(count(i-1, j), count(i, j-1))`, with out-of-range cells read as 0.
//! - On a tie between the upper and left neighbours, [`Direction::Up`] wins.

use crate::error::{DiffError, DiffResult};

/// Which predecessor produced a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `old[i] == new[j]`: the diagonal predecessor plus one.
    Match,
    /// Carried down from `(i - 1, j)`.
    Up,
    /// Carried across from `(i, j - 1)`.
    Left,
}

/// LCS length and backtrack tables for one pair of sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcsGrid {
    rows: usize,
    cols: usize,
    counts: Vec<usize>,
    moves: Vec<Direction>,
}

impl LcsGrid {
    /// Build the grid for `old` (rows) against `new` (columns).
    ///
    /// Allocation failure aborts, as with any `Vec`. Use
    /// [`try_build`](Self::try_build) to get an error instead.
    pub fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let cells = old.len().saturating_mul(new.len());
        let mut grid = Self {
            rows: old.len(),
            cols: new.len(),
            counts: Vec::with_capacity(cells),
            moves: Vec::with_capacity(cells),
        };
        grid.fill(old, new);
        grid
    }

    /// Build the grid, reporting oversized or unallocatable tables as errors
    /// before any cell is computed.
    pub fn try_build<T: PartialEq>(old: &[T], new: &[T]) -> DiffResult<Self> {
        let (rows, cols) = (old.len(), new.len());
        let cells = rows
            .checked_mul(cols)
            .ok_or(DiffError::GridOverflow { rows, cols })?;

        let mut counts = Vec::new();
        counts
            .try_reserve_exact(cells)
            .map_err(|_| DiffError::AllocationFailed { cells })?;
        let mut moves = Vec::new();
        moves
            .try_reserve_exact(cells)
            .map_err(|_| DiffError::AllocationFailed { cells })?;

        let mut grid = Self {
            rows,
            cols,
            counts,
            moves,
        };
        grid.fill(old, new);
        Ok(grid)
    }

    // Cells are pushed in row-major order, so the cell for (i, j) is always
    // the next free slot and every predecessor already exists.
    fn fill<T: PartialEq>(&mut self, old: &[T], new: &[T]) {
        for (i, a) in old.iter().enumerate() {
            for (j, b) in new.iter().enumerate() {
                if a == b {
                    let diag = if i > 0 && j > 0 {
                        self.count(i - 1, j - 1)
                    } else {
                        0
                    };
                    self.counts.push(diag + 1);
                    self.moves.push(Direction::Match);
                } else {
                    let top = if i > 0 { self.count(i - 1, j) } else { 0 };
                    let left = if j > 0 { self.count(i, j - 1) } else { 0 };
                    if top >= left {
                        self.counts.push(top);
                        self.moves.push(Direction::Up);
                    } else {
                        self.counts.push(left);
                        self.moves.push(Direction::Left);
                    }
                }
            }
        }
    }

    /// Number of rows (length of the old sequence).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (length of the new sequence).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if either input was empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// LCS length of `old[..=i]` and `new[..=j]`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the grid.
    pub fn count(&self, i: usize, j: usize) -> usize {
        self.counts[self.offset(i, j)]
    }

    /// Backtrack direction of cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the grid.
    pub fn direction(&self, i: usize, j: usize) -> Direction {
        self.moves[self.offset(i, j)]
    }

    /// Length of the LCS of the full sequences.
    pub fn lcs_len(&self) -> usize {
        self.counts.last().copied().unwrap_or(0)
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}
