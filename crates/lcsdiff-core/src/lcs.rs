//! Backtracking the direction table into the subsequence itself.

use crate::grid::{Direction, LcsGrid};

/// Recover the LCS from a built grid, reading elements off `old`.
///
/// Walks from the bottom-right cell towards the top or left edge: a
/// [`Direction::Match`] takes `old[i]` and steps diagonally, `Left` steps one
/// column back, `Up` one row back. Stops as soon as either index leaves the
/// grid. The result has exactly [`LcsGrid::lcs_len`] elements.
pub fn extract_lcs<'a, T>(grid: &LcsGrid, old: &'a [T]) -> Vec<&'a T> {
    debug_assert_eq!(grid.rows(), old.len(), "grid was built for another sequence");

    let mut lcs = Vec::with_capacity(grid.lcs_len());
    // One past the current cell, so the loop ends at zero instead of -1.
    let (mut i, mut j) = (grid.rows(), grid.cols());
    while i > 0 && j > 0 {
        match grid.direction(i - 1, j - 1) {
            Direction::Match => {
                lcs.push(&old[i - 1]);
                i -= 1;
                j -= 1;
            }
            Direction::Left => j -= 1,
            Direction::Up => i -= 1,
        }
    }
    lcs.reverse();
    lcs
}

/// Build the grid for `old` and `new` and return an owned copy of their LCS.
pub fn longest_common_subsequence<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Vec<T> {
    let grid = LcsGrid::build(old, new);
    extract_lcs(&grid, old).into_iter().cloned().collect()
}
