//! Edit script generation: group everything outside the LCS into runs.
//!
//! Each side is scanned independently against the LCS. Elements that line up
//! with the next LCS element are retained; every maximal stretch of elements
//! that does not becomes one operation. Deletes come from the old side,
//! inserts from the new side, and the script lists all deletes first.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::edit::{EditKind, EditOp, EditScript};
use crate::error::{DiffError, DiffResult};
use crate::grid::LcsGrid;
use crate::lcs::extract_lcs;

/// Size ceiling applied by [`try_compute_changes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffLimits {
    /// Maximum number of grid cells (`|old| * |new|`) to allocate.
    pub max_cells: usize,
}

impl Default for DiffLimits {
    fn default() -> Self {
        Self {
            max_cells: 64 * 1024 * 1024,
        }
    }
}

impl DiffLimits {
    /// No ceiling beyond what the allocator will give.
    pub fn unlimited() -> Self {
        Self {
            max_cells: usize::MAX,
        }
    }

    fn check(&self, rows: usize, cols: usize) -> DiffResult<()> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(DiffError::GridOverflow { rows, cols })?;
        if cells > self.max_cells {
            return Err(DiffError::GridTooLarge {
                cells,
                max: self.max_cells,
            });
        }
        Ok(())
    }
}

/// Compute the edit script that turns `old` into `new`.
///
/// Identical inputs short-circuit to an empty script without building a
/// grid. The grid costs `O(|old| * |new|)` time and memory.
///
/// ```
/// use lcsdiff_core::{compute_changes, EditOp};
///
/// let old: Vec<char> = "A".chars().collect();
/// let new: Vec<char> = "B".chars().collect();
/// let script = compute_changes(&old, &new);
/// assert_eq!(
///     script.into_ops(),
///     vec![EditOp::delete(0, vec!['A']), EditOp::insert(0, vec!['B'])]
/// );
/// ```
pub fn compute_changes<T: PartialEq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    if old == new {
        return EditScript::new();
    }
    let grid = LcsGrid::build(old, new);
    let lcs = extract_lcs(&grid, old);
    generate_changes(old, new, &lcs)
}

/// Like [`compute_changes`], but refuses grids larger than `limits` and
/// reports allocation failure instead of aborting.
pub fn try_compute_changes<T: PartialEq + Clone>(
    old: &[T],
    new: &[T],
    limits: &DiffLimits,
) -> DiffResult<EditScript<T>> {
    if old == new {
        return Ok(EditScript::new());
    }
    limits.check(old.len(), new.len())?;
    let grid = LcsGrid::try_build(old, new)?;
    let lcs = extract_lcs(&grid, old);
    Ok(generate_changes(old, new, &lcs))
}

/// Derive grouped deletes (old vs. `lcs`) and inserts (new vs. `lcs`).
///
/// `lcs` must be a common subsequence of `old` and `new`; it may hold the
/// elements themselves or references into either input.
pub fn generate_changes<T, L>(old: &[T], new: &[T], lcs: &[L]) -> EditScript<T>
where
    T: PartialEq + Clone,
    L: Borrow<T>,
{
    let mut script = EditScript::new();
    collect_runs(old, lcs, EditKind::Delete, &mut script);
    collect_runs(new, lcs, EditKind::Insert, &mut script);
    script
}

fn collect_runs<T, L>(source: &[T], lcs: &[L], kind: EditKind, script: &mut EditScript<T>)
where
    T: PartialEq + Clone,
    L: Borrow<T>,
{
    let mut j = 0;
    let mut i = 0;
    while i < source.len() {
        // An exhausted LCS matches nothing, so the tail becomes one run.
        let anchor = lcs.get(j).map(<L as Borrow<T>>::borrow);
        if anchor == Some(&source[i]) {
            j += 1;
            i += 1;
            continue;
        }

        let start = i;
        let mut run = Vec::new();
        while i < source.len() && anchor != Some(&source[i]) {
            run.push(source[i].clone());
            i += 1;
        }
        script.push(EditOp {
            kind,
            index: start,
            run,
        });
    }
}
