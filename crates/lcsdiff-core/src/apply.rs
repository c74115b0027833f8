//! Replaying and inverting edit scripts.
//!
//! A script is applied in two passes: deletes are removed from the base in
//! reverse script order (rightmost first for a generated script, so earlier
//! indices stay valid), then inserts are spliced in script order (leftmost
//! first). Every delete is checked against the elements it claims to remove.

use crate::edit::{EditKind, EditOp, EditScript};
use crate::error::{DiffError, DiffResult};

/// Apply `script` to `base`, returning the patched sequence.
///
/// Fails without modifying anything visible to the caller if an index is out
/// of range or a delete run differs from the base content at its index.
pub fn apply_changes<T: PartialEq + Clone>(
    base: &[T],
    script: &EditScript<T>,
) -> DiffResult<Vec<T>> {
    let mut out = base.to_vec();

    for op in script.deletions().rev() {
        let Some(end) = op
            .index
            .checked_add(op.run.len())
            .filter(|&end| end <= out.len())
        else {
            return Err(DiffError::IndexOutOfRange {
                kind: EditKind::Delete,
                index: op.index,
                len: out.len(),
            });
        };
        if out[op.index..end] != op.run[..] {
            return Err(DiffError::RunMismatch { index: op.index });
        }
        out.drain(op.index..end);
    }

    for op in script.insertions() {
        if op.index > out.len() {
            return Err(DiffError::IndexOutOfRange {
                kind: EditKind::Insert,
                index: op.index,
                len: out.len(),
            });
        }
        out.splice(op.index..op.index, op.run.iter().cloned());
    }

    Ok(out)
}

/// Invert a script so that applying it to the new sequence yields the old.
///
/// Former inserts become deletes and are listed first; former deletes become
/// inserts. Indices are unchanged: an insert index already refers to the new
/// sequence, and a delete index to the old one.
pub fn reverse_changes<T: Clone>(script: &EditScript<T>) -> EditScript<T> {
    let flip = |op: &EditOp<T>| EditOp {
        kind: op.kind.inverse(),
        index: op.index,
        run: op.run.clone(),
    };
    let ops: Vec<EditOp<T>> = script
        .insertions()
        .map(flip)
        .chain(script.deletions().map(flip))
        .collect();
    EditScript::from(ops)
}
