//! Edit operations and the ordered script that carries them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an operation removes a run from the old sequence or adds one from
/// the new sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Insert,
    Delete,
}

impl EditKind {
    /// The single-letter tag used in text output and on the wire.
    pub fn tag(self) -> char {
        match self {
            EditKind::Insert => 'I',
            EditKind::Delete => 'D',
        }
    }

    /// Parse a single-letter tag.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'I' => Some(EditKind::Insert),
            'D' => Some(EditKind::Delete),
            _ => None,
        }
    }

    /// The opposite kind.
    pub fn inverse(self) -> Self {
        match self {
            EditKind::Insert => EditKind::Delete,
            EditKind::Delete => EditKind::Insert,
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditKind::Insert => write!(f, "insert"),
            EditKind::Delete => write!(f, "delete"),
        }
    }
}

/// A single grouped edit.
///
/// `index` is the position in the old sequence for a [`EditKind::Delete`] and
/// in the new sequence for an [`EditKind::Insert`]. `run` always holds at least
/// one element when produced by the diff generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditOp<T> {
    pub kind: EditKind,
    pub index: usize,
    pub run: Vec<T>,
}

impl<T> EditOp<T> {
    /// Create a delete of `run` starting at `index` in the old sequence.
    pub fn delete(index: usize, run: Vec<T>) -> Self {
        Self {
            kind: EditKind::Delete,
            index,
            run,
        }
    }

    /// Create an insert of `run` starting at `index` in the new sequence.
    pub fn insert(index: usize, run: Vec<T>) -> Self {
        Self {
            kind: EditKind::Insert,
            index,
            run,
        }
    }

    /// Number of elements covered by the run.
    pub fn len(&self) -> usize {
        self.run.len()
    }

    /// Returns `true` if the run is empty.
    pub fn is_empty(&self) -> bool {
        self.run.is_empty()
    }

    /// One past the last source index covered by the run, saturating at
    /// `usize::MAX`.
    pub fn end(&self) -> usize {
        self.index.saturating_add(self.run.len())
    }
}

/// An ordered edit script: every delete (by old index) followed by every
/// insert (by new index).
///
/// Insert indices refer to the new sequence and are not shifted to account
/// for the deletes that precede them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript<T> {
    ops: Vec<EditOp<T>>,
}

impl<T> Default for EditScript<T> {
    fn default() -> Self {
        Self { ops: Vec::new() }
    }
}

impl<T> EditScript<T> {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two sequences were identical.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Operations in script order.
    pub fn ops(&self) -> &[EditOp<T>] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp<T>> {
        self.ops.iter()
    }

    /// Delete operations, in script order.
    pub fn deletions(&self) -> impl DoubleEndedIterator<Item = &EditOp<T>> {
        self.ops.iter().filter(|op| op.kind == EditKind::Delete)
    }

    /// Insert operations, in script order.
    pub fn insertions(&self) -> impl DoubleEndedIterator<Item = &EditOp<T>> {
        self.ops.iter().filter(|op| op.kind == EditKind::Insert)
    }

    /// Total number of elements removed from the old sequence.
    pub fn deleted_len(&self) -> usize {
        self.deletions().map(EditOp::len).sum()
    }

    /// Total number of elements added from the new sequence.
    pub fn inserted_len(&self) -> usize {
        self.insertions().map(EditOp::len).sum()
    }

    /// Consume the script, returning its operations.
    pub fn into_ops(self) -> Vec<EditOp<T>> {
        self.ops
    }

    pub(crate) fn push(&mut self, op: EditOp<T>) {
        self.ops.push(op);
    }
}

impl<T> From<Vec<EditOp<T>>> for EditScript<T> {
    fn from(ops: Vec<EditOp<T>>) -> Self {
        Self { ops }
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = EditOp<T>;
    type IntoIter = std::vec::IntoIter<EditOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a EditOp<T>;
    type IntoIter = std::slice::Iter<'a, EditOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_roundtrip() {
        for kind in [EditKind::Insert, EditKind::Delete] {
            assert_eq!(EditKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(EditKind::from_tag('X'), None);
    }

    #[test]
    fn kind_inverse() {
        assert_eq!(EditKind::Insert.inverse(), EditKind::Delete);
        assert_eq!(EditKind::Delete.inverse(), EditKind::Insert);
    }

    #[test]
    fn op_extent() {
        let op = EditOp::delete(4, vec!['a', 'b', 'c']);
        assert_eq!(op.len(), 3);
        assert_eq!(op.end(), 7);
        assert!(!op.is_empty());
    }

    #[test]
    fn op_extent_saturates() {
        let op = EditOp::insert(usize::MAX, vec!['a']);
        assert_eq!(op.end(), usize::MAX);
    }

    #[test]
    fn kind_display() {
        assert_eq!(EditKind::Insert.to_string(), "insert");
        assert_eq!(EditKind::Delete.to_string(), "delete");
    }

    #[test]
    fn script_counts() {
        let script = EditScript::from(vec![
            EditOp::delete(0, vec![1, 2]),
            EditOp::delete(5, vec![3]),
            EditOp::insert(1, vec![7, 8, 9]),
        ]);
        assert_eq!(script.len(), 3);
        assert_eq!(script.deletions().count(), 2);
        assert_eq!(script.insertions().count(), 1);
        assert_eq!(script.deleted_len(), 3);
        assert_eq!(script.inserted_len(), 3);
    }

    #[test]
    fn serializes_with_named_fields() {
        let script = EditScript::from(vec![EditOp::insert(2, vec!['x'])]);
        let json = serde_json::to_string(&script).unwrap();
        assert_eq!(json, r#"[{"kind":"insert","index":2,"run":["x"]}]"#);

        let back: EditScript<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, script);
    }
}
