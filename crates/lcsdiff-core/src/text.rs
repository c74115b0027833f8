//! Text diffs with string runs.
//!
//! Every [`TextEdit`] index is a char offset (Unicode scalar values), whatever
//! granularity produced it. A line-level diff groups whole lines but still
//! reports where each run starts in chars, so one set of apply and reverse
//! functions serves both granularities.

use serde::{Deserialize, Serialize};

use crate::apply::{apply_changes, reverse_changes};
use crate::diff::{compute_changes, try_compute_changes, DiffLimits};
use crate::edit::{EditKind, EditOp, EditScript};
use crate::error::DiffResult;

/// The unit a text diff compares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One element per char.
    #[default]
    Chars,
    /// One element per line, terminator included.
    Lines,
}

/// An edit over text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextEdit {
    pub kind: EditKind,
    /// Char offset into the old text (delete) or the new text (insert).
    pub index: usize,
    pub text: String,
}

impl TextEdit {
    pub fn delete(index: usize, text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Delete,
            index,
            text: text.into(),
        }
    }

    pub fn insert(index: usize, text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            index,
            text: text.into(),
        }
    }
}

impl From<EditOp<char>> for TextEdit {
    fn from(op: EditOp<char>) -> Self {
        Self {
            kind: op.kind,
            index: op.index,
            text: op.run.into_iter().collect(),
        }
    }
}

impl From<&TextEdit> for EditOp<char> {
    fn from(edit: &TextEdit) -> Self {
        EditOp {
            kind: edit.kind,
            index: edit.index,
            run: edit.text.chars().collect(),
        }
    }
}

/// Char-level diff of two strings.
pub fn diff_text(old: &str, new: &str) -> Vec<TextEdit> {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    compute_changes(&old, &new)
        .into_iter()
        .map(TextEdit::from)
        .collect()
}

/// Line-level diff of two strings.
pub fn diff_lines(old: &str, new: &str) -> Vec<TextEdit> {
    let old_lines: Vec<&str> = old.split_inclusive('\n').collect();
    let new_lines: Vec<&str> = new.split_inclusive('\n').collect();
    let script = compute_changes(&old_lines, &new_lines);
    lines_to_text(&old_lines, &new_lines, script)
}

/// Diff at the requested granularity, bounded by `limits`.
pub fn try_diff_text(
    old: &str,
    new: &str,
    granularity: Granularity,
    limits: &DiffLimits,
) -> DiffResult<Vec<TextEdit>> {
    match granularity {
        Granularity::Chars => {
            let old: Vec<char> = old.chars().collect();
            let new: Vec<char> = new.chars().collect();
            let script = try_compute_changes(&old, &new, limits)?;
            Ok(script.into_iter().map(TextEdit::from).collect())
        }
        Granularity::Lines => {
            let old_lines: Vec<&str> = old.split_inclusive('\n').collect();
            let new_lines: Vec<&str> = new.split_inclusive('\n').collect();
            let script = try_compute_changes(&old_lines, &new_lines, limits)?;
            Ok(lines_to_text(&old_lines, &new_lines, script))
        }
    }
}

/// Apply text edits to `base`.
pub fn apply_text(base: &str, edits: &[TextEdit]) -> DiffResult<String> {
    let base: Vec<char> = base.chars().collect();
    let script = to_char_script(edits);
    Ok(apply_changes(&base, &script)?.into_iter().collect())
}

/// Invert text edits so they turn the new text back into the old.
pub fn reverse_text(edits: &[TextEdit]) -> Vec<TextEdit> {
    reverse_changes(&to_char_script(edits))
        .into_iter()
        .map(TextEdit::from)
        .collect()
}

fn to_char_script(edits: &[TextEdit]) -> EditScript<char> {
    EditScript::from(edits.iter().map(EditOp::from).collect::<Vec<_>>())
}

fn lines_to_text(old_lines: &[&str], new_lines: &[&str], script: EditScript<&str>) -> Vec<TextEdit> {
    let old_offsets = char_offsets(old_lines);
    let new_offsets = char_offsets(new_lines);
    script
        .into_iter()
        .map(|op| {
            let offsets = match op.kind {
                EditKind::Delete => &old_offsets,
                EditKind::Insert => &new_offsets,
            };
            TextEdit {
                kind: op.kind,
                index: offsets[op.index],
                text: op.run.concat(),
            }
        })
        .collect()
}

// Char offset at which each line starts, plus one trailing entry for the end.
fn char_offsets(lines: &[&str]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(lines.len() + 1);
    let mut total = 0;
    offsets.push(total);
    for line in lines {
        total += line.chars().count();
        offsets.push(total);
    }
    offsets
}
