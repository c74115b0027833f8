//! Error types for the diff crate.

use crate::edit::EditKind;

/// Errors that can occur while computing or applying an edit script.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The grid would exceed the configured cell ceiling.
    #[error("grid too large: {cells} cells (max {max})")]
    GridTooLarge { cells: usize, max: usize },

    /// `rows * cols` does not fit in `usize`.
    #[error("grid dimensions overflow: {rows} x {cols}")]
    GridOverflow { rows: usize, cols: usize },

    /// The allocator refused the grid storage.
    #[error("failed to allocate grid of {cells} cells")]
    AllocationFailed { cells: usize },

    /// An operation points past the end of the sequence it is applied to.
    #[error("{kind} at index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        kind: EditKind,
        index: usize,
        len: usize,
    },

    /// A delete run does not match the elements found at its index.
    #[error("delete run at index {index} does not match base content")]
    RunMismatch { index: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
