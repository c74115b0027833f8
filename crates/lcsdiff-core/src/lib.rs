//! LCS-anchored diffing for ordered sequences.
//!
//! Computes an edit script of grouped insertions and deletions that turns an
//! old sequence into a new one, using the longest common subsequence as the
//! set of unchanged elements. The pipeline runs in three strictly ordered
//! stages: [`LcsGrid`] construction, LCS extraction by backtracking, and run
//! grouping against both inputs.
//!
//! # Key Types
//!
//! - [`LcsGrid`] / [`Direction`] -- Dynamic-programming length and backtrack tables
//! - [`EditScript`] / [`EditOp`] / [`EditKind`] -- Ordered delete-then-insert operations
//! - [`TextEdit`] / [`Granularity`] -- Text specialization indexed by char offset
//! - [`DiffLimits`] -- Grid size ceiling for the fallible entry points

pub mod apply;
pub mod diff;
pub mod edit;
pub mod error;
pub mod grid;
pub mod lcs;
pub mod text;

pub use apply::{apply_changes, reverse_changes};
pub use diff::{compute_changes, generate_changes, try_compute_changes, DiffLimits};
pub use edit::{EditKind, EditOp, EditScript};
pub use error::{DiffError, DiffResult};
pub use grid::{Direction, LcsGrid};
pub use lcs::{extract_lcs, longest_common_subsequence};
pub use text::{
    apply_text, diff_lines, diff_text, reverse_text, try_diff_text, Granularity, TextEdit,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<LcsGrid>();
        assert_send_sync::<Direction>();
        assert_send_sync::<EditKind>();
        assert_send_sync::<EditOp<char>>();
        assert_send_sync::<EditScript<char>>();
        assert_send_sync::<EditScript<&str>>();
        assert_send_sync::<TextEdit>();
        assert_send_sync::<Granularity>();
        assert_send_sync::<DiffLimits>();
        assert_send_sync::<DiffError>();
    }

    #[test]
    fn independent_diffs_run_on_separate_threads() {
        let handles: Vec<_> = [("ABCBDAB", "BDCABA"), ("kitten", "sitting")]
            .into_iter()
            .map(|(old, new)| std::thread::spawn(move || (diff_text(old, new), diff_text(old, new))))
            .collect();
        for handle in handles {
            let (first, second) = handle.join().unwrap();
            assert_eq!(first, second);
        }
    }
}
