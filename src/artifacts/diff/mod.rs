//! Content comparison engine
//!
//! Leaf-first:
//!
//! - `binary`: NUL-byte sniffing to keep binary files out of line diffs
//! - `edit`: Keep/insert/delete operations making up an edit script
//! - `lcs`: Longest-common-subsequence line differ
//! - `hunk`: Grouping of an edit script into context-padded hunks
//! - `file_diff`: Comparison of one file present on both sides
//! - `tree_diff`: Comparison of two whole trees
//! - `sameness`: Digest fast path in front of the tree comparison for remote snapshots
//! - `format`: Unified and summary renderings of a comparison result
//!
//! Every comparison is synchronous and works on already materialized
//! directories; nothing is cached between calls.

pub mod binary;
pub mod edit;
pub mod file_diff;
pub mod format;
pub mod hunk;
pub mod lcs;
pub mod sameness;
pub mod tree_diff;

/// Lines of unchanged context shown around each change
pub const DEFAULT_CONTEXT: usize = 3;
