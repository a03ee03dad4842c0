//! Diff engine and supporting value types
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `diff`: Line differ, hunk builder, file and tree comparators, sameness
//!   detection and result formatting
//! - `objects`: Digests, package references, snapshots and image layers

pub mod core;
pub mod diff;
pub mod objects;
