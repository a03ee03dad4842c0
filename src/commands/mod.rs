//! Command implementations
//!
//! Each command is an `impl Session` block writing its output through the
//! session's writer.

pub mod porcelain;
