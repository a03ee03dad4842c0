//! User-facing commands
//!
//! - `diff`: Compare working trees, local builds and published images

pub mod diff;
