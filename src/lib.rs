//! snipdiff: content comparison for snippet packages
//!
//! Snippet packages are published to container registries as single-layer
//! images. This crate answers one question about two snapshots of a package
//! (a working tree, a local build, or a published image): are they the same,
//! and if not, what changed?
//!
//! - `areas`: storage areas a comparison reads from (working trees, the local
//!   package cache, the registry mirror) and the session tying them together
//! - `artifacts`: the diff engine itself and the value types it works with
//! - `commands`: user-facing operations built on top of the engine

pub mod areas;
pub mod artifacts;
pub mod commands;
