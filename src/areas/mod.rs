//! Filesystem-backed areas the diff engine reads from
//!
//! - `workspace`: Walking and reading a materialized directory tree
//! - `cache`: Local builds and packaged archives
//! - `registry`: Directory mirror of a registry (manifests and layer blobs)
//! - `store`: Dispatch of package references to the cache or the registry
//! - `session`: Output writer and store shared by commands

pub mod cache;
pub mod registry;
pub mod session;
pub mod store;
pub mod workspace;
