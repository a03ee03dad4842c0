//! Package value types
//!
//! - **Digest**: `sha256:<hex>` fingerprint of a blob or file
//! - **PackageRef**: what a comparison side points at (working tree, local
//!   build, published image)
//! - **Snapshot**: a materialized directory holding one side's files
//! - **Layer**: a packaged tar archive, optionally gzip-compressed
//! - **PackageManifest**: name and version read from a package's `snip.json`
//! - **TreePath**: relative file path ordered by its bytes

pub mod digest;
pub mod layer;
pub mod package_manifest;
pub mod package_ref;
pub mod snapshot;
pub mod tree_path;

/// Algorithm prefix used by every digest this crate produces or accepts
pub const DIGEST_ALGORITHM: &str = "sha256";

/// Length of a SHA-256 hash in hexadecimal format
pub const DIGEST_HEX_LENGTH: usize = 64;
