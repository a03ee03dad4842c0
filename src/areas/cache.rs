use crate::artifacts::objects::digest::Digest;
use crate::artifacts::objects::layer::Layer;
use crate::artifacts::objects::package_ref::PackageRef;
use crate::artifacts::objects::snapshot::Snapshot;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub const METADATA_FILE: &str = ".snip-metadata.json";
pub const IMAGES_DIR: &str = "images";
pub const LAYER_FILE: &str = "layer.tar";

/// Local package cache
///
/// ```text
/// <root>/<key>/                   build output, marked by .snip-metadata.json
/// <root>/images/<key>/layer.tar   archive packaged for a push or pulled from a registry
/// ```
///
/// `<key>` is the sanitized package reference.
#[derive(Debug)]
pub struct PackageCache {
    path: Box<Path>,
}

impl PackageCache {
    pub fn new(path: Box<Path>) -> Self {
        PackageCache { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn build_dir(&self, package: &PackageRef) -> PathBuf {
        self.path.join(package.cache_key())
    }

    pub fn archive_path(&self, package: &PackageRef) -> PathBuf {
        self.path
            .join(IMAGES_DIR)
            .join(package.cache_key())
            .join(LAYER_FILE)
    }

    pub fn has_build(&self, package: &PackageRef) -> bool {
        self.build_dir(package).join(METADATA_FILE).is_file()
    }

    pub fn has_archive(&self, package: &PackageRef) -> bool {
        self.archive_path(package).is_file()
    }

    /// Local builds are compared in place; archives are unpacked to a temporary directory
    pub fn materialize(&self, package: &PackageRef) -> anyhow::Result<Snapshot> {
        if self.has_build(package) {
            tracing::debug!(%package, "using local build in place");
            return Ok(Snapshot::Borrowed(self.build_dir(package)));
        }

        if !self.has_archive(package) {
            anyhow::bail!("local build not found: {package}");
        }

        let layer = Layer::read(&self.archive_path(package))?;
        let dir = tempfile::Builder::new()
            .prefix("snipdiff-")
            .tempdir()
            .context("Failed to create temp dir")?;
        layer
            .unpack_into(dir.path())
            .with_context(|| format!("Failed to extract {package}"))?;

        Ok(Snapshot::Extracted(dir))
    }

    /// SHA-256 of the archive stored for `package`
    pub fn archive_digest(&self, package: &PackageRef) -> anyhow::Result<Digest> {
        let archive = self.archive_path(package);
        if !archive.is_file() {
            anyhow::bail!("no {LAYER_FILE} for {package}");
        }

        Digest::of_file(&archive)
    }
}
