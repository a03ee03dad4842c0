use crate::artifacts::objects::digest::Digest;
use crate::artifacts::objects::layer::Layer;
use crate::artifacts::objects::package_ref::PackageRef;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::artifacts::objects::DIGEST_ALGORITHM;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";
pub const BLOBS_DIR: &str = "blobs";

/// Image manifest, Docker v2 schema 2 / OCI shape
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageManifest {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub layers: Vec<LayerDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDescriptor {
    #[serde(default)]
    pub media_type: Option<String>,
    pub digest: String,
    #[serde(default)]
    pub size: u64,
}

/// Directory mirror of a registry
///
/// ```text
/// <root>/<key>/manifest.json       manifest published for a reference
/// <root>/blobs/sha256/<hex>        content-addressed layer blobs
/// ```
///
/// A snippet image has a single layer; its digest identifies the snapshot.
#[derive(Debug)]
pub struct RegistryMirror {
    path: Box<Path>,
}

impl RegistryMirror {
    pub fn new(path: Box<Path>) -> Self {
        RegistryMirror { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifest_path(&self, package: &PackageRef) -> PathBuf {
        self.path.join(package.cache_key()).join(MANIFEST_FILE)
    }

    pub fn blob_path(&self, digest: &Digest) -> PathBuf {
        self.path
            .join(BLOBS_DIR)
            .join(DIGEST_ALGORITHM)
            .join(digest.hex())
    }

    pub fn read_manifest(&self, package: &PackageRef) -> anyhow::Result<ImageManifest> {
        let path = self.manifest_path(package);
        if !path.is_file() {
            anyhow::bail!("remote image not found: {package}");
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to decode manifest")
    }

    /// Digest of the first layer listed in the manifest of `package`
    pub fn layer_digest(&self, package: &PackageRef) -> anyhow::Result<Digest> {
        let manifest = self.read_manifest(package)?;
        let layer = manifest
            .layers
            .first()
            .ok_or_else(|| anyhow::anyhow!("no layers found in manifest"))?;

        Digest::try_parse(&layer.digest)
            .with_context(|| format!("invalid layer digest {}", layer.digest))
    }

    /// Read the layer blob of `package`, checking it against its digest
    pub fn fetch_layer(&self, package: &PackageRef) -> anyhow::Result<Layer> {
        let digest = self.layer_digest(package)?;
        let layer = Layer::read(&self.blob_path(&digest))
            .with_context(|| format!("Failed to pull {package}"))?;

        let actual = layer.digest();
        if actual != digest {
            anyhow::bail!(
                "blob {} is corrupt: content hashes to {}",
                digest.to_short(),
                actual.to_short()
            );
        }

        Ok(layer)
    }

    pub fn materialize(&self, package: &PackageRef) -> anyhow::Result<Snapshot> {
        let layer = self.fetch_layer(package)?;
        let dir = tempfile::Builder::new()
            .prefix("snipdiff-remote-")
            .tempdir()
            .context("Failed to create temp dir")?;

        let files = layer
            .unpack_into(dir.path())
            .with_context(|| format!("Failed to extract remote {package}"))?;
        tracing::debug!(%package, files, "pulled remote snapshot");

        Ok(Snapshot::Extracted(dir))
    }

    /// Store `layer` and a manifest pointing at it, as a push would
    pub fn publish(&self, package: &PackageRef, layer: &[u8]) -> anyhow::Result<Digest> {
        let digest = Digest::of_bytes(layer);
        let blob = self.blob_path(&digest);
        let manifest = self.manifest_path(package);

        for path in [&blob, &manifest] {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        std::fs::write(&blob, layer)
            .with_context(|| format!("Failed to write {}", blob.display()))?;

        let document = serde_json::json!({
            "schemaVersion": 2,
            "mediaType": "application/vnd.docker.distribution.manifest.v2+json",
            "layers": [{
                "mediaType": "application/vnd.docker.image.rootfs.diff.tar",
                "digest": digest.to_string(),
                "size": layer.len(),
            }],
        });
        std::fs::write(&manifest, serde_json::to_vec_pretty(&document)?)
            .with_context(|| format!("Failed to write {}", manifest.display()))?;

        Ok(digest)
    }
}
