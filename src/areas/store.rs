use crate::areas::cache::PackageCache;
use crate::areas::registry::RegistryMirror;
use crate::artifacts::diff::sameness::{DigestLookup, Materialize};
use crate::artifacts::objects::digest::Digest;
use crate::artifacts::objects::package_ref::PackageRef;
use crate::artifacts::objects::snapshot::Snapshot;
use derive_new::new;

/// Resolves any kind of package reference to a snapshot or a digest
#[derive(Debug, new)]
pub struct PackageStore {
    cache: PackageCache,
    registry: RegistryMirror,
}

impl PackageStore {
    pub fn cache(&self) -> &PackageCache {
        &self.cache
    }

    pub fn registry(&self) -> &RegistryMirror {
        &self.registry
    }
}

impl Materialize for PackageStore {
    fn materialize(&self, package: &PackageRef) -> anyhow::Result<Snapshot> {
        match package {
            PackageRef::WorkingDir(path) => {
                if !path.is_dir() {
                    anyhow::bail!("{} is not a directory", path.display());
                }
                Ok(Snapshot::WorkingTree(path.clone()))
            }
            PackageRef::Local(_) => self.cache.materialize(package),
            PackageRef::Remote(_) => self.registry.materialize(package),
        }
    }
}

impl DigestLookup for PackageStore {
    fn local_digest(&self, package: &PackageRef) -> anyhow::Result<Digest> {
        self.cache.archive_digest(package)
    }

    fn remote_digest(&self, package: &PackageRef) -> anyhow::Result<Digest> {
        self.registry.layer_digest(package)
    }
}
