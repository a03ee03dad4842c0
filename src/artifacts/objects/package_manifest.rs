use crate::artifacts::objects::package_ref::PackageRef;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

pub const MANIFEST_FILE: &str = "snip.json";

/// The identifying part of a package's `snip.json`
///
/// Only name and version are read; the rest of the manifest is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl PackageManifest {
    pub fn read(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to find manifest {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }

    /// Reference of the build this manifest describes: `name:version`
    pub fn build_ref(&self) -> anyhow::Result<PackageRef> {
        if self.name.is_empty() || self.version.is_empty() {
            anyhow::bail!("{MANIFEST_FILE} must have name and version fields");
        }

        Ok(PackageRef::Local(format!("{}:{}", self.name, self.version)))
    }
}
