use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Allowed shape of a package reference: `[registry[:port]/][namespace/]name[:tag]`
pub const PACKAGE_REF_REGEX: &str = r"^[A-Za-z0-9][A-Za-z0-9._\-]*(:[0-9]+)?(/[A-Za-z0-9][A-Za-z0-9._\-]*)*(:[A-Za-z0-9._\-]+)?$";

static PACKAGE_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PACKAGE_REF_REGEX).expect("package reference pattern is valid"));

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackageRef {
    /// A directory on disk, compared in place with the default excludes
    WorkingDir(PathBuf),
    /// A build in the local package cache, e.g. `utils:1.0.0`
    Local(String),
    /// A published image, e.g. `docker.io/org/utils:1.0.0`
    Remote(String),
}

impl PackageRef {
    /// Resolve a local argument: an existing directory is a working tree,
    /// anything else must be a valid build reference
    pub fn parse_local(raw: &str) -> anyhow::Result<Self> {
        let path = Path::new(raw);
        if path.is_dir() {
            return Ok(Self::WorkingDir(path.to_path_buf()));
        }

        Ok(Self::Local(Self::validate(raw)?))
    }

    pub fn parse_remote(raw: &str) -> anyhow::Result<Self> {
        Ok(Self::Remote(Self::validate(raw)?))
    }

    fn validate(raw: &str) -> anyhow::Result<String> {
        if raw.is_empty() {
            anyhow::bail!("package reference cannot be empty");
        }

        if !PACKAGE_REF_PATTERN.is_match(raw) {
            anyhow::bail!("invalid package reference: {}", raw);
        }

        Ok(raw.to_string())
    }

    /// Filesystem-safe key under which caches store this reference
    ///
    /// `/` and `:` both become `_`, so `docker.io/org/utils:1.0.0` is stored
    /// as `docker.io_org_utils_1.0.0`.
    pub fn cache_key(&self) -> String {
        self.as_str().replace(['/', ':'], "_")
    }

    pub fn as_str(&self) -> &str {
        match self {
            PackageRef::WorkingDir(path) => path.to_str().unwrap_or_default(),
            PackageRef::Local(name) | PackageRef::Remote(name) => name,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, PackageRef::Remote(_))
    }
}

impl std::fmt::Display for PackageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageRef::WorkingDir(path) => write!(f, "{}", path.display()),
            PackageRef::Local(name) | PackageRef::Remote(name) => write!(f, "{name}"),
        }
    }
}
