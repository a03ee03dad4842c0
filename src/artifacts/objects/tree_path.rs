use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Path of a file relative to the root of a tree
///
/// Equality, hashing and ordering all use the raw bytes of the path, so
/// `a-b/x` sorts before `a/x` the way a plain string sort orders them.
#[derive(Debug, Clone)]
pub struct TreePath(PathBuf);

impl TreePath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_os_str().as_encoded_bytes()
    }
}

impl PartialEq for TreePath {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for TreePath {}

impl Hash for TreePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialOrd for TreePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TreePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Deref for TreePath {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for TreePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for TreePath {
    fn from(path: PathBuf) -> Self {
        TreePath(path)
    }
}

impl From<&str> for TreePath {
    fn from(path: &str) -> Self {
        TreePath(PathBuf::from(path))
    }
}
