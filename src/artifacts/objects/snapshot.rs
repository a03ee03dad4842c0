use crate::areas::workspace::Workspace;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A materialized package: a real directory holding one side's files
///
/// Working trees and local builds are compared in place. Packaged archives and
/// published images are unpacked into a temporary directory that is removed
/// when the snapshot is dropped.
#[derive(Debug)]
pub enum Snapshot {
    /// A developer's checkout, walked with the default excludes
    WorkingTree(PathBuf),
    Borrowed(PathBuf),
    Extracted(TempDir),
}

impl Snapshot {
    pub fn path(&self) -> &Path {
        match self {
            Snapshot::WorkingTree(path) | Snapshot::Borrowed(path) => path,
            Snapshot::Extracted(dir) => dir.path(),
        }
    }

    pub fn workspace(&self) -> Workspace {
        match self {
            Snapshot::WorkingTree(path) => Workspace::working_tree(path.as_path().into()),
            Snapshot::Borrowed(_) | Snapshot::Extracted(_) => Workspace::new(self.path().into()),
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, Snapshot::Extracted(_))
    }
}
