use crate::artifacts::objects::tree_path::TreePath;
use anyhow::Context;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// File names that never take part in a comparison: the package manifest and
/// the two bookkeeping files written by builds and packaging.
pub const EXCLUDED_FILES: phf::Set<&'static str> = phf::phf_set! {
    "snip.json",
    ".snip-metadata.json",
    ".snip-manifest.json",
};

/// Directories a working tree never contributes: version control, dependency
/// caches, virtual environments, build output and editor state.
pub const WORKING_TREE_EXCLUDED_DIRS: phf::Set<&'static str> = phf::phf_set! {
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "venv",
    ".venv",
    "env",
    "__pycache__",
    ".eggs",
    "dist",
    "build",
    "target",
    ".vscode",
    ".idea",
    ".snip",
};

/// Extensions of compiled and swap files left in a working tree
pub const WORKING_TREE_EXCLUDED_EXTENSIONS: phf::Set<&'static str> = phf::phf_set! {
    "pyc",
    "so",
    "dylib",
    "dll",
    "exe",
    "swp",
    "swo",
};

const EGG_INFO_SUFFIX: &str = ".egg-info";
const DS_STORE: &str = ".DS_Store";

/// A materialized directory tree, read-only from the diff engine's point of view
///
/// Snapshots produced by a build or unpacked from a layer hold package files
/// only. A working tree also holds whatever the developer's tools left behind,
/// so it is walked with the default excludes applied.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    working_tree: bool,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace {
            path,
            working_tree: false,
        }
    }

    pub fn working_tree(path: Box<Path>) -> Self {
        Workspace {
            path,
            working_tree: true,
        }
    }

    pub fn is_working_tree(&self) -> bool {
        self.working_tree
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List every file beneath the workspace root, relative to it, sorted
    /// byte-wise
    ///
    /// Directories are not listed (so empty ones are invisible), symlinks are
    /// followed, and bookkeeping files are skipped at any depth. Working trees
    /// also skip the default-excluded directories and files. Any walk error
    /// (unreadable directory, broken symlink, missing root) aborts the listing.
    pub fn list_files(&self) -> anyhow::Result<Vec<TreePath>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.path)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| !self.skips_entry(entry));

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Failed to walk directory {}", self.path.display())
            })?;

            if entry.file_type().is_dir() || Self::is_excluded(entry.path()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.path)
                .with_context(|| {
                    format!(
                        "{} is outside of {}",
                        entry.path().display(),
                        self.path.display()
                    )
                })?
                .to_path_buf();
            files.push(TreePath::from(relative));
        }

        files.sort();
        tracing::debug!(root = %self.path.display(), files = files.len(), "collected tree");

        Ok(files)
    }

    /// Default excludes, checked before descending so excluded directories
    /// are never walked
    fn skips_entry(&self, entry: &DirEntry) -> bool {
        if !self.working_tree || entry.depth() == 0 {
            return false;
        }

        let Some(name) = entry.file_name().to_str() else {
            return false;
        };

        if entry.file_type().is_dir() {
            return WORKING_TREE_EXCLUDED_DIRS.contains(name) || name.ends_with(EGG_INFO_SUFFIX);
        }

        name == DS_STORE
            || Path::new(name)
                .extension()
                .and_then(|extension| extension.to_str())
                .is_some_and(|extension| WORKING_TREE_EXCLUDED_EXTENSIONS.contains(extension))
    }

    pub fn is_excluded(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| EXCLUDED_FILES.contains(name))
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let full_path = self.path.join(file_path);

        std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file {}", full_path.display()))
    }
}
