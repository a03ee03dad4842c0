use crate::areas::workspace::Workspace;
use crate::artifacts::diff::DEFAULT_CONTEXT;
use crate::artifacts::diff::file_diff::{FileComparator, FileComparison, FileDiff};
use crate::artifacts::objects::snapshot::Snapshot;
use crate::artifacts::objects::tree_path::TreePath;
use anyhow::Context;
use bitflags::bitflags;
use std::collections::BTreeSet;
use std::path::Path;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ChangeFilter: u32 {
        const ADDED = 0b0001;
        const DELETED = 0b0010;
        const MODIFIED = 0b0100;
    }
}

impl ChangeFilter {
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'D' => filter |= Self::DELETED,
                'M' => filter |= Self::MODIFIED,
                _ => return None,
            }
        }

        Some(filter)
    }
}

impl Default for ChangeFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    Added,
    Deleted,
    Modified,
}

impl ChangeType {
    pub fn matches_filter(&self, filter: ChangeFilter) -> bool {
        match self {
            ChangeType::Added => filter.contains(ChangeFilter::ADDED),
            ChangeType::Deleted => filter.contains(ChangeFilter::DELETED),
            ChangeType::Modified => filter.contains(ChangeFilter::MODIFIED),
        }
    }

    pub fn status_char(&self) -> char {
        match self {
            ChangeType::Added => 'A',
            ChangeType::Deleted => 'D',
            ChangeType::Modified => 'M',
        }
    }
}

pub type PathSet = BTreeSet<TreePath>;

/// Outcome of comparing two trees
///
/// The four path sets partition the union of both trees. Added paths exist
/// only on the right, deleted paths only on the left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    identical: bool,
    only_in_left: PathSet,
    only_in_right: PathSet,
    modified: PathSet,
    unchanged: PathSet,
    file_diffs: Vec<FileDiff>,
}

impl ComparisonResult {
    pub fn new(
        only_in_left: PathSet,
        only_in_right: PathSet,
        modified: PathSet,
        unchanged: PathSet,
        file_diffs: Vec<FileDiff>,
    ) -> Self {
        let identical = only_in_left.is_empty() && only_in_right.is_empty() && modified.is_empty();

        ComparisonResult {
            identical,
            only_in_left,
            only_in_right,
            modified,
            unchanged,
            file_diffs,
        }
    }

    /// A verdict reached without reading any content, so no paths are known
    pub fn identical() -> Self {
        ComparisonResult {
            identical: true,
            ..Default::default()
        }
    }

    pub fn is_identical(&self) -> bool {
        self.identical
    }

    pub fn only_in_left(&self) -> &PathSet {
        &self.only_in_left
    }

    pub fn only_in_right(&self) -> &PathSet {
        &self.only_in_right
    }

    pub fn modified(&self) -> &PathSet {
        &self.modified
    }

    pub fn unchanged(&self) -> &PathSet {
        &self.unchanged
    }

    /// One record per modified path, in the order of `modified`
    pub fn file_diffs(&self) -> &[FileDiff] {
        &self.file_diffs
    }

    pub fn paths(&self, change: ChangeType) -> &PathSet {
        match change {
            ChangeType::Added => &self.only_in_right,
            ChangeType::Deleted => &self.only_in_left,
            ChangeType::Modified => &self.modified,
        }
    }
}

/// Compare two materialized trees with the default hunk context
pub fn compare_trees(left: &Path, right: &Path) -> anyhow::Result<ComparisonResult> {
    TreeDiff::new(DEFAULT_CONTEXT).compare(left, right)
}

#[derive(Debug, Clone, Copy)]
pub struct TreeDiff {
    comparator: FileComparator,
}

impl TreeDiff {
    pub fn new(context: usize) -> Self {
        TreeDiff {
            comparator: FileComparator::new(context),
        }
    }

    /// Compare two directories holding package files only
    pub fn compare(&self, left: &Path, right: &Path) -> anyhow::Result<ComparisonResult> {
        self.compare_workspaces(&Workspace::new(left.into()), &Workspace::new(right.into()))
    }

    /// Compare two materialized snapshots, each walked the way its kind requires
    pub fn compare_snapshots(
        &self,
        left: &Snapshot,
        right: &Snapshot,
    ) -> anyhow::Result<ComparisonResult> {
        self.compare_workspaces(&left.workspace(), &right.workspace())
    }

    pub fn compare_workspaces(
        &self,
        left: &Workspace,
        right: &Workspace,
    ) -> anyhow::Result<ComparisonResult> {
        let left_files = Self::collect(left, "left")?;
        let right_files = Self::collect(right, "right")?;

        let mut modified = PathSet::new();
        let mut unchanged = PathSet::new();
        let mut file_diffs = Vec::new();

        for path in left_files.intersection(&right_files) {
            match self.compare_file(left, right, path)? {
                FileComparison::Unchanged => {
                    unchanged.insert(path.clone());
                }
                FileComparison::Modified(file_diff) => {
                    modified.insert(path.clone());
                    file_diffs.push(file_diff);
                }
            }
        }

        let result = ComparisonResult::new(
            left_files.difference(&right_files).cloned().collect(),
            right_files.difference(&left_files).cloned().collect(),
            modified,
            unchanged,
            file_diffs,
        );
        tracing::debug!(
            identical = result.identical,
            modified = result.modified.len(),
            added = result.only_in_right.len(),
            removed = result.only_in_left.len(),
            unchanged = result.unchanged.len(),
            "compared trees"
        );

        Ok(result)
    }

    fn collect(workspace: &Workspace, side: &str) -> anyhow::Result<PathSet> {
        let files = workspace
            .list_files()
            .with_context(|| format!("Failed to walk {side} tree"))?;

        Ok(files.into_iter().collect())
    }

    fn compare_file(
        &self,
        left: &Workspace,
        right: &Workspace,
        path: &Path,
    ) -> anyhow::Result<FileComparison> {
        let left_bytes = left
            .read_file(path)
            .with_context(|| format!("Failed to read {} from left tree", path.display()))?;
        let right_bytes = right
            .read_file(path)
            .with_context(|| format!("Failed to read {} from right tree", path.display()))?;

        Ok(self.comparator.compare(path, &left_bytes, &right_bytes))
    }
}
