use crate::areas::session::Session;
use crate::artifacts::diff::DEFAULT_CONTEXT;
use crate::artifacts::diff::format::{Formatter, RenderMode};
use crate::artifacts::diff::sameness::{Materialize, SamenessDetector};
use crate::artifacts::diff::tree_diff::{ChangeFilter, ComparisonResult, TreeDiff};
use crate::artifacts::objects::package_manifest::PackageManifest;
use crate::artifacts::objects::package_ref::PackageRef;
use anyhow::Context;
use std::io::Write;

pub const USAGE: &str = "usage: snipdiff diff [--remote] [--summary] [<ref-a>] [<ref-b>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub refs: Vec<String>,
    pub remote: bool,
    pub mode: RenderMode,
    pub context: usize,
    pub filter: ChangeFilter,
    pub styled: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            refs: Vec::new(),
            remote: false,
            mode: RenderMode::Unified,
            context: DEFAULT_CONTEXT,
            filter: ChangeFilter::all(),
            styled: false,
        }
    }
}

impl Session {
    /// Compare two package snapshots and write the rendered result
    ///
    /// | refs       | without `--remote`            | with `--remote`            |
    /// |------------|-------------------------------|----------------------------|
    /// | none       | build of `snip.json` vs cwd   | usage error                |
    /// | `a`        | `a` vs cwd                    | build of `snip.json` vs `a`|
    /// | `a` `b`    | `a` vs `b`                    | build `a` vs remote `b`    |
    pub fn diff(&self, options: &DiffOptions) -> anyhow::Result<()> {
        let tree_diff = TreeDiff::new(options.context);

        let result = if options.remote {
            let (local, remote) = self.resolve_remote_refs(&options.refs)?;
            writeln!(self.writer(), "Comparing local {local} vs remote {remote}...")?;

            SamenessDetector::new(self.store(), tree_diff)
                .compare_with_remote(&local, &remote)
                .context("diff failed")?
        } else {
            let (left, right) = self.resolve_local_refs(&options.refs)?;
            self.compare_local(&left, &right, tree_diff)?
        };

        let formatter = Formatter::new(options.mode, options.filter, options.styled);
        write!(self.writer(), "{}", formatter.render(&result))?;
        self.writer().flush()?;

        Ok(())
    }

    fn compare_local(
        &self,
        left: &PackageRef,
        right: &PackageRef,
        tree_diff: TreeDiff,
    ) -> anyhow::Result<ComparisonResult> {
        let left_snapshot = self
            .store()
            .materialize(left)
            .with_context(|| format!("Failed to extract {left}"))?;
        let right_snapshot = self
            .store()
            .materialize(right)
            .with_context(|| format!("Failed to extract {right}"))?;

        tree_diff
            .compare_snapshots(&left_snapshot, &right_snapshot)
            .context("diff failed")
    }

    /// Left is the older side: a build, compared against the working tree by default
    fn resolve_local_refs(&self, refs: &[String]) -> anyhow::Result<(PackageRef, PackageRef)> {
        let working_dir = PackageRef::WorkingDir(self.path().to_path_buf());

        match refs {
            [] => Ok((self.manifest_build_ref()?, working_dir)),
            [a] => Ok((PackageRef::parse_local(a)?, working_dir)),
            [a, b] => Ok((PackageRef::parse_local(a)?, PackageRef::parse_local(b)?)),
            _ => anyhow::bail!(USAGE),
        }
    }

    fn resolve_remote_refs(&self, refs: &[String]) -> anyhow::Result<(PackageRef, PackageRef)> {
        match refs {
            [remote] => Ok((self.manifest_build_ref()?, PackageRef::parse_remote(remote)?)),
            [local, remote] => Ok((
                PackageRef::parse_local(local)?,
                PackageRef::parse_remote(remote)?,
            )),
            _ => anyhow::bail!(USAGE),
        }
    }

    fn manifest_build_ref(&self) -> anyhow::Result<PackageRef> {
        PackageManifest::read(self.path())?.build_ref()
    }
}
