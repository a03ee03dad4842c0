use crate::artifacts::diff::tree_diff::{ComparisonResult, TreeDiff};
use crate::artifacts::objects::digest::Digest;
use crate::artifacts::objects::package_ref::PackageRef;
use crate::artifacts::objects::snapshot::Snapshot;
use anyhow::Context;

/// Turns a package reference into a directory that can be walked
pub trait Materialize {
    fn materialize(&self, package: &PackageRef) -> anyhow::Result<Snapshot>;
}

/// Digests recorded for a snapshot on each side of a push
pub trait DigestLookup {
    /// Digest of the archive packaged locally for `package`
    fn local_digest(&self, package: &PackageRef) -> anyhow::Result<Digest>;

    /// Digest the registry reports for `package`
    fn remote_digest(&self, package: &PackageRef) -> anyhow::Result<Digest>;
}

#[derive(Debug)]
pub enum DigestVerdict {
    Match(Digest),
    Mismatch { local: Digest, remote: Digest },
    Unavailable(anyhow::Error),
}

/// Decides whether a local snapshot and a remote snapshot hold the same content
///
/// The digest check only ever proves sameness. Archives are not packaged
/// reproducibly, so a digest mismatch can hide identical content and always
/// falls through to a full tree comparison.
pub struct SamenessDetector<'s, S> {
    store: &'s S,
    tree_diff: TreeDiff,
}

impl<'s, S: Materialize + DigestLookup> SamenessDetector<'s, S> {
    pub fn new(store: &'s S, tree_diff: TreeDiff) -> Self {
        SamenessDetector { store, tree_diff }
    }

    pub fn compare_with_remote(
        &self,
        local: &PackageRef,
        remote: &PackageRef,
    ) -> anyhow::Result<ComparisonResult> {
        match self.check_digests(remote) {
            DigestVerdict::Match(digest) => {
                tracing::info!(
                    %remote,
                    digest = %digest.to_short(),
                    "digests match, skipping content comparison"
                );
                return Ok(ComparisonResult::identical());
            }
            DigestVerdict::Mismatch { local: ours, remote: theirs } => {
                tracing::info!(
                    %remote,
                    local = %ours.to_short(),
                    remote_digest = %theirs.to_short(),
                    "digests differ, comparing content"
                );
            }
            DigestVerdict::Unavailable(err) => {
                tracing::warn!(
                    %remote,
                    error = %format!("{err:#}"),
                    "digest check unavailable, comparing content"
                );
            }
        }

        let local_snapshot = self
            .store
            .materialize(local)
            .with_context(|| format!("Failed to extract local ref {local}"))?;
        let remote_snapshot = self
            .store
            .materialize(remote)
            .with_context(|| format!("Failed to extract remote ref {remote}"))?;

        self.tree_diff
            .compare_snapshots(&local_snapshot, &remote_snapshot)
    }

    /// Compare the archive packaged for `remote` with the one the registry holds
    ///
    /// The local archive is recorded under the push destination, hence the
    /// remote reference on both lookups.
    pub fn check_digests(&self, remote: &PackageRef) -> DigestVerdict {
        let digests = self
            .store
            .local_digest(remote)
            .context("Failed to get local archive digest")
            .and_then(|local| {
                self.store
                    .remote_digest(remote)
                    .context("Failed to fetch remote layer digest")
                    .map(|remote| (local, remote))
            });

        match digests {
            Ok((local, remote)) if local == remote => DigestVerdict::Match(local),
            Ok((local, remote)) => DigestVerdict::Mismatch { local, remote },
            Err(err) => DigestVerdict::Unavailable(err),
        }
    }
}
