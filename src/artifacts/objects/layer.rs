use crate::areas::workspace::Workspace;
use crate::artifacts::objects::digest::Digest;
use anyhow::Context;
use derive_new::new;
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A packaged snapshot: the single tar layer of a snippet image
///
/// Locally packaged layers are plain tar. Layers pulled from registries that
/// recompress uploads arrive as gzip; both are accepted.
#[derive(Debug, Clone, new)]
pub struct Layer {
    data: Vec<u8>,
}

impl Layer {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read layer {}", path.display()))?;

        Ok(Self::new(data))
    }

    pub fn digest(&self) -> Digest {
        Digest::of_bytes(&self.data)
    }

    pub fn is_gzip(&self) -> bool {
        self.data.starts_with(&GZIP_MAGIC)
    }

    /// Unpack every file of the layer under `dest`, skipping bookkeeping files
    ///
    /// # Returns
    ///
    /// Number of regular files written
    pub fn unpack_into(&self, dest: &Path) -> anyhow::Result<usize> {
        if self.is_gzip() {
            Self::unpack_archive(GzDecoder::new(self.data.as_slice()), dest)
        } else {
            Self::unpack_archive(self.data.as_slice(), dest)
        }
    }

    fn unpack_archive<R: Read>(reader: R, dest: &Path) -> anyhow::Result<usize> {
        let mut archive = tar::Archive::new(reader);
        let mut unpacked = 0;

        for entry in archive
            .entries()
            .context("Failed to read layer entries")?
        {
            let mut entry = entry.context("Failed to read layer entry")?;
            let entry_path = entry
                .path()
                .context("Layer entry has an invalid path")?
                .into_owned();

            if Workspace::is_excluded(&entry_path) {
                continue;
            }

            let is_file = entry.header().entry_type().is_file();
            // unpack_in refuses entries escaping `dest` and reports them as not unpacked
            let written = entry
                .unpack_in(dest)
                .with_context(|| format!("Failed to unpack {}", entry_path.display()))?;

            if written && is_file {
                unpacked += 1;
            }
        }

        tracing::debug!(files = unpacked, dest = %dest.display(), "unpacked layer");
        Ok(unpacked)
    }
}
