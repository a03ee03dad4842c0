//! Content digest (SHA-256)
//!
//! Digests are the `sha256:<64 hex chars>` strings registries use to address
//! blobs. Inside this crate they carry no meaning beyond equality: two equal
//! digests mean two equal byte streams.
//!
//! ## Format
//!
//! - Full: `sha256:` followed by 64 lowercase hex characters
//! - Short: First 12 hex characters, used in log output

use crate::artifacts::objects::{DIGEST_ALGORITHM, DIGEST_HEX_LENGTH};
use anyhow::Context;
use sha2::{Digest as _, Sha256};
use std::io::Read;
use std::path::Path;

const READ_CHUNK_SIZE: usize = 64 * 1024;
const SHORT_DIGEST_LENGTH: usize = 12;

/// Fixed-length content fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    /// Parse and validate a digest string
    ///
    /// # Arguments
    ///
    /// * `raw` - digest in `sha256:<hex>` form, as found in registry manifests
    ///
    /// # Returns
    ///
    /// Validated Digest (hex normalized to lowercase) or error if the algorithm,
    /// length or characters are wrong
    pub fn try_parse(raw: &str) -> anyhow::Result<Self> {
        let (algorithm, hex_part) = raw
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("Digest is missing an algorithm prefix: {raw}"))?;

        if algorithm != DIGEST_ALGORITHM {
            anyhow::bail!("Unsupported digest algorithm: {algorithm}");
        }
        if hex_part.len() != DIGEST_HEX_LENGTH {
            anyhow::bail!("Invalid digest length: {}", hex_part.len());
        }
        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid digest characters: {hex_part}");
        }

        Ok(Self(format!(
            "{DIGEST_ALGORITHM}:{}",
            hex_part.to_ascii_lowercase()
        )))
    }

    pub fn of_bytes(data: &[u8]) -> Self {
        Self::from_hasher(Sha256::new_with_prefix(data))
    }

    /// Hash a stream without buffering it whole
    pub fn of_reader<R: Read>(reader: &mut R) -> anyhow::Result<Self> {
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; READ_CHUNK_SIZE];

        loop {
            let read = reader.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }

        Ok(Self::from_hasher(hasher))
    }

    pub fn of_file(path: &Path) -> anyhow::Result<Self> {
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {} for hashing", path.display()))?;

        Self::of_reader(&mut file)
            .with_context(|| format!("Failed to hash {}", path.display()))
    }

    /// Hex part of the digest, without the algorithm prefix
    pub fn hex(&self) -> &str {
        &self.0[DIGEST_ALGORITHM.len() + 1..]
    }

    pub fn to_short(&self) -> String {
        self.hex()[..SHORT_DIGEST_LENGTH].to_string()
    }

    fn from_hasher(hasher: Sha256) -> Self {
        Self(format!(
            "{DIGEST_ALGORITHM}:{}",
            hex::encode(hasher.finalize())
        ))
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
