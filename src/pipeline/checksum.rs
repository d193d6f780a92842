//! Artifact checksum calculation.
//!
//! Used to report what the pipeline produced once both stages succeed.

use crate::error::{ErrorExt, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// A file produced by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub size: u64,
    /// Hex-encoded SHA-256 of the file contents
    pub checksum: String,
}

impl Artifact {
    /// Reads size and checksum of the file at `path`.
    pub async fn inspect(path: &Path) -> Result<Self> {
        let metadata = tokio::fs::metadata(path)
            .await
            .fs_context("reading artifact metadata", path)?;
        let checksum = calculate_sha256(path).await?;
        Ok(Self {
            path: path.to_path_buf(),
            size: metadata.len(),
            checksum,
        })
    }
}

/// Calculates the SHA-256 checksum of a file, reading it in 8KB chunks.
pub async fn calculate_sha256(path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
