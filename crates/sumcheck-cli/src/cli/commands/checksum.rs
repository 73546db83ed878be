//! `sumcheck checksum` – digest of a single file.

use anyhow::Result;
use std::path::Path;
use sumcheck_core::checksum;
use sumcheck_core::Algorithm;

/// Compute and print the checksum of the given file in manifest line format.
pub fn run_checksum(path: &Path, algorithm: Algorithm, chunk_size: usize) -> Result<()> {
    let digest = checksum::digest_path(path, algorithm, chunk_size)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
