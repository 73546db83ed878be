//! Verify the files in a directory against a manifest.
//!
//! Every manifest entry yields exactly one [`Outcome`], in manifest order.
//! Per-file problems (missing, unreadable) are recorded and the run goes on;
//! only a manifest that cannot be read aborts it.

mod outcome;
mod report;

pub use outcome::{Outcome, Status};
pub use report::{Report, Summary};

use crate::checksum::{self, Algorithm, DEFAULT_CHUNK_SIZE};
use crate::config::SumcheckConfig;
use crate::manifest::{self, Manifest, ManifestEntry, ManifestReadError};
use std::path::Path;

/// Digest settings for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verifier {
    pub algorithm: Algorithm,
    pub chunk_size: usize,
}

impl Default for Verifier {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl From<&SumcheckConfig> for Verifier {
    fn from(cfg: &SumcheckConfig) -> Self {
        Self {
            algorithm: cfg.algorithm,
            chunk_size: cfg.chunk_size,
        }
    }
}

impl Verifier {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Classify a single entry, resolving its filename against `dir`.
    pub fn verify_entry(&self, dir: &Path, entry: &ManifestEntry) -> Outcome {
        let path = dir.join(&entry.filename);
        if !path.exists() {
            tracing::warn!("{}: not found at {}", entry.filename, path.display());
            return Outcome::not_found(&entry.filename, &entry.expected);
        }
        let outcome = match checksum::try_digest_path(&path, self.algorithm, self.chunk_size) {
            Some(computed) => Outcome::hashed(&entry.filename, &entry.expected, computed),
            None => Outcome::error(&entry.filename, &entry.expected),
        };
        match outcome.status() {
            Status::Match => tracing::debug!("{}: match", entry.filename),
            Status::Mismatch => tracing::warn!(
                "{}: mismatch (expected {}, computed {})",
                entry.filename,
                entry.expected,
                outcome.computed().unwrap_or_default()
            ),
            Status::NotFound | Status::Error => {}
        }
        outcome
    }

    /// Verify every entry of `manifest`, one at a time, in manifest order.
    pub fn verify(&self, dir: &Path, manifest: &Manifest) -> Report {
        tracing::info!(
            "verifying {} entries in {} ({})",
            manifest.len(),
            dir.display(),
            self.algorithm
        );
        let outcomes: Vec<Outcome> = manifest
            .iter()
            .map(|entry| self.verify_entry(dir, entry))
            .collect();
        let report = Report::new(outcomes);
        tracing::info!("verification finished: {}", report.summary());
        report
    }
}

/// Read the manifest at `manifest_path` and verify `dir` against it.
pub fn verify_dir(
    dir: &Path,
    manifest_path: &Path,
    verifier: &Verifier,
) -> Result<Report, ManifestReadError> {
    let manifest = manifest::read_manifest(manifest_path).inspect_err(|e| {
        tracing::error!("{}: {}", e, e.source);
    })?;
    Ok(verifier.verify(dir, &manifest))
}

#[cfg(test)]
mod tests;
