//! Streaming file digests used to detect accidental corruption.
//!
//! Files are hashed in fixed-size chunks so memory stays bounded for
//! arbitrarily large inputs. The algorithm is a configuration point; MD5 is
//! the default because that is what `md5.txt` manifests carry.

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default read size per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Largest buffer allocated per read; bigger requests are clamped.
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Effective chunk size: 0 means the default, and anything above
/// [`MAX_CHUNK_SIZE`] is clamped to it.
pub fn effective_chunk_size(chunk_size: usize) -> usize {
    match chunk_size {
        0 => DEFAULT_CHUNK_SIZE,
        n => n.min(MAX_CHUNK_SIZE),
    }
}

/// Checksum function used for both manifest comparison and the `checksum` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Md5,
    Sha256,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha256, Algorithm::Sha512];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Length of the lowercase hex digest.
    pub fn hex_len(self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha256 => 64,
            Algorithm::Sha512 => 128,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown checksum algorithm {0:?} (expected md5, sha256 or sha512)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == lower)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Failure to hash a single file. Callers in the verifier treat this as a
/// per-file ERROR, never as a fatal condition.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DigestError {
    pub fn path(&self) -> &Path {
        match self {
            DigestError::Open { path, .. } | DigestError::Read { path, .. } => path,
        }
    }
}

fn stream<D: Digest, R: Read>(mut reader: R, chunk_size: usize) -> io::Result<String> {
    let mut hasher = D::new();
    let mut buf = vec![0u8; chunk_size];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Hash everything `reader` yields, reading at most `chunk_size` bytes at a
/// time (see [`effective_chunk_size`]).
pub fn digest_reader<R: Read>(reader: R, algorithm: Algorithm, chunk_size: usize) -> io::Result<String> {
    let chunk_size = effective_chunk_size(chunk_size);
    match algorithm {
        Algorithm::Md5 => stream::<Md5, _>(reader, chunk_size),
        Algorithm::Sha256 => stream::<Sha256, _>(reader, chunk_size),
        Algorithm::Sha512 => stream::<Sha512, _>(reader, chunk_size),
    }
}

/// Compute the digest of a file and return it as lowercase hex.
/// The file handle is closed before this returns, on success or failure.
pub fn digest_path(path: &Path, algorithm: Algorithm, chunk_size: usize) -> Result<String, DigestError> {
    let f = File::open(path).map_err(|source| DigestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    digest_reader(f, algorithm, chunk_size).map_err(|source| DigestError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`digest_path`], but a failure is logged and reported as `None`.
pub fn try_digest_path(path: &Path, algorithm: Algorithm, chunk_size: usize) -> Option<String> {
    match digest_path(path, algorithm, chunk_size) {
        Ok(digest) => Some(digest),
        Err(e) => {
            let err = anyhow::Error::new(e);
            tracing::warn!("could not hash: {:#}", err);
            None
        }
    }
}
