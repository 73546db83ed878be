//! Checksum manifest: a mapping from filename to expected checksum.
//!
//! Built once per verification run and not modified afterwards. Iteration
//! follows the order in which filenames first appear in the source, so
//! output is reproducible across runs.

mod parse;

pub use parse::{parse_line, ManifestEntry};

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Manifest file name looked up in the verified directory by default.
pub const DEFAULT_MANIFEST_NAME: &str = "md5.txt";

/// The manifest could not be opened or read. Fatal to a verification run.
#[derive(Debug, thiserror::Error)]
#[error("could not read manifest {}", path.display())]
pub struct ManifestReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
    index: HashMap<String, usize>,
}

impl Manifest {
    /// Build from entries. A repeated filename overwrites the earlier
    /// checksum but keeps the earlier position.
    pub fn from_entries<I: IntoIterator<Item = ManifestEntry>>(entries: I) -> Self {
        let mut manifest = Manifest::default();
        for entry in entries {
            manifest.insert(entry);
        }
        manifest
    }

    /// Parse manifest text. Malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        Self::from_entries(split_lines(text).filter_map(parse_line))
    }

    fn insert(&mut self, entry: ManifestEntry) {
        match self.index.get(&entry.filename) {
            Some(&i) => {
                tracing::debug!(
                    "duplicate manifest entry for {:?}: {} replaces {}",
                    entry.filename,
                    entry.expected,
                    self.entries[i].expected
                );
                self.entries[i].expected = entry.expected;
            }
            None => {
                self.index.insert(entry.filename.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expected checksum for `filename`, as written in the manifest.
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.index
            .get(filename)
            .map(|&i| self.entries[i].expected.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManifestEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Lines end at `\n`, `\r\n` or a lone `\r`. A `\r\n` pair leaves an
/// empty piece between the two, which `parse_line` skips as blank.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

/// Read and parse the manifest at `path`, line by line.
pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestReadError> {
    let wrap = |source: io::Error| ManifestReadError {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(wrap)?);
    let mut entries = Vec::new();
    for chunk in reader.split(b'\n') {
        let text = String::from_utf8(chunk.map_err(wrap)?)
            .map_err(|e| wrap(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        entries.extend(split_lines(&text).filter_map(parse_line));
    }
    let manifest = Manifest::from_entries(entries);
    tracing::debug!("read {} manifest entries from {}", manifest.len(), path.display());
    Ok(manifest)
}
