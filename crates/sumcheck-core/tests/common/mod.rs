//! Shared fixtures: a temp directory with files and a manifest.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a temp directory holding `files` and a manifest named `manifest_name`
/// with the given text.
pub fn fixture_dir(files: &[(&str, &[u8])], manifest_name: &str, manifest: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in files {
        write_file(dir.path(), name, body);
    }
    fs::write(dir.path().join(manifest_name), manifest).unwrap();
    dir
}

pub fn write_file(dir: &Path, name: &str, body: &[u8]) {
    fs::write(dir.join(name), body).unwrap();
}
