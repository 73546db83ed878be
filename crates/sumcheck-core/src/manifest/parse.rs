//! Line parser for `<checksum> <filename>` manifests.

/// One line of a manifest: expected checksum for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub filename: String,
    pub expected: String,
}

/// Parse a single manifest line.
///
/// The first whitespace-delimited token is the checksum; the remaining
/// tokens, rejoined with single spaces, form the filename. Blank lines and
/// lines with only one token yield `None`. No comment syntax.
pub fn parse_line(line: &str) -> Option<ManifestEntry> {
    let mut tokens = line.split_whitespace();
    let expected = tokens.next()?;
    let filename = tokens.collect::<Vec<_>>().join(" ");
    if filename.is_empty() {
        return None;
    }
    Some(ManifestEntry {
        filename,
        expected: expected.to_string(),
    })
}
