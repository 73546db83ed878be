//! Per-file verification result.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Computed checksum equals the manifest value.
    Match,
    /// File was hashed but the checksum differs.
    Mismatch,
    /// No file at the listed path.
    NotFound,
    /// File exists but could not be read.
    Error,
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Status::Match
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Match => "MATCH",
            Status::Mismatch => "MISMATCH",
            Status::NotFound => "NOT FOUND",
            Status::Error => "ERROR",
        })
    }
}

/// Result for one manifest entry. `computed` is present iff the status is
/// `Match` or `Mismatch`; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    filename: String,
    status: Status,
    expected: String,
    computed: Option<String>,
}

impl Outcome {
    /// Classify a successfully hashed file by exact string comparison.
    pub fn hashed(filename: impl Into<String>, expected: impl Into<String>, computed: String) -> Self {
        let expected = expected.into();
        let status = if computed == expected {
            Status::Match
        } else {
            Status::Mismatch
        };
        Self {
            filename: filename.into(),
            status,
            expected,
            computed: Some(computed),
        }
    }

    pub fn not_found(filename: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            status: Status::NotFound,
            expected: expected.into(),
            computed: None,
        }
    }

    pub fn error(filename: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            status: Status::Error,
            expected: expected.into(),
            computed: None,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Checksum as listed in the manifest.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn computed(&self) -> Option<&str> {
        self.computed.as_deref()
    }
}
