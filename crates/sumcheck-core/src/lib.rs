//! Verify a directory of files against a `<checksum> <filename>` manifest.
//!
//! The engine has no UI: [`verify::verify_dir`] reads the manifest and
//! returns one [`verify::Outcome`] per entry for any front end to render.

pub mod checksum;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod verify;

pub use checksum::Algorithm;
pub use manifest::{read_manifest, Manifest, ManifestEntry, ManifestReadError};
pub use verify::{verify_dir, Outcome, Report, Status, Verifier};
