use super::*;
use std::fs;

const HELLO_MD5: &str = "5d41402abc4b2a76b9719d911017c592";

fn entry(expected: &str, filename: &str) -> ManifestEntry {
    ManifestEntry {
        filename: filename.to_string(),
        expected: expected.to_string(),
    }
}

#[test]
fn matching_file_is_match_with_computed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    let o = Verifier::default().verify_entry(dir.path(), &entry(HELLO_MD5, "a.txt"));
    assert_eq!(o.status(), Status::Match);
    assert_eq!(o.computed(), Some(HELLO_MD5));
    assert_eq!(o.expected(), HELLO_MD5);
}

#[test]
fn differing_checksum_is_mismatch_with_recomputed_value() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    let o = Verifier::default().verify_entry(dir.path(), &entry("0123", "a.txt"));
    assert_eq!(o.status(), Status::Mismatch);
    assert_eq!(o.computed(), Some(HELLO_MD5));
    assert_eq!(o.expected(), "0123");
}

#[test]
fn comparison_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    let upper = HELLO_MD5.to_ascii_uppercase();
    let o = Verifier::default().verify_entry(dir.path(), &entry(&upper, "a.txt"));
    assert_eq!(o.status(), Status::Mismatch);
}

#[test]
fn missing_file_is_not_found_without_computed() {
    let dir = tempfile::tempdir().unwrap();
    let o = Verifier::default().verify_entry(dir.path(), &entry("ffff", "nope.txt"));
    assert_eq!(o.status(), Status::NotFound);
    assert_eq!(o.computed(), None);
}

#[cfg(unix)]
#[test]
fn unreadable_entry_is_error_and_run_continues() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists but cannot be read as a file.
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    let manifest = Manifest::from_entries([entry("ffff", "sub"), entry(HELLO_MD5, "a.txt")]);
    let report = Verifier::default().verify(dir.path(), &manifest);
    let statuses: Vec<Status> = report.outcomes().iter().map(Outcome::status).collect();
    assert_eq!(statuses, [Status::Error, Status::Match]);
    assert_eq!(report.outcomes()[0].computed(), None);
}

#[cfg(unix)]
#[test]
fn permission_denied_is_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locked.bin");
    fs::write(&path, b"secret").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::File::open(&path).is_ok() {
        eprintln!("skipping permission_denied_is_error: file modes are not enforced for this user");
        return;
    }
    let manifest = Manifest::from_entries([entry("ffff", "locked.bin"), entry("ffff", "b.txt")]);
    let report = Verifier::default().verify(dir.path(), &manifest);
    assert_eq!(report.outcomes()[0].status(), Status::Error);
    assert_eq!(report.outcomes()[1].status(), Status::NotFound);
}

#[test]
fn one_outcome_per_entry_in_manifest_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("z.txt"), b"hello").unwrap();
    fs::write(dir.path().join("m.txt"), b"other").unwrap();
    let manifest = Manifest::parse(&format!(
        "{HELLO_MD5} z.txt\nffff missing.txt\n{HELLO_MD5} m.txt\nabcd with space.txt\n"
    ));
    let report = Verifier::default().verify(dir.path(), &manifest);
    assert_eq!(report.len(), manifest.len());
    let names: Vec<&str> = report.outcomes().iter().map(Outcome::filename).collect();
    assert_eq!(names, ["z.txt", "missing.txt", "m.txt", "with space.txt"]);
    let summary = report.summary();
    assert_eq!(summary.matched, 1);
    assert_eq!(summary.mismatched, 1);
    assert_eq!(summary.not_found, 2);
    assert_eq!(summary.errors, 0);
    assert_eq!(summary.failed(), 3);
    assert!(!report.all_matched());
}

#[test]
fn filenames_with_spaces_resolve() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("my file.txt"), b"hello").unwrap();
    let manifest = Manifest::parse(&format!("{HELLO_MD5} my file.txt\n"));
    let report = Verifier::default().verify(dir.path(), &manifest);
    assert_eq!(report.outcomes()[0].status(), Status::Match);
    assert!(report.all_matched());
}

#[test]
fn rerun_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    let manifest = Manifest::parse(&format!("{HELLO_MD5} a.txt\n00 b.txt\n"));
    let v = Verifier::default();
    assert_eq!(v.verify(dir.path(), &manifest), v.verify(dir.path(), &manifest));
}

#[test]
fn empty_manifest_gives_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let report = Verifier::default().verify(dir.path(), &Manifest::default());
    assert!(report.is_empty());
    assert!(report.all_matched());
    assert_eq!(report.summary().total(), 0);
}

#[test]
fn huge_chunk_size_still_covers_every_entry() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    let manifest = Manifest::parse(&format!("{HELLO_MD5} a.txt\nffff b.txt\n"));
    let v = Verifier {
        algorithm: Algorithm::Md5,
        chunk_size: usize::MAX,
    };
    let report = v.verify(dir.path(), &manifest);
    assert_eq!(report.len(), 2);
    assert_eq!(report.outcomes()[0].status(), Status::Match);
    assert_eq!(report.outcomes()[1].status(), Status::NotFound);
}

#[test]
fn sha256_verifier() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("h.txt"), b"hello\n").unwrap();
    let manifest = Manifest::parse(
        "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03 h.txt\n",
    );
    let report = Verifier::new(Algorithm::Sha256).verify(dir.path(), &manifest);
    assert_eq!(report.outcomes()[0].status(), Status::Match);
}

#[test]
fn verify_dir_missing_manifest_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = verify_dir(
        dir.path(),
        &dir.path().join("md5.txt"),
        &Verifier::default(),
    )
    .unwrap_err();
    assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn status_display_matches_report_labels() {
    assert_eq!(Status::Match.to_string(), "MATCH");
    assert_eq!(Status::Mismatch.to_string(), "MISMATCH");
    assert_eq!(Status::NotFound.to_string(), "NOT FOUND");
    assert_eq!(Status::Error.to_string(), "ERROR");
}

#[test]
fn outcome_serializes_to_json() {
    let o = Outcome::not_found("b.txt", "ffff");
    let json = serde_json::to_value(&o).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "filename": "b.txt",
            "status": "NOT_FOUND",
            "expected": "ffff",
            "computed": null
        })
    );
}
