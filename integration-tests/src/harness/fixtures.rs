use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to a file under `integration-tests/fixtures`.
pub fn fixture(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Writes `contents` to `access.log` in a fresh temp dir. Keep the returned
/// dir alive for as long as the path is used.
pub fn temp_log(contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("access.log");
    fs::write(&path, contents).expect("failed to write temp log");
    (dir, path)
}
