use std::path::PathBuf;
use tempfile::TempDir;

/// Create a fresh temporary directory holding `report` as `coverage.json`,
/// returning the dir handle, the report path and the badge path.
/// The caller must hold onto `TempDir` to keep the temp directory alive.
pub fn setup_report(report: &[u8]) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("coverage.json");
    std::fs::write(&input, report).unwrap();
    let output = dir.path().join("coverage.svg");
    (dir, input, output)
}

/// Build a single-package, single-function report from reach counts.
pub fn report_with_reached(reached: &[u64]) -> Vec<u8> {
    let statements: Vec<String> = reached
        .iter()
        .map(|r| format!("{{ \"Reached\": {r} }}"))
        .collect();
    format!(
        "{{ \"Packages\": [ {{ \"Name\": \"p\", \"Functions\": [ {{ \"Name\": \"f\", \"Statements\": [ {} ] }} ] }} ] }}",
        statements.join(", ")
    )
    .into_bytes()
}
