//! Custom assertions over persisted lists and the generated report

use std::path::Path;

/// Assert the report's stats section lists exactly `expected` (filename, entries), in order
pub fn assert_report_stats(report: &str, expected: &[(&str, usize)]) {
    let stats: Vec<&str> = report
        .lines()
        .skip_while(|l| *l != "## Stats")
        .skip(1)
        .take_while(|l| !l.starts_with("## "))
        .filter(|l| !l.is_empty())
        .collect();

    let wanted: Vec<String> = expected
        .iter()
        .map(|(name, n)| format!("- **{name}**: {n} proxies"))
        .collect();

    assert_eq!(stats, wanted, "unexpected stats section in report:\n{report}");
}

/// Assert a file holds exactly `expected` bytes
pub fn assert_file_eq(path: &Path, expected: &str) {
    let actual = std::fs::read(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    assert_eq!(
        actual,
        expected.as_bytes(),
        "content mismatch for {}",
        path.display()
    );
}
