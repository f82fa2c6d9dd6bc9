// crates/extract_error_lines/src/lib.rs

use std::fs;
use std::io;
use std::path::Path;

/// The substrings that flag a log line as describing a compilation error.
/// Matching is case-sensitive and a plain substring check, not a regex.
const ERROR_MARKERS: &[&str] = &["error:", "undefined reference"];

/// Reads the full contents of the compiler log at `path`.
///
/// A missing file surfaces as `io::ErrorKind::NotFound`, which callers treat
/// as a handled "nothing to analyze" branch rather than a failure.
pub fn read_error_log<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path.as_ref())
}

/// Scans `content` line by line and returns the trimmed form of every line
/// that contains one of the error markers, preserving input order.
///
/// Lines are judged independently; a line matching more than one marker is
/// still recorded once.
pub fn extract_error_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| ERROR_MARKERS.iter().any(|marker| line.contains(marker)))
        .map(|line| line.trim().to_string())
        .collect()
}
