// crates/append_todo/src/lib.rs

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Appends `entry` to the tracking file at `path`, creating the file if it
/// does not exist yet. The file is never truncated, so repeated runs
/// accumulate entries in order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened for appending or the write
/// fails (permission denied, disk full). Callers do not retry.
pub fn append_entry<P: AsRef<Path>>(path: P, entry: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path_ref)
        .with_context(|| format!("Error opening {} for append", path_ref.display()))?;
    file.write_all(entry.as_bytes())
        .with_context(|| format!("Error writing to {}", path_ref.display()))?;
    Ok(())
}
