//! Persistent storage for request history.
//!
//! History is stored as JSON Lines, oldest entry first, so new entries can be
//! appended without rewriting the file. Corrupted lines are skipped on load.
//! Rewrites go through a temporary file that is renamed into place.

use super::models::{HistoryEntry, HistoryError};
use super::recent::HistoryLog;
use log::warn;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Appends a single entry to the history file, creating it if needed.
///
/// # Arguments
///
/// * `path` - The history file
/// * `entry` - The entry to append
///
/// # Errors
///
/// Returns `HistoryError` if the file cannot be written or the entry cannot
/// be serialized.
pub fn append_entry(path: &Path, entry: &HistoryEntry) -> Result<(), HistoryError> {
    ensure_parent_dir(path)?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let json = serde_json::to_string(entry)?;
    writeln!(file, "{}", json)?;
    file.flush()?;

    Ok(())
}

/// Writes the whole log to the history file, replacing its contents.
///
/// The entries are written to a temporary file which then replaces the
/// history file, so a failed write leaves the previous contents intact.
///
/// # Errors
///
/// Returns `HistoryError` if the file cannot be written or an entry cannot
/// be serialized.
pub fn save_log(path: &Path, log: &HistoryLog) -> Result<(), HistoryError> {
    ensure_parent_dir(path)?;

    let mut entries: Vec<&HistoryEntry> = log.entries().collect();
    entries.reverse();
    replace_file(path, &entries)
}

/// Loads the most recent `limit` entries from the history file.
///
/// A missing file yields an empty log. Lines that fail to parse are skipped
/// with a warning.
///
/// # Errors
///
/// Returns `HistoryError::StorageError` if the file exists but cannot be read.
pub fn load_log(path: &Path, limit: usize) -> Result<HistoryLog, HistoryError> {
    let mut log = HistoryLog::with_limit(limit);
    for entry in read_entries(path)? {
        log.push(entry);
    }
    Ok(log)
}

/// Trims the history file to its newest `limit` entries.
///
/// Corrupted lines are dropped along with the old entries. The trimmed file
/// is written to a temporary file first and then renamed into place.
///
/// # Returns
///
/// The number of entries removed.
///
/// # Errors
///
/// Returns `HistoryError` if the file cannot be read or replaced.
pub fn maintain_history_limit(path: &Path, limit: usize) -> Result<usize, HistoryError> {
    if !path.exists() {
        return Ok(0);
    }

    let entries = read_entries(path)?;
    let limit = limit.max(1);
    if entries.len() <= limit {
        return Ok(0);
    }

    let removed = entries.len() - limit;
    let kept: Vec<&HistoryEntry> = entries.iter().skip(removed).collect();
    replace_file(path, &kept)?;

    Ok(removed)
}

/// Reads every valid entry in file order, oldest first.
fn read_entries(path: &Path) -> Result<Vec<HistoryEntry>, HistoryError> {
    let mut entries = Vec::new();

    if !path.exists() {
        return Ok(entries);
    }

    let reader = BufReader::new(File::open(path)?);
    let mut corrupted_lines = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<HistoryEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                corrupted_lines += 1;
                warn!(
                    "skipping corrupted history entry at line {}: {}",
                    line_num + 1,
                    e
                );
            }
        }
    }

    if is_significant_corruption(corrupted_lines, entries.len()) {
        warn!(
            "history file {} has significant corruption ({} corrupted lines, {} valid entries)",
            path.display(),
            corrupted_lines,
            entries.len()
        );
    }

    Ok(entries)
}

/// More corrupted lines than valid ones.
fn is_significant_corruption(corrupted_lines: usize, valid_lines: usize) -> bool {
    corrupted_lines > 0 && corrupted_lines > valid_lines
}

/// Writes entries to a sibling temporary file and renames it over `path`.
fn replace_file(path: &Path, entries: &[&HistoryEntry]) -> Result<(), HistoryError> {
    let temp_path = path.with_extension("jsonl.tmp");

    let written = write_entries(&temp_path, entries);
    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
        return written;
    }

    fs::rename(&temp_path, path)?;
    Ok(())
}

fn write_entries(path: &Path, entries: &[&HistoryEntry]) -> Result<(), HistoryError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for entry in entries {
        let json = serde_json::to_string(entry)?;
        writeln!(writer, "{}", json)?;
    }
    writer.flush()?;
    Ok(())
}

/// Deletes the history file if it exists.
pub fn clear_history_file(path: &Path) -> Result<(), HistoryError> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), HistoryError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
