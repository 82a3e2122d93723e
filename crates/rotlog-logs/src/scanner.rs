//! Discovery of rotated log files in a directory

use rotlog_core::{Result, LOG_SUFFIX, NAME_SEPARATOR, NAME_SUFFIX_LEN};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A log file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileEntry {
    pub path: PathBuf,
    pub name: String,
}

/// Does `name` look like `<prefix>_YYYY-MM-DD_HH-MM-SS.log`?
///
/// Only the prefix, the length and the `.log` suffix are checked; the
/// timestamp characters themselves are not parsed.
pub fn is_rotated_name(name: &str, prefix: &str) -> bool {
    name.len() == prefix.len() + 1 + NAME_SUFFIX_LEN
        && name.starts_with(prefix)
        && name[prefix.len()..].starts_with(NAME_SEPARATOR)
        && name.ends_with(LOG_SUFFIX)
}

/// List the rotated files for `prefix`, oldest first.
///
/// Timestamps are fixed width and zero padded, so ordering by name is
/// ordering by creation time.
pub fn list_rotated_files(directory: &Path, prefix: &str) -> Result<Vec<LogFileEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", directory.display(), e);
                continue;
            }
        };
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };

        if is_rotated_name(&name, prefix) {
            entries.push(LogFileEntry {
                path: entry.path(),
                name,
            });
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
