//! Log file retention management
//!
//! Keeps the newest `keep_count` rotated files for a prefix and deletes the rest.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::scanner::{list_rotated_files, LogFileEntry};

/// Outcome of a purge pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PurgeReport {
    /// Matching files found before deleting
    pub scanned: usize,
    /// Files deleted
    pub removed: usize,
    /// Files that could not be deleted
    pub failed: usize,
}

/// The entries a purge would delete: all but the last `keep_count` of an
/// oldest-first list
pub fn select_for_removal(entries: &[LogFileEntry], keep_count: usize) -> &[LogFileEntry] {
    let excess = entries.len().saturating_sub(keep_count);
    &entries[..excess]
}

/// Delete all but the newest `keep_count` rotated files.
///
/// Never fails: an unreadable directory skips the pass and a failed delete
/// is logged and skipped.
pub fn purge(directory: &Path, prefix: &str, keep_count: usize) -> PurgeReport {
    let entries = match list_rotated_files(directory, prefix) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot scan {} for old log files: {}", directory.display(), e);
            return PurgeReport::default();
        }
    };

    let mut report = PurgeReport {
        scanned: entries.len(),
        ..Default::default()
    };

    for entry in select_for_removal(&entries, keep_count) {
        match fs::remove_file(&entry.path) {
            Ok(()) => {
                debug!("Removed old log file {}", entry.path.display());
                report.removed += 1;
            }
            Err(e) => {
                warn!("Failed to remove {}: {}", entry.path.display(), e);
                report.failed += 1;
            }
        }
    }

    report
}
