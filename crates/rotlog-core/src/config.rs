//! Rotation configuration
//!
//! A `RotationConfig` is built once at startup from validated command line
//! input and never changes afterwards. The three numeric limits are clamped
//! to their minimums on construction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};

/// Prefixes end up in file names, so keep them to a safe character set
static PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._-]+$").expect("Invalid prefix regex"));

/// Validate a log file prefix: non-empty, no path separators
pub fn validate_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix != "." && prefix != ".." && PREFIX_REGEX.is_match(prefix)
}

/// Limits and location for a rotation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationConfig {
    /// Maximum age of a file in seconds before rotating
    pub age_limit_secs: u64,
    /// Size in bytes after which a file is rotated
    pub size_limit_bytes: u64,
    /// Number of old files kept in addition to the active one
    pub keep_count: usize,
    /// Directory receiving the log files
    pub directory: PathBuf,
    /// File name prefix
    pub prefix: String,
}

impl RotationConfig {
    /// Build a config with the default limits
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if !validate_prefix(&prefix) {
            return Err(Error::InvalidPrefix(format!(
                "'{}' (use letters, digits, '.', '_' or '-')",
                prefix
            )));
        }

        Ok(Self {
            age_limit_secs: DEFAULT_AGE_LIMIT_SECS,
            size_limit_bytes: DEFAULT_SIZE_LIMIT_BYTES,
            keep_count: DEFAULT_KEEP_COUNT,
            directory: directory.into(),
            prefix,
        })
    }

    /// Set the age limit, forced to at least 10 seconds
    pub fn with_age_limit(mut self, secs: u64) -> Self {
        self.age_limit_secs = secs.max(MIN_AGE_LIMIT_SECS);
        self
    }

    /// Set the size limit, forced to at least 20 bytes
    pub fn with_size_limit(mut self, bytes: u64) -> Self {
        self.size_limit_bytes = bytes.max(MIN_SIZE_LIMIT_BYTES);
        self
    }

    /// Set the keep count, forced to at least 1
    pub fn with_keep_count(mut self, keep: i64) -> Self {
        self.keep_count = usize::try_from(keep)
            .unwrap_or(MIN_KEEP_COUNT)
            .max(MIN_KEEP_COUNT);
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
