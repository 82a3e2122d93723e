//! When to roll over to a new file

use rotlog_core::RotationConfig;

/// A size-triggered rotation waits until the file is at least this old, so
/// two files never get the same one-second timestamp
pub const MIN_ROTATION_AGE_SECS: i64 = 1;

/// Age and size thresholds for the active file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub age_limit_secs: u64,
    pub size_limit_bytes: u64,
}

impl RotationPolicy {
    pub fn new(age_limit_secs: u64, size_limit_bytes: u64) -> Self {
        Self {
            age_limit_secs,
            size_limit_bytes,
        }
    }

    pub fn from_config(config: &RotationConfig) -> Self {
        Self::new(config.age_limit_secs, config.size_limit_bytes)
    }

    /// Rotate when the file is too old, or too big and at least a second old
    pub fn should_rotate(&self, age_secs: i64, bytes_written: u64) -> bool {
        let age_reached = u64::try_from(age_secs)
            .map(|age| age >= self.age_limit_secs)
            .unwrap_or(false);
        let size_reached =
            bytes_written >= self.size_limit_bytes && age_secs >= MIN_ROTATION_AGE_SECS;

        age_reached || size_reached
    }
}
