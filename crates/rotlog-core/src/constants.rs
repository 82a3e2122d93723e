//! Constants and default values for rotlog

/// Program version reported by `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default age limit per file: one day
pub const DEFAULT_AGE_LIMIT_SECS: u64 = 24 * 3600;

/// Default size limit per file: 50M
pub const DEFAULT_SIZE_LIMIT_BYTES: u64 = 50 * 1000 * 1000;

/// Default number of files kept in addition to the active one
pub const DEFAULT_KEEP_COUNT: usize = 40;

/// Smallest accepted age limit
pub const MIN_AGE_LIMIT_SECS: u64 = 10;

/// Smallest accepted size limit
pub const MIN_SIZE_LIMIT_BYTES: u64 = 20;

/// Smallest accepted keep count
pub const MIN_KEEP_COUNT: usize = 1;

/// Bytes requested from the input per read
pub const READ_BUFFER_SIZE: usize = 2000;

/// Separator between prefix and timestamp
pub const NAME_SEPARATOR: char = '_';

/// Suffix of every log file
pub const LOG_SUFFIX: &str = ".log";

/// strftime pattern for the timestamp part of a file name
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Length of a rendered `TIMESTAMP_FORMAT`
pub const TIMESTAMP_LEN: usize = 19;

/// Length of everything after `<prefix>_`: timestamp plus `.log`
pub const NAME_SUFFIX_LEN: usize = TIMESTAMP_LEN + LOG_SUFFIX.len();

/// Mode for created directories
pub const DIR_MODE: u32 = 0o755;

/// Mode for created log files
pub const FILE_MODE: u32 = 0o644;

/// Build a log file name from a prefix and a rendered timestamp
pub fn log_file_name(prefix: &str, timestamp: &str) -> String {
    format!("{}{}{}{}", prefix, NAME_SEPARATOR, timestamp, LOG_SUFFIX)
}
