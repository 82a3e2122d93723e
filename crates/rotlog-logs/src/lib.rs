//! rotlog logs - Tee, rotation, and retention of timestamped log files

mod clock;
mod dirs;
mod engine;
mod retention;
mod rotation;
mod rotator;
mod scanner;
mod writer;

pub use clock::{elapsed_secs, Clock, SystemClock};
pub use dirs::ensure_dir;
pub use engine::{RotationEngine, RunSummary};
pub use retention::{purge, select_for_removal, PurgeReport};
pub use rotation::{RotationPolicy, MIN_ROTATION_AGE_SECS};
pub use rotator::Rotator;
pub use scanner::{is_rotated_name, list_rotated_files, LogFileEntry};
pub use writer::{write_counted, ActiveFile};
