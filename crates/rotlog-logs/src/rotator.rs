//! Creation of the next timestamp-named log file

use rotlog_core::{
    log_file_name, Error, Result, RotationConfig, DIR_MODE, FILE_MODE, TIMESTAMP_FORMAT,
};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use crate::clock::{Clock, SystemClock};
use crate::dirs::ensure_dir;
use crate::retention;
use crate::writer::ActiveFile;

/// Produces new active files in one directory for one prefix
#[derive(Debug)]
pub struct Rotator<C: Clock = SystemClock> {
    directory: PathBuf,
    prefix: String,
    keep_count: usize,
    clock: C,
}

impl<C: Clock> Rotator<C> {
    /// Create a rotator with a custom clock. Creates the directory.
    pub fn with_clock(config: &RotationConfig, clock: C) -> Result<Self> {
        ensure_dir(config.directory(), DIR_MODE)?;

        Ok(Self {
            directory: config.directory().to_path_buf(),
            prefix: config.prefix().to_string(),
            keep_count: config.keep_count,
            clock,
        })
    }

    /// Purge old files, then create a file named for the current second
    pub fn next_file(&self) -> Result<ActiveFile> {
        let report = retention::purge(&self.directory, &self.prefix, self.keep_count);
        if report.removed > 0 || report.failed > 0 {
            debug!(
                "Purged {} of {} old log files ({} failed)",
                report.removed, report.scanned, report.failed
            );
        }

        let created = self.clock.now();
        let timestamp = created.format(TIMESTAMP_FORMAT).to_string();
        let path = self.directory.join(log_file_name(&self.prefix, &timestamp));

        let file = open_log_file(&path)?;
        info!("New log file: {}", path.display());

        Ok(ActiveFile::new(path, file, created))
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Create `path` exclusively. If a file from the same second already exists,
/// append to it rather than overwrite it.
fn open_log_file(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    match options.open(path) {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            warn!("{} already exists, appending to it", path.display());
            OpenOptions::new()
                .append(true)
                .open(path)
                .map_err(|source| Error::FileCreate {
                    path: path.to_path_buf(),
                    source,
                })
        }
        Err(source) => Err(Error::FileCreate {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::manual::ManualClock;
    use crate::scanner::{is_rotated_name, list_rotated_files};
    use chrono::{Local, TimeZone};
    use std::fs;
    use tempfile::TempDir;

    const T0: i64 = 1_700_000_000;

    fn config(dir: &Path, keep: i64) -> RotationConfig {
        RotationConfig::new(dir, "app").unwrap().with_keep_count(keep)
    }

    #[test]
    fn test_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("var").join("log");

        let rotator = Rotator::with_clock(&config(&nested, 3), ManualClock::at(T0)).unwrap();
        assert!(nested.is_dir());
        assert_eq!(rotator.directory(), nested);
    }

    #[test]
    fn test_file_named_for_clock() {
        let temp_dir = TempDir::new().unwrap();
        let rotator =
            Rotator::with_clock(&config(temp_dir.path(), 3), ManualClock::at(T0)).unwrap();

        let active = rotator.next_file().unwrap();
        let expected = format!(
            "app_{}.log",
            Local
                .timestamp_opt(T0, 0)
                .unwrap()
                .format("%Y-%m-%d_%H-%M-%S")
        );

        assert_eq!(active.path(), temp_dir.path().join(&expected));
        assert!(is_rotated_name(&expected, "app"));
        assert!(active.path().exists());
        assert_eq!(active.created().timestamp(), T0);
    }

    #[test]
    fn test_purges_before_creating() {
        let temp_dir = TempDir::new().unwrap();
        for day in 1..=4 {
            fs::write(
                temp_dir.path().join(format!("app_2020-01-{:02}_00-00-00.log", day)),
                b"old\n",
            )
            .unwrap();
        }

        let rotator =
            Rotator::with_clock(&config(temp_dir.path(), 2), ManualClock::at(T0)).unwrap();
        let active = rotator.next_file().unwrap();

        let names: Vec<String> = list_rotated_files(temp_dir.path(), "app")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();

        // Two kept plus the new active file
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "app_2020-01-03_00-00-00.log");
        assert_eq!(names[1], "app_2020-01-04_00-00-00.log");
        assert_eq!(temp_dir.path().join(&names[2]), active.path());
    }

    #[test]
    fn test_same_second_does_not_truncate() {
        let temp_dir = TempDir::new().unwrap();
        let clock = ManualClock::at(T0);
        let rotator = Rotator::with_clock(&config(temp_dir.path(), 5), clock).unwrap();

        let mut first = rotator.next_file().unwrap();
        let path = first.path().to_path_buf();
        first.write_chunk(b"first\n");
        first.close().unwrap();

        let mut second = rotator.next_file().unwrap();
        assert_eq!(second.path(), path);
        second.write_chunk(b"second\n");
        second.close().unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"first\nsecond\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let rotator =
            Rotator::with_clock(&config(temp_dir.path(), 1), ManualClock::at(T0)).unwrap();
        let active = rotator.next_file().unwrap();

        let mode = fs::metadata(active.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_directory_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("logs");
        fs::write(&blocker, b"not a dir").unwrap();

        let err = Rotator::with_clock(&config(&blocker, 1), ManualClock::at(T0)).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }
}
