//! The active log file and counted writes

use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::clock::elapsed_secs;

/// Write as much of `buf` as possible, returning how many bytes made it.
///
/// Interrupted writes are retried; any other error stops the write and is
/// logged at debug level. Callers compare counts to detect short writes.
pub fn write_counted<W: Write + ?Sized>(writer: &mut W, buf: &[u8]) -> usize {
    let mut written = 0;
    while written < buf.len() {
        match writer.write(&buf[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("Write stopped after {} of {} bytes: {}", written, buf.len(), e);
                break;
            }
        }
    }
    written
}

/// The file currently receiving log data.
///
/// Exactly one exists at a time. It is replaced on rotation, never reopened.
#[derive(Debug)]
pub struct ActiveFile {
    path: PathBuf,
    file: File,
    created: DateTime<Local>,
    bytes_written: u64,
    last_byte: u8,
}

impl ActiveFile {
    pub fn new(path: PathBuf, file: File, created: DateTime<Local>) -> Self {
        Self {
            path,
            file,
            created,
            bytes_written: 0,
            last_byte: b'\n',
        }
    }

    /// Append a chunk, returning the number of bytes written
    pub fn write_chunk(&mut self, chunk: &[u8]) -> usize {
        let written = write_counted(&mut self.file, chunk);
        self.bytes_written += written as u64;
        if let Some(&last) = chunk.last() {
            self.last_byte = last;
        }
        written
    }

    /// Whole seconds since the file was created
    pub fn age_secs(&self, now: DateTime<Local>) -> i64 {
        elapsed_secs(self.created, now)
    }

    /// Terminate the file with a newline if needed, then close it
    pub fn finish(mut self) -> io::Result<()> {
        if self.last_byte != b'\n' {
            self.file.write_all(b"\n")?;
        }
        self.close()
    }

    /// Close the file as is
    pub fn close(mut self) -> io::Result<()> {
        self.file.flush()?;
        if let Err(e) = self.file.sync_data() {
            warn!("Failed to sync {}: {}", self.path.display(), e);
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn created(&self) -> DateTime<Local> {
        self.created
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
