//! The tee loop: copy input to output and to the active file, rotating as needed

use rotlog_core::{Result, RotationConfig, READ_BUFFER_SIZE};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::rotation::RotationPolicy;
use crate::rotator::Rotator;
use crate::writer::{write_counted, ActiveFile};

/// What happened during a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub bytes_read: u64,
    pub files_created: usize,
    pub rotations: usize,
    /// The input ended with an error rather than end-of-file
    pub read_error: bool,
}

/// Owns the rotator and the single active file
pub struct RotationEngine<C: Clock = SystemClock> {
    policy: RotationPolicy,
    rotator: Rotator<C>,
    active: ActiveFile,
    summary: RunSummary,
}

impl RotationEngine<SystemClock> {
    /// Create the directory and the first log file
    pub fn start(config: &RotationConfig) -> Result<Self> {
        Self::start_with_clock(config, SystemClock)
    }
}

impl<C: Clock> RotationEngine<C> {
    pub fn start_with_clock(config: &RotationConfig, clock: C) -> Result<Self> {
        let rotator = Rotator::with_clock(config, clock)?;
        let active = rotator.next_file()?;

        Ok(Self {
            policy: RotationPolicy::from_config(config),
            rotator,
            active,
            summary: RunSummary {
                files_created: 1,
                ..Default::default()
            },
        })
    }

    pub fn active_path(&self) -> &Path {
        self.active.path()
    }

    /// Copy `input` until end-of-input or a read error.
    ///
    /// Only a failure to create a rotated file ends the run with an error.
    /// The last file is closed without a rotation.
    pub fn run<R: Read, W: Write>(self, mut input: R, mut output: W) -> Result<RunSummary> {
        let RotationEngine {
            policy,
            rotator,
            mut active,
            mut summary,
        } = self;
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];

        loop {
            let n = match input.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    error!("read error: {}", e);
                    summary.read_error = true;
                    break;
                }
            };
            let chunk = &buffer[..n];
            summary.bytes_read += n as u64;

            let echoed = write_counted(&mut output, chunk);
            if let Err(e) = output.flush() {
                debug!("Failed to flush output: {}", e);
            }
            let logged = active.write_chunk(chunk);

            if echoed != logged {
                warn!("*** write mis-match {}/{}", echoed, logged);
            }

            let age = active.age_secs(rotator.clock().now());
            if policy.should_rotate(age, active.bytes_written()) {
                debug!(
                    "Rotating {} after {}s and {} bytes",
                    active.path().display(),
                    age,
                    active.bytes_written()
                );
                active = rotate(&rotator, active)?;
                summary.rotations += 1;
                summary.files_created += 1;
            }
        }

        if let Err(e) = active.close() {
            warn!("Failed to close log file: {}", e);
        }

        info!(
            "Input closed after {} bytes, {} rotations",
            summary.bytes_read, summary.rotations
        );
        Ok(summary)
    }
}

/// Newline-terminate and close the current file, then open the next one
fn rotate<C: Clock>(rotator: &Rotator<C>, current: ActiveFile) -> Result<ActiveFile> {
    let path = current.path().to_path_buf();
    if let Err(e) = current.finish() {
        warn!("Failed to finish {}: {}", path.display(), e);
    }
    rotator.next_file()
}
