//! Recursive directory creation (`mkdir -p`)

use rotlog_core::{Error, Result};
use std::fs::{self, DirBuilder};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

#[cfg(unix)]
use std::os::unix::fs::DirBuilderExt;

/// Create `path` and every missing ancestor, each with `mode`.
///
/// Existing directories are fine, including ones created by another
/// process between our check and our `mkdir`. An existing path segment
/// that is not a directory is an error.
pub fn ensure_dir(path: &Path, mode: u32) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::DirectoryCreate {
            path: path.to_path_buf(),
            source: ErrorKind::NotFound.into(),
        });
    }

    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => continue,
            Component::ParentDir | Component::Normal(_) => make_dir(&current, mode)?,
        }
    }

    Ok(())
}

fn make_dir(path: &Path, mode: u32) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory(path.to_path_buf())),
        Err(_) => match dir_builder(mode).create(path) {
            Ok(()) => {
                debug!("Created directory {}", path.display());
                Ok(())
            }
            // Lost a race with another creator
            Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(source) => Err(Error::DirectoryCreate {
                path: path.to_path_buf(),
                source,
            }),
        },
    }
}

#[cfg(unix)]
fn dir_builder(mode: u32) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.mode(mode);
    builder
}

#[cfg(not(unix))]
fn dir_builder(_mode: u32) -> DirBuilder {
    DirBuilder::new()
}
