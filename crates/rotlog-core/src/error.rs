//! Error types for rotlog

use std::path::PathBuf;

/// Exit code for bad arguments or missing parameters
pub const EXIT_USAGE: i32 = 1;

/// Exit code when the log directory or a log file cannot be created
pub const EXIT_STARTUP: i32 = 2;

/// rotlog error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid age limit: {0}")]
    InvalidAge(String),

    #[error("Invalid size limit: {0}")]
    InvalidSize(String),

    #[error("Invalid keep count: {0}")]
    InvalidKeep(String),

    #[error("Invalid prefix: {0}")]
    InvalidPrefix(String),

    #[error("missing arguments")]
    MissingArguments,

    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to create log file {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for rotlog
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_age<S: Into<String>>(msg: S) -> Self {
        Error::InvalidAge(msg.into())
    }

    pub fn invalid_size<S: Into<String>>(msg: S) -> Self {
        Error::InvalidSize(msg.into())
    }

    pub fn invalid_keep<S: Into<String>>(msg: S) -> Self {
        Error::InvalidKeep(msg.into())
    }

    /// Errors caused by what the user typed on the command line
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidAge(_)
                | Error::InvalidSize(_)
                | Error::InvalidKeep(_)
                | Error::InvalidPrefix(_)
                | Error::MissingArguments
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_user_error() {
            EXIT_USAGE
        } else {
            EXIT_STARTUP
        }
    }
}
