use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    // Root validation
    #[error("invalid root")]
    InvalidRoot(PathBuf),

    // Traversal
    #[error("permission denied")]
    PermissionDenied(PathBuf),

    #[error("read failure")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WalkError {
    /// The path this error occurred at.
    /// Callers use this to present "Skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::InvalidRoot(p)
            | Self::PermissionDenied(p)
            | Self::ReadFailure { path: p, .. } => p,
        }
    }

    /// Whether the walk can continue after this error.
    ///
    /// Recoverable errors (permission denied, unreadable non-root directories)
    /// are collected into [`WalkResults::skipped`](crate::WalkResults::skipped)
    /// and the walk keeps going.
    ///
    /// An invalid root halts immediately — nothing below it is meaningful.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PermissionDenied(_) | Self::ReadFailure { .. })
    }

    /// Classify an I/O error raised while listing `path`.
    ///
    /// Permission errors get their own variant so callers can tell "you may
    /// not look here" apart from transient I/O trouble.
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied(path)
        } else {
            Self::ReadFailure { path, source }
        }
    }
}
