use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified result type for all fallible operations in offsite.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can terminate a backup run. None of these are
/// retried; each one ends the run with exit code 1.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be located, read, or parsed,
    /// or a required key was empty.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The `backupType` key holds something other than "scp" or "rclone".
    #[error("invalid backup type '{0}', can be \"scp\" or \"rclone\"")]
    InvalidBackupType(String),

    /// The archiver process could not be started or exited non-zero.
    #[error("failed to create archive {path:?}: {reason}")]
    ArchiveCreation { path: PathBuf, reason: String },

    /// The transport process could not be started or exited non-zero.
    #[error("failed to copy {file:?} to '{destination}' via {transport}: {reason}")]
    Transfer {
        transport: &'static str,
        file: PathBuf,
        destination: String,
        reason: String,
    },

    /// The archive was shipped but the local copy could not be removed.
    #[error("failed to delete local archive {path:?}: {source}")]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
