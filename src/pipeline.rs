//! The backup pipeline: archive the directory, ship the archive, delete
//! the local copy.
//!
//! The run is a strict linear sequence with early termination on any
//! step failure. The pipeline owns the archive file for the whole run:
//! after a failed transfer the local archive is removed best-effort, so
//! no artifact is left behind regardless of how the run ends.

use std::path::{Path, PathBuf};
use std::{fs, io};

use chrono::Local;

use crate::archive::{Archiver, archive_file_name};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::transport::Transport;

/// Drives one backup run against an archiver and a transport.
pub struct Pipeline<'a> {
    config: &'a Config,
    archiver: &'a dyn Archiver,
    transport: &'a dyn Transport,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a Config,
        archiver: &'a dyn Archiver,
        transport: &'a dyn Transport,
    ) -> Self {
        Self {
            config,
            archiver,
            transport,
        }
    }

    /// Runs the full pipeline: archive, transfer, delete.
    ///
    /// Returns the name of the archive that was shipped.
    ///
    /// # Errors
    /// Any step failure ends the run. After a failed archive or transfer
    /// step the local archive is removed best-effort; a failed final
    /// delete is reported as [`Error::Cleanup`] even though the remote
    /// copy succeeded, because local state is left inconsistent.
    pub fn run(&self) -> Result<PathBuf> {
        let archive = PathBuf::from(archive_file_name(
            &self.config.archive_file_name,
            Local::now(),
        ));
        self.run_with_archive(&archive)?;
        Ok(archive)
    }

    fn run_with_archive(&self, archive: &Path) -> Result<()> {
        if let Err(e) = self.archiver.archive(&self.config.dir_path, archive) {
            // The archiver may have written a partial file before dying.
            remove_best_effort(archive);
            return Err(e);
        }

        if let Err(e) = self.transport.transfer(archive, &self.config.server) {
            remove_best_effort(archive);
            return Err(e);
        }

        fs::remove_file(archive).map_err(|source| Error::Cleanup {
            path: archive.to_path_buf(),
            source,
        })
    }
}

/// Removes the archive after a failed step. The step's own error is the
/// one reported, so a delete failure here is only printed.
fn remove_best_effort(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => eprintln!("failed to delete local archive '{}': {e}", path.display()),
    }
}
