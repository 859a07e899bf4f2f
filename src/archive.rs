//! Archive creation via the system `tar` binary.

use std::path::Path;
use std::process::Command;

use chrono::{DateTime, Local};

use crate::error::{Error, Result};

/// Produces a compressed archive of a directory.
///
/// The pipeline only depends on this trait, so tests can drive it with
/// a fake instead of spawning processes.
pub trait Archiver {
    /// Compresses `dir` into an archive at `out`.
    fn archive(&self, dir: &Path, out: &Path) -> Result<()>;
}

/// Spawns `tar -czf <out> <dir>` and waits for it to finish.
pub struct TarArchiver;

impl Archiver for TarArchiver {
    fn archive(&self, dir: &Path, out: &Path) -> Result<()> {
        let status = Command::new("tar")
            .arg("-czf")
            .arg(out)
            .arg(dir)
            .status()
            .map_err(|e| Error::ArchiveCreation {
                path: out.to_path_buf(),
                reason: format!("failed to start tar: {e}"),
            })?;
        if !status.success() {
            return Err(Error::ArchiveCreation {
                path: out.to_path_buf(),
                reason: format!("tar exited with {status}"),
            });
        }
        Ok(())
    }
}

/// Archive file name for a prefix and wall-clock time:
/// `<prefix>_<YYYY-MM-DD_HH-MM>.tar.gz`.
///
/// The name carries minute resolution only; two runs within the same
/// minute produce the same name and the later one overwrites the earlier.
pub fn archive_file_name(prefix: &str, time: DateTime<Local>) -> String {
    format!("{prefix}_{}.tar.gz", time.format("%Y-%m-%d_%H-%M"))
}
