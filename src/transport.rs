//! Transports that ship the archive off the local machine.
//!
//! Both transports re-execute a system binary (`scp` or `rclone`) and
//! treat a non-zero exit or a spawn failure as a transfer failure.

use std::path::Path;
use std::process::Command;

use crate::config::BackupType;
use crate::error::{Error, Result};

/// Copies a local file to a remote destination.
pub trait Transport {
    /// Copies `file` to `destination`.
    fn transfer(&self, file: &Path, destination: &str) -> Result<()>;

    /// Tool name, for diagnostics.
    fn name(&self) -> &'static str;
}

/// `scp <file> <destination>` where destination is `host:path`.
pub struct ScpTransport;

impl Transport for ScpTransport {
    fn transfer(&self, file: &Path, destination: &str) -> Result<()> {
        let mut cmd = Command::new("scp");
        cmd.arg(file).arg(destination);
        run_transfer(cmd, self.name(), file, destination)
    }

    fn name(&self) -> &'static str {
        "scp"
    }
}

/// `rclone copy <file> <destination>` where destination is `remote:path`.
pub struct RcloneTransport;

impl Transport for RcloneTransport {
    fn transfer(&self, file: &Path, destination: &str) -> Result<()> {
        let mut cmd = Command::new("rclone");
        cmd.arg("copy").arg(file).arg(destination);
        run_transfer(cmd, self.name(), file, destination)
    }

    fn name(&self) -> &'static str {
        "rclone"
    }
}

/// Returns the transport selected by the configuration.
pub fn for_backup_type(backup_type: BackupType) -> Box<dyn Transport> {
    match backup_type {
        BackupType::Scp => Box::new(ScpTransport),
        BackupType::Rclone => Box::new(RcloneTransport),
    }
}

fn run_transfer(
    mut cmd: Command,
    transport: &'static str,
    file: &Path,
    destination: &str,
) -> Result<()> {
    let status = cmd.status().map_err(|e| Error::Transfer {
        transport,
        file: file.to_path_buf(),
        destination: destination.to_string(),
        reason: format!("failed to start {transport}: {e}"),
    })?;
    if !status.success() {
        return Err(Error::Transfer {
            transport,
            file: file.to_path_buf(),
            destination: destination.to_string(),
            reason: format!("{transport} exited with {status}"),
        });
    }
    Ok(())
}
