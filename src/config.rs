//! Configuration for a backup run.
//!
//! The configuration lives in a small TOML file whose path comes from the
//! `BACKUP_CONFIG_PATH` environment variable (or the `--config` flag). It
//! is read once at startup, validated into an immutable [`Config`], and
//! passed by parameter from there on.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "BACKUP_CONFIG_PATH";

/// The configuration document as written on disk. Keys are camelCase,
/// matching the file format; values are raw strings until validated.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    dir_path: String,
    server: String,
    backup_type: String,
    archive_file_name: String,
}

/// Which transport ships the archive off the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupType {
    Scp,
    Rclone,
}

impl FromStr for BackupType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scp" => Ok(BackupType::Scp),
            "rclone" => Ok(BackupType::Rclone),
            other => Err(Error::InvalidBackupType(other.to_string())),
        }
    }
}

/// Validated configuration for a single backup run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to archive.
    pub dir_path: PathBuf,
    /// Transport destination: `host:path` for scp, `remote:path` for rclone.
    pub server: String,
    /// Transport selection, decided once at load time.
    pub backup_type: BackupType,
    /// Prefix for the generated archive's name.
    pub archive_file_name: String,
}

impl Config {
    /// Reads and validates the configuration file at `path`.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if the file cannot be read or
    /// parsed or a key is empty, and [`Error::InvalidBackupType`] if
    /// `backupType` is neither "scp" nor "rclone".
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "failed to read configuration file '{}': {e}",
                path.display()
            ))
        })?;
        let raw: RawConfig = toml::from_str(&text).map_err(|e| {
            Error::Configuration(format!(
                "failed to parse configuration file '{}': {e}",
                path.display()
            ))
        })?;
        Config::try_from(raw)
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let keys = [
            ("dirPath", &raw.dir_path),
            ("server", &raw.server),
            ("backupType", &raw.backup_type),
            ("archiveFileName", &raw.archive_file_name),
        ];
        for (key, value) in keys {
            if value.trim().is_empty() {
                return Err(Error::Configuration(format!(
                    "configuration key '{key}' must not be empty"
                )));
            }
        }
        Ok(Config {
            dir_path: PathBuf::from(raw.dir_path),
            server: raw.server,
            backup_type: raw.backup_type.parse()?,
            archive_file_name: raw.archive_file_name,
        })
    }
}
