//! offsite: a one-shot directory backup shipper.
//!
//! Archives a configured directory into a timestamped tarball, copies it
//! to a remote destination via scp or rclone, then removes the local
//! archive. This crate holds the configuration, archiver, transport, and
//! pipeline logic behind the `offsite` binary.

pub mod archive;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod transport;

pub use error::{Error, Result};
