use std::path::PathBuf;
use std::process;

use clap::Parser;

use offsite::archive::TarArchiver;
use offsite::config::{CONFIG_PATH_VAR, Config};
use offsite::pipeline::Pipeline;
use offsite::{Error, Result, transport};

/// One-shot directory backup: archive, ship off-machine, clean up.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the backup configuration file.
    #[arg(short, long, env = "BACKUP_CONFIG_PATH")]
    config: Option<PathBuf>,
}

/// Entry point for the offsite binary.
/// Every failure path prints a diagnostic and exits with code 1.
fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(archive) => {
            println!(
                "Archive '{}' created and copied to the remote destination successfully.",
                archive.display()
            );
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<PathBuf> {
    let config_path = cli.config.ok_or_else(|| {
        Error::Configuration(format!(
            "{CONFIG_PATH_VAR} is not set and no --config was given"
        ))
    })?;
    let config = Config::load(&config_path)?;

    let archiver = TarArchiver;
    let transport = transport::for_backup_type(config.backup_type);
    Pipeline::new(&config, &archiver, transport.as_ref()).run()
}
