//! CLI for the bccr randomizer client.

mod commands;

use anyhow::Result;
use bccr_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_checksum, run_print_conf, run_randomize};

/// Top-level CLI for the bccr randomizer client.
#[derive(Debug, Parser)]
#[command(name = "bccr")]
#[command(about = "bccr: Battle Chip Challenge ROM randomizer client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload a ROM for randomization and download the result.
    Randomize {
        /// Path to the Battle Chip Challenge ROM image.
        rom: PathBuf,

        /// Configuration file to upload. Defaults to the stock template
        /// (see `print-conf`).
        #[arg(long)]
        conf: Option<PathBuf>,

        /// Seed to request. "0" omits the seed and lets the server choose.
        #[arg(long, default_value = "0")]
        seed: String,

        /// Directory to save the randomized ROM into (default: current dir).
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Print the stock configuration template (save and edit it, then pass
    /// it back with `randomize --conf`).
    PrintConf,

    /// Compute SHA-256 of a file (e.g. a ROM or a downloaded artifact).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Randomize {
                rom,
                conf,
                seed,
                out_dir,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let out_dir = match out_dir {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                run_randomize(&cfg, &rom, conf.as_deref(), &seed, &out_dir).await?;
            }
            CliCommand::PrintConf => run_print_conf(),
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}
