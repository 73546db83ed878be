//! CLI for sumcheck.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use sumcheck_core::config;
use sumcheck_core::Algorithm;

use commands::{run_checksum, run_completions, run_verify, VerifyArgs};

/// Top-level CLI for sumcheck.
#[derive(Debug, Parser)]
#[command(name = "sumcheck")]
#[command(about = "sumcheck: verify files in a directory against a checksum manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify every file listed in a directory's manifest.
    Verify {
        /// Directory containing the files (default: current directory).
        dir: Option<PathBuf>,
        /// Manifest path (default: <DIR>/md5.txt, or manifest_name from config).
        #[arg(long, short)]
        manifest: Option<PathBuf>,
        /// Checksum algorithm: md5, sha256 or sha512.
        #[arg(long, short)]
        algorithm: Option<Algorithm>,
        /// Bytes read per chunk while hashing.
        #[arg(long, value_name = "BYTES")]
        chunk_size: Option<usize>,
        /// Print outcomes as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Compute the checksum of a single file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
        /// Checksum algorithm: md5, sha256 or sha512.
        #[arg(long, short)]
        algorithm: Option<Algorithm>,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Verify {
                dir,
                manifest,
                algorithm,
                chunk_size,
                json,
            } => {
                let dir = match dir {
                    Some(d) => d,
                    None => std::env::current_dir()?,
                };
                let args = VerifyArgs {
                    dir,
                    manifest,
                    algorithm,
                    chunk_size,
                    json,
                };
                run_verify(&cfg, &args)?;
            }
            CliCommand::Checksum { path, algorithm } => {
                run_checksum(&path, algorithm.unwrap_or(cfg.algorithm), cfg.chunk_size)?;
            }
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
