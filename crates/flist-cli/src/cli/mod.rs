//! CLI for the FList template resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use flist_core::config::{self, FlistConfig};
use std::path::PathBuf;

use commands::{run_extract, run_fingerprint, run_resolve};

/// Top-level CLI for FList.
#[derive(Debug, Parser)]
#[command(name = "flist")]
#[command(about = "FList: resolve file templates into destination path → URL tables", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/flist/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve template map files (JSON, or TOML by extension) and print the result as JSON.
    Resolve {
        /// Template map files; each is resolved as its own section.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Prefix for every resolved file name (overrides config).
        #[arg(long)]
        prefix: Option<String>,

        /// Hex width of generated unique names, 4 to 128 (overrides config).
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(4..=128))]
        fingerprint_length: Option<u64>,
    },

    /// Show the file name, base name and extension derived from a URL.
    Extract {
        url: String,
    },

    /// Print the fingerprint used for a URL's unique name.
    Fingerprint {
        url: String,

        /// Number of hex characters, 4 to 128.
        #[arg(
            long,
            default_value = "8",
            value_name = "N",
            value_parser = clap::value_parser!(u64).range(4..=128)
        )]
        length: u64,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<FlistConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve {
                files,
                prefix,
                fingerprint_length,
            } => {
                let cfg = load_config(cli.config.as_ref())?;
                tracing::debug!("loaded config: {:?}", cfg);
                let mut options = cfg.resolve_options();
                if let Some(prefix) = prefix {
                    options.prefix = prefix;
                }
                if let Some(len) = fingerprint_length {
                    options.fingerprint_length = len as usize;
                }
                run_resolve(&files, &options)?;
            }
            CliCommand::Extract { url } => run_extract(&url)?,
            CliCommand::Fingerprint { url, length } => run_fingerprint(&url, length as usize),
        }

        Ok(())
    }
}
