//! CLI for the cdnimg delivery-URL optimizer.

mod commands;

use anyhow::Result;
use cdnimg_core::config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use commands::{run_completions, run_optimize, run_srcset, run_variant};

/// Top-level CLI for the cdnimg delivery-URL optimizer.
#[derive(Debug, Parser)]
#[command(name = "cdnimg")]
#[command(about = "cdnimg: Cloudinary delivery-URL optimizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite URLs into format/quality-optimized delivery form.
    Optimize {
        /// Image URLs to optimize. Non-CDN URLs pass through unchanged.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Produce a width-bound optimized variant of each URL.
    Variant {
        /// Target display width in pixels.
        #[arg(long, value_name = "PIXELS")]
        width: u32,

        /// Quality hint. Accepted for parity with the rendering pipeline;
        /// the emitted directive is currently always q_auto.
        #[arg(long, value_name = "Q")]
        quality: Option<u8>,

        /// Image URLs to transform.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Emit an HTML srcset attribute value across the configured width ladder.
    Srcset {
        /// Image URL.
        url: String,

        /// Use only the device-width ladder (skip icon/thumbnail widths).
        #[arg(long)]
        device_only: bool,
    },

    /// Generate shell completions for the cdnimg binary.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Optimize { urls } => run_optimize(&urls),
            CliCommand::Variant {
                width,
                quality,
                urls,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_variant(&urls, width, quality.or(cfg.quality))
            }
            CliCommand::Srcset { url, device_only } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_srcset(&cfg, &url, device_only)
            }
            // Completions write a script to stdout; no config involved.
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests;
