//! CLI for the urlsan URL sanitizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use urlsan_core::bench::DEFAULT_BENCH_DEPTH;
use urlsan_core::config::{self, OutputFormat};
use urlsan_core::Sanitizer;

use commands::{run_bench, run_demo, run_inspect, run_sanitize};

/// Top-level CLI for the urlsan URL sanitizer.
#[derive(Debug, Parser)]
#[command(name = "urlsan")]
#[command(about = "urlsan: strip obfuscation from untrusted URLs and block script schemes", long_about = None)]
pub struct Cli {
    /// Cap normalization passes (overrides `max_passes` in config.toml).
    #[arg(long, global = true, value_name = "N")]
    pub max_passes: Option<usize>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Sanitize URLs, one result per line. Reads stdin when no URL is given.
    Sanitize {
        /// URLs to sanitize.
        urls: Vec<String>,
    },

    /// Show how a URL is decoded, classified and rewritten.
    Inspect {
        /// URL to inspect.
        url: String,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Sanitize a set of built-in sample URLs.
    Demo,

    /// Time the engine on generated adversarial payloads.
    Bench {
        /// Nesting depth of each payload.
        #[arg(long, default_value_t = DEFAULT_BENCH_DEPTH, value_name = "N")]
        depth: usize,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mut sanitizer = Sanitizer::from_config(&cfg);
        if let Some(n) = cli.max_passes {
            sanitizer = sanitizer.with_max_passes(n);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::Sanitize { urls } => {
                run_sanitize(&sanitizer, &urls, io::stdin().lock(), &mut out)?
            }
            CliCommand::Inspect { url, json } => {
                let format = if json { OutputFormat::Json } else { cfg.output };
                run_inspect(&sanitizer, &url, format, &mut out)?;
            }
            CliCommand::Demo => run_demo(&sanitizer, &mut out)?,
            CliCommand::Bench { depth } => run_bench(&sanitizer, depth, &mut out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
