//! CLI for the DSR dataset source resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dsr_core::config::{self, DsrConfig};
use dsr_core::resolver::SourceResolver;
use dsr_core::source::SourceCategory;
use std::path::PathBuf;

use commands::{run_datasets, run_guess_tree, run_resolve, run_show_config, run_source};

/// Top-level CLI for the DSR dataset source resolver.
#[derive(Debug, Parser)]
#[command(name = "dsr")]
#[command(about = "DSR: map dataset request paths to sources and storage locations", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/dsr/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a request path by data source.
    Source {
        /// Request path, e.g. /community/org/repo.
        path: String,
    },

    /// Resolve a request path to its URL path and storage location.
    Resolve {
        /// Request path, e.g. /flu/ha or /local/zika.
        path: String,

        /// JSON sub-type appended to the file name (tree, meta, ...).
        #[arg(long = "type", value_name = "TYPE")]
        json_type: Option<String>,

        /// Source to validate against; classified from the path when omitted.
        #[arg(long, value_name = "SOURCE")]
        source: Option<SourceCategory>,
    },

    /// List the datasets a manifest-backed source makes available.
    Datasets {
        /// local or live.
        source: SourceCategory,
    },

    /// Guess the gene/segment tree name from path segments.
    GuessTree {
        /// Path segments (slash-separated paths are split).
        #[arg(required = true)]
        segments: Vec<String>,
    },

    /// Show the config file location and effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        run(Cli::parse())
    }
}

/// Runs a parsed command line. Only `resolve`, `datasets` and `config` read
/// the config file; `source` and `guess-tree` never touch it.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let explicit = cli.config.as_deref();
    match cli.command {
        CliCommand::Source { path } => run_source(&path),
        CliCommand::Resolve {
            path,
            json_type,
            source,
        } => {
            let resolver = SourceResolver::from_config(&load_config(explicit)?)?;
            run_resolve(&resolver, &path, source, json_type.as_deref())?;
        }
        CliCommand::Datasets { source } => {
            let resolver = SourceResolver::from_config(&load_config(explicit)?)?;
            run_datasets(&resolver, source)?;
        }
        CliCommand::GuessTree { segments } => run_guess_tree(&segments)?,
        CliCommand::Config => run_show_config(explicit, &load_config(explicit)?)?,
    }

    Ok(())
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<DsrConfig> {
    let cfg = match explicit {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
