//! CLI for jarpath.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use jarpath_core::config;
use jarpath_core::Resolver;
use std::path::PathBuf;

use commands::{run_completions, run_from_path, run_man, run_parent, run_resolve};

/// Top-level CLI for jarpath.
#[derive(Debug, Parser)]
#[command(name = "jarpath")]
#[command(about = "jarpath: resolve relative paths against plain and jar: locators", long_about = None)]
pub struct Cli {
    /// Separator in relative paths to rewrite to `/` (overrides config.toml).
    #[arg(long, global = true, value_name = "CHAR")]
    pub separator: Option<char>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the parent directory locator.
    Parent {
        /// Base locator, e.g. `jar:file:/x.jar!/dir/map.tmx`.
        locator: String,
    },

    /// Resolve relative paths against a base locator, one result per line.
    Resolve {
        /// Base locator (file or directory).
        locator: String,
        /// Relative paths. With none, the base locator is printed unchanged.
        paths: Vec<String>,
    },

    /// Turn a filesystem path into a `file:` locator (no existence check).
    FromPath {
        /// Filesystem path; relative paths are taken from the current directory.
        path: PathBuf,
        /// Treat the path as a directory (adds the trailing `/`).
        #[arg(long)]
        dir: bool,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
            CliCommand::FromPath { path, dir } => run_from_path(&path, dir)?,
            CliCommand::Parent { locator } => {
                let resolver = load_resolver(cli.separator)?;
                run_parent(&resolver, &locator)?;
            }
            CliCommand::Resolve { locator, paths } => {
                let resolver = load_resolver(cli.separator)?;
                run_resolve(&resolver, &locator, &paths)?;
            }
        }

        Ok(())
    }
}

fn load_resolver(separator: Option<char>) -> Result<Resolver> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let mut options = cfg.resolver_options();
    if let Some(sep) = separator {
        options.native_separator = sep;
    }
    Ok(Resolver::new(options))
}

#[cfg(test)]
mod tests;
