// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::default_config_path;

/// Command-line arguments for `guardgen`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "guardgen",
    version,
    about = "Generate and maintain a Guardfile from plugin stubs.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Directory the Guardfile lives in.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Read `guard-<plugin>-stub.txt` templates from this directory instead
    /// of the bundled ones.
    #[arg(long, value_name = "DIR")]
    pub stubs: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GUARDGEN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write a fresh Guardfile with the given plugins.
    Make {
        #[arg(required = true, value_name = "PLUGIN")]
        plugins: Vec<String>,
    },
    /// Recompile plugin blocks in place.
    Update {
        #[arg(required = true, value_name = "PLUGIN")]
        plugins: Vec<String>,
    },
    /// Append plugin blocks to the Guardfile.
    Add {
        #[arg(required = true, value_name = "PLUGIN")]
        plugins: Vec<String>,
    },
    /// Update the concat blocks from the configured file lists.
    Refresh,
    /// Print compiled blocks to stdout without touching the Guardfile.
    Print {
        #[arg(required = true, value_name = "PLUGIN")]
        plugins: Vec<String>,
    },
    /// List the bundled plugin stubs.
    List,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
