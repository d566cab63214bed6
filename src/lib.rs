// src/lib.rs

pub mod cli;
pub mod compile;
pub mod config;
pub mod errors;
pub mod fs;
pub mod guardfile;
pub mod logging;
pub mod plugin;
pub mod stubs;

use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::load_and_validate;
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::guardfile::Guardfile;
use crate::stubs::StubRepository;

pub use crate::errors::GuardError;
pub use crate::plugin::Plugin;

/// High-level entry point used by `main.rs`.
///
/// Wires the real filesystem and the TOML config into a [`Guardfile`] and
/// dispatches the subcommand.
pub fn run(args: CliArgs) -> Result<()> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    if let Command::List = args.command {
        for plugin in StubRepository::known_plugins() {
            println!("{plugin}");
        }
        return Ok(());
    }

    let config = load_and_validate(fs.as_ref(), &args.config)?;
    debug!(config = ?args.config, "config loaded");

    let mut guardfile = Guardfile::new(fs.clone(), Arc::new(config), &args.dir);
    if let Some(dir) = &args.stubs {
        guardfile = guardfile.with_stubs(StubRepository::from_dir(fs.clone(), dir));
    }

    match args.command {
        Command::Make { plugins } => guardfile.make(&plugins)?,
        Command::Update { plugins } => {
            for plugin in &plugins {
                let replaced = guardfile.update_signature(plugin)?;
                info!(%plugin, replaced, "updated signature");
            }
        }
        Command::Add { plugins } => {
            for plugin in &plugins {
                guardfile.append_signature(plugin)?;
                info!(%plugin, "added signature");
            }
        }
        Command::Refresh => {
            let refreshed = guardfile.refresh()?;
            info!(?refreshed, "refreshed concat signatures");
        }
        Command::Print { plugins } => println!("{}", guardfile.get_stubs(&plugins)?),
        Command::List => {}
    }

    Ok(())
}
