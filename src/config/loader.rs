// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::GuardConfig;
use crate::config::validate::validate_config;
use crate::errors::Result;
use crate::fs::FileSystem;

/// Read and parse a config file. No validation; see [`load_and_validate`].
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<GuardConfig> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;
    let config = GuardConfig::from_toml_str(&contents)?;
    debug!(?path, keys = config.entries().count(), "loaded config");
    Ok(config)
}

/// Read, parse and validate a config file.
///
/// This is the entry point the CLI uses. Validation only checks the shape of
/// the keys the compiler reads (`*_path`, `*_concat`, `guard_options`);
/// unknown keys are left alone.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<GuardConfig> {
    let config = load_from_path(fs, path)?;
    validate_config(&config)?;
    Ok(config)
}

/// `guard.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("guard.toml")
}
