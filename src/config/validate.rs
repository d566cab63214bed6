// src/config/validate.rs

use crate::config::model::GuardConfig;
use crate::config::value::Value;
use crate::errors::{GuardError, Result};

const PATH_SUFFIX: &str = "_path";
const CONCAT_SUFFIX: &str = "_concat";
const OPTIONS_KEY: &str = "guard_options";

/// Check the shape of the keys the compiler reads.
///
/// - `<language>_path` must be a scalar
/// - `<language>_concat` must be a list of strings
/// - `guard_options` must be a table of tables, keyed by plugin
pub fn validate_config(cfg: &GuardConfig) -> Result<()> {
    for (key, value) in cfg.entries() {
        if key == OPTIONS_KEY {
            validate_guard_options(value)?;
        } else if key.ends_with(PATH_SUFFIX) {
            validate_path(key, value)?;
        } else if key.ends_with(CONCAT_SUFFIX) {
            validate_concat_list(key, value)?;
        }
    }
    Ok(())
}

fn validate_path(key: &str, value: &Value) -> Result<()> {
    if !value.is_scalar() {
        return Err(GuardError::ConfigError(format!(
            "'{}' must be a string, got a {}",
            key,
            value.kind()
        )));
    }
    Ok(())
}

fn validate_concat_list(key: &str, value: &Value) -> Result<()> {
    let Some(items) = value.as_list() else {
        return Err(GuardError::ConfigError(format!(
            "'{}' must be a list of file names, got a {}",
            key,
            value.kind()
        )));
    };

    if let Some((idx, bad)) = items.iter().enumerate().find(|(_, v)| v.as_str().is_none()) {
        return Err(GuardError::ConfigError(format!(
            "'{}[{}]' must be a string, got a {}",
            key,
            idx,
            bad.kind()
        )));
    }
    Ok(())
}

fn validate_guard_options(value: &Value) -> Result<()> {
    let Some(plugins) = value.as_map() else {
        return Err(GuardError::ConfigError(format!(
            "'{}' must be a table keyed by plugin name, got a {}",
            OPTIONS_KEY,
            value.kind()
        )));
    };

    for (plugin, options) in plugins {
        if options.as_map().is_none() {
            return Err(GuardError::ConfigError(format!(
                "'{}.{}' must be a table of options, got a {}",
                OPTIONS_KEY,
                plugin,
                options.kind()
            )));
        }
    }
    Ok(())
}
