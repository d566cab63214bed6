// src/stubs.rs

//! Stub templates, one per plugin.
//!
//! A stub is the Guardfile block for a plugin with `{{...}}` placeholders
//! left in. The default set is compiled into the binary; a directory of
//! `guard-<plugin>-stub.txt` files can be used instead.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::errors::{GuardError, Result};
use crate::fs::FileSystem;

const EMBEDDED: &[(&str, &str)] = &[
    ("coffeescript", include_str!("../stubs/guard-coffeescript-stub.txt")),
    ("concat-css", include_str!("../stubs/guard-concat-css-stub.txt")),
    ("concat-js", include_str!("../stubs/guard-concat-js-stub.txt")),
    ("less", include_str!("../stubs/guard-less-stub.txt")),
    ("phpunit", include_str!("../stubs/guard-phpunit-stub.txt")),
    ("refresher", include_str!("../stubs/guard-refresher-stub.txt")),
    ("sass", include_str!("../stubs/guard-sass-stub.txt")),
    ("uglify", include_str!("../stubs/guard-uglify-stub.txt")),
];

/// File name a plugin's stub is stored under.
pub fn stub_file_name(plugin: &str) -> String {
    format!("guard-{plugin}-stub.txt")
}

#[derive(Clone)]
enum StubSource {
    Embedded,
    Directory {
        fs: Arc<dyn FileSystem>,
        dir: PathBuf,
    },
}

/// Resolves plugin identifiers to raw template text.
#[derive(Clone)]
pub struct StubRepository {
    source: StubSource,
}

impl fmt::Debug for StubRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            StubSource::Embedded => f.write_str("StubRepository(embedded)"),
            StubSource::Directory { dir, .. } => write!(f, "StubRepository({:?})", dir),
        }
    }
}

impl Default for StubRepository {
    fn default() -> Self {
        Self::embedded()
    }
}

impl StubRepository {
    /// The stubs bundled with guardgen.
    pub fn embedded() -> Self {
        Self {
            source: StubSource::Embedded,
        }
    }

    /// Stubs read from `<dir>/guard-<plugin>-stub.txt`.
    pub fn from_dir(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self {
            source: StubSource::Directory {
                fs,
                dir: dir.into(),
            },
        }
    }

    /// Identifiers of the bundled stubs, sorted.
    pub fn known_plugins() -> impl Iterator<Item = &'static str> {
        EMBEDDED.iter().map(|(name, _)| *name)
    }

    /// Raw template for `plugin`, with trailing whitespace removed.
    ///
    /// Fails with [`GuardError::StubNotFound`] when there is no template;
    /// there is no fallback.
    pub fn get_plugin_stub(&self, plugin: &str) -> Result<String> {
        if !is_valid_identifier(plugin) {
            return Err(GuardError::StubNotFound(plugin.to_string()));
        }

        let raw = match &self.source {
            StubSource::Embedded => EMBEDDED
                .iter()
                .find(|(name, _)| *name == plugin)
                .map(|(_, text)| (*text).to_string())
                .ok_or_else(|| GuardError::StubNotFound(plugin.to_string()))?,
            StubSource::Directory { fs, dir } => read_stub_file(fs.as_ref(), dir, plugin)?,
        };

        Ok(raw.trim_end().to_string())
    }
}

fn read_stub_file(fs: &dyn FileSystem, dir: &Path, plugin: &str) -> Result<String> {
    let path = dir.join(stub_file_name(plugin));
    if !fs.is_file(&path) {
        debug!(?path, "no stub file");
        return Err(GuardError::StubNotFound(plugin.to_string()));
    }
    Ok(fs.read_to_string(&path)?)
}

/// Identifiers end up in a file name; keep them to a single path component.
fn is_valid_identifier(plugin: &str) -> bool {
    !plugin.is_empty()
        && plugin
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
