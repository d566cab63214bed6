// src/guardfile/mod.rs

//! The Guardfile: generating it from stubs and keeping plugin blocks current.

pub mod signature;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::compile::StubCompiler;
use crate::config::ConfigProvider;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::plugin::Plugin;
use crate::stubs::StubRepository;

pub use signature::{find_signatures, replace_signatures};

pub const GUARDFILE_NAME: &str = "Guardfile";

/// Languages the concat plugins exist for, refreshed by [`Guardfile::refresh`].
pub const CONCAT_LANGUAGES: &[&str] = &["js", "css"];

/// A Guardfile in `base_dir`, plus what is needed to compile its blocks.
#[derive(Clone)]
pub struct Guardfile {
    fs: Arc<dyn FileSystem>,
    config: Arc<dyn ConfigProvider>,
    stubs: StubRepository,
    base_dir: PathBuf,
}

impl fmt::Debug for Guardfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guardfile")
            .field("base_dir", &self.base_dir)
            .field("stubs", &self.stubs)
            .finish_non_exhaustive()
    }
}

impl Guardfile {
    /// Guardfile in `base_dir`, using the bundled stubs.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        config: Arc<dyn ConfigProvider>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            config,
            stubs: StubRepository::embedded(),
            base_dir: base_dir.into(),
        }
    }

    pub fn with_stubs(mut self, stubs: StubRepository) -> Self {
        self.stubs = stubs;
        self
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(GUARDFILE_NAME)
    }

    pub fn contents(&self) -> Result<String> {
        Ok(self.fs.read_to_string(&self.path())?)
    }

    /// Overwrite the whole Guardfile.
    pub fn put(&self, contents: &str) -> Result<()> {
        self.fs.write(&self.path(), contents.as_bytes())?;
        Ok(())
    }

    pub fn compiler(&self) -> StubCompiler<'_> {
        StubCompiler::new(self.config.as_ref())
    }

    pub fn get_plugin_stub(&self, plugin: &str) -> Result<String> {
        self.stubs.get_plugin_stub(plugin)
    }

    /// Look up and compile the block for one plugin.
    pub fn compile_plugin(&self, plugin: &Plugin) -> Result<String> {
        let stub = self.get_plugin_stub(plugin.name())?;
        Ok(self.compiler().compile(&stub, plugin))
    }

    /// Compile every plugin and join the blocks with one blank line.
    ///
    /// Order is kept and duplicates produce duplicate blocks. An unknown
    /// plugin fails the whole call.
    pub fn get_stubs<I, S>(&self, plugins: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blocks = plugins
            .into_iter()
            .map(|name| self.compile_plugin(&Plugin::new(name.as_ref())))
            .collect::<Result<Vec<_>>>()?;

        Ok(blocks.join("\n\n"))
    }

    /// Write a fresh Guardfile containing `plugins`.
    pub fn make<I, S>(&self, plugins: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut contents = self.get_stubs(plugins)?;
        contents.push('\n');
        self.put(&contents)?;
        info!(path = ?self.path(), "wrote Guardfile");
        Ok(())
    }

    /// Recompile `plugin` and swap it in for its existing block(s).
    ///
    /// Returns how many blocks were replaced. When there is none the file is
    /// rewritten unchanged; use [`Guardfile::append_signature`] to add one.
    pub fn update_signature(&self, plugin: &str) -> Result<usize> {
        let plugin = Plugin::new(plugin);
        let compiled = self.compile_plugin(&plugin)?;
        let current = self.contents()?;

        let (updated, replaced) = replace_signatures(&current, &plugin, &compiled);
        if replaced == 0 {
            warn!(%plugin, path = ?self.path(), "no existing block for plugin; Guardfile unchanged");
        } else {
            debug!(%plugin, replaced, "replaced plugin block");
        }

        self.put(&updated)?;
        Ok(replaced)
    }

    /// Add the compiled block for `plugin` at the end of the Guardfile.
    ///
    /// A missing Guardfile is treated as empty. Only trailing line breaks of
    /// the existing text are dropped; the last line is otherwise untouched.
    pub fn append_signature(&self, plugin: &str) -> Result<()> {
        let compiled = self.compile_plugin(&Plugin::new(plugin))?;
        let current = if self.fs.exists(&self.path()) {
            self.contents()?
        } else {
            String::new()
        };

        let head = current.trim_end_matches(['\n', '\r']);
        let updated = if head.is_empty() {
            format!("{compiled}\n")
        } else {
            format!("{head}\n\n{compiled}\n")
        };

        self.put(&updated)?;
        debug!(%plugin, "appended plugin block");
        Ok(())
    }

    /// Update the concat blocks for every language with a `<lang>_concat`
    /// list configured. Returns the plugins whose block was found and
    /// replaced; a configured language with no block is left out.
    pub fn refresh(&self) -> Result<Vec<String>> {
        let mut refreshed = Vec::new();
        for language in CONCAT_LANGUAGES {
            if self.config.get(&format!("{language}_concat")).is_none() {
                debug!(%language, "no concat list; skipping");
                continue;
            }
            let plugin = format!("concat-{language}");
            if self.update_signature(&plugin)? > 0 {
                refreshed.push(plugin);
            }
        }
        Ok(refreshed)
    }
}
