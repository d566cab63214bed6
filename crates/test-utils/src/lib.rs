pub mod builders;

use std::path::PathBuf;
use std::sync::{Arc, Once};

use guardgen::config::GuardConfig;
use guardgen::fs::mock::MockFileSystem;
use guardgen::guardfile::Guardfile;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Base directory used for every in-memory project.
pub const PROJECT_DIR: &str = "/project";

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// A Guardfile engine wired to an in-memory filesystem.
pub struct MockProject {
    pub fs: MockFileSystem,
    pub guardfile: Guardfile,
}

impl MockProject {
    pub fn new(config: GuardConfig) -> Self {
        let fs = MockFileSystem::new();
        let guardfile = Guardfile::new(Arc::new(fs.clone()), Arc::new(config), PROJECT_DIR);
        Self { fs, guardfile }
    }

    /// Seed the Guardfile with existing contents.
    pub fn with_guardfile(self, contents: &str) -> Self {
        self.fs.add_file(self.guardfile_path(), contents);
        self
    }

    pub fn guardfile_path(&self) -> PathBuf {
        self.guardfile.path()
    }

    /// Current Guardfile text; panics if it was never written.
    pub fn guardfile_contents(&self) -> String {
        self.fs
            .contents(self.guardfile_path())
            .expect("Guardfile has not been written")
    }
}
