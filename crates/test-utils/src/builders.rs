#![allow(dead_code)]

use guardgen::config::{GuardConfig, Value};

/// Builder for `GuardConfig` to simplify test setup.
pub struct ConfigBuilder {
    config: GuardConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GuardConfig::default(),
        }
    }

    /// `<language>_path = "<path>"`
    pub fn path(mut self, language: &str, path: &str) -> Self {
        self.config.set(&format!("{language}_path"), path);
        self
    }

    /// `<language>_concat = [...]`
    pub fn concat(mut self, language: &str, files: &[&str]) -> Self {
        self.config.set(&format!("{language}_concat"), files.to_vec());
        self
    }

    /// `guard_options.<plugin>.<key> = <value>`
    pub fn option(mut self, plugin: &str, key: &str, value: impl Into<Value>) -> Self {
        self.config
            .set(&format!("guard_options.{plugin}.{key}"), value);
        self
    }

    /// The usual Laravel-style asset layout.
    pub fn with_default_paths(self) -> Self {
        self.path("js", "public/js")
            .path("css", "public/css")
            .path("sass", "app/assets/sass")
            .path("less", "app/assets/less")
            .path("coffee", "app/assets/coffee")
    }

    pub fn build(self) -> GuardConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
