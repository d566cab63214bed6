// src/compile/mod.rs

//! Stub compilation: turning a raw template into a Guardfile block.
//!
//! Three placeholder kinds are resolved, in this order:
//! - `{{<lang>Path}}` → config `<lang>_path`
//! - `{{options}}` → config `guard_options.<plugin>`, as Ruby keyword pairs
//! - `{{files}}` → config `<lang>_concat`, concat plugins only
//!
//! Missing config never fails compilation; the placeholder resolves to empty
//! text and a warning is logged.

pub mod files;
pub mod format;

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::config::ConfigProvider;
use crate::plugin::Plugin;

pub use files::{is_minified, resolve_concat_list, strip_extension};
pub use format::{attributes, RubyLiteral};

pub const OPTIONS_PLACEHOLDER: &str = "{{options}}";
pub const FILES_PLACEHOLDER: &str = "{{files}}";

static PATH_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\{\{([a-z]+?)Path\}\}").expect("valid path placeholder regex")
});

/// Compiles stubs against a configuration snapshot.
#[derive(Clone, Copy)]
pub struct StubCompiler<'a> {
    config: &'a dyn ConfigProvider,
}

impl<'a> StubCompiler<'a> {
    pub fn new(config: &'a dyn ConfigProvider) -> Self {
        Self { config }
    }

    /// Resolve every placeholder in `stub` for `plugin`.
    pub fn compile(&self, stub: &str, plugin: &Plugin) -> String {
        let stub = self.apply_paths_to_stub(stub);
        let stub = self.apply_options(&stub, plugin);

        match plugin.concat_language() {
            Some(language) => self.apply_file_list(&stub, language),
            None => stub,
        }
    }

    /// Replace each `{{<lang>Path}}` with config `<lang>_path`.
    ///
    /// The placeholder name is matched case-insensitively but the captured
    /// `<lang>` is used as written. Each occurrence is looked up separately.
    pub fn apply_paths_to_stub(&self, stub: &str) -> String {
        PATH_PLACEHOLDER
            .replace_all(stub, |caps: &Captures| {
                let key = format!("{}_path", &caps[1]);
                match self.config.get(&key) {
                    Some(value) => value.to_string(),
                    None => {
                        warn!(%key, "path placeholder has no config value; leaving it empty");
                        String::new()
                    }
                }
            })
            .into_owned()
    }

    /// Replace `{{options}}` with `", :key => value, ..."`, or with nothing.
    pub fn apply_options(&self, stub: &str, plugin: &Plugin) -> String {
        let key = format!("guard_options.{}", plugin.name());
        let formatted = match self.config.get(&key) {
            Some(value) => match value.as_map() {
                Some(options) if !options.is_empty() => {
                    format!(", {}", attributes(options).join(", "))
                }
                Some(_) => String::new(),
                None => {
                    warn!(%key, kind = value.kind(), "plugin options are not a table; ignoring");
                    String::new()
                }
            },
            None => {
                debug!(%key, "no options configured");
                String::new()
            }
        };

        stub.replace(OPTIONS_PLACEHOLDER, &formatted)
    }

    /// Replace `{{files}}` with the resolved concat list, space separated.
    pub fn apply_file_list(&self, stub: &str, language: &str) -> String {
        let files = self.get_files_to_concat(language);
        stub.replace(FILES_PLACEHOLDER, &files.join(" "))
    }

    /// Files to concatenate for `language`, minified outputs removed and
    /// extensions stripped.
    pub fn get_files_to_concat(&self, language: &str) -> Vec<String> {
        let key = format!("{language}_concat");
        match self.config.get(&key) {
            Some(value) => match value.as_list() {
                Some(entries) => resolve_concat_list(entries),
                None => {
                    warn!(%key, kind = value.kind(), "concat list is not a list; using no files");
                    Vec::new()
                }
            },
            None => {
                warn!(%key, "no concat list configured; using no files");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuardConfig;

    fn config(toml: &str) -> GuardConfig {
        GuardConfig::from_toml_str(toml).unwrap()
    }

    #[test]
    fn paths_resolve_each_placeholder() {
        let cfg = config(
            r#"
sass_path = "app/assets/sass"
css_path = "public/css"
"#,
        );
        let compiler = StubCompiler::new(&cfg);

        let out = compiler.apply_paths_to_stub("in {{sassPath}} out {{CSSPATH}} again {{cssPath}}");
        assert_eq!(out, "in app/assets/sass out  again public/css");
    }

    #[test]
    fn missing_path_resolves_to_empty() {
        let cfg = GuardConfig::default();
        let compiler = StubCompiler::new(&cfg);
        assert_eq!(compiler.apply_paths_to_stub("x{{jsPath}}y"), "xy");
    }

    #[test]
    fn options_become_trailing_keyword_arguments() {
        let cfg = config(
            r#"
[guard_options.sass]
compressed = true
style = "compact"
"#,
        );
        let compiler = StubCompiler::new(&cfg);

        assert_eq!(
            compiler.apply_options("guard :sass{{options}}", &Plugin::new("sass")),
            "guard :sass, :compressed => true, :style => 'compact'"
        );
    }

    #[test]
    fn every_options_token_is_replaced() {
        let cfg = config(
            r#"
[guard_options.sass]
a = 1
"#,
        );
        let compiler = StubCompiler::new(&cfg);

        assert_eq!(
            compiler.apply_options("{{options}}|{{options}}", &Plugin::new("sass")),
            ", :a => 1|, :a => 1"
        );
        assert_eq!(
            compiler.apply_options("{{options}}|{{options}}", &Plugin::new("less")),
            "|"
        );
    }

    #[test]
    fn empty_or_missing_options_leave_no_comma() {
        let cfg = config("[guard_options.sass]\n");
        let compiler = StubCompiler::new(&cfg);

        assert_eq!(
            compiler.apply_options("guard :sass{{options}}", &Plugin::new("sass")),
            "guard :sass"
        );
        assert_eq!(
            compiler.apply_options("guard :less{{options}} do", &Plugin::new("less")),
            "guard :less do"
        );
    }

    #[test]
    fn files_only_applied_for_concat_plugins() {
        let cfg = config(r#"js_concat = ["app.js", "vendor.min.js", "jquery"]"#);
        let compiler = StubCompiler::new(&cfg);
        let stub = "files: %w({{files}})";

        assert_eq!(
            compiler.compile(stub, &Plugin::new("concat-js")),
            "files: %w(app jquery)"
        );
        assert_eq!(compiler.compile(stub, &Plugin::new("uglify")), stub);
    }
}
