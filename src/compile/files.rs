// src/compile/files.rs

//! File list handling for the concat plugins.

use std::path::Path;

use tracing::warn;

use crate::config::Value;

const MINIFIED_SUFFIXES: &[&str] = &[".min.js", ".min.css"];

/// True for merged/minified outputs (`*.min.js`, `*.min.css`, any case).
///
/// These are what the concat and uglify plugins produce, so they must never
/// be fed back in as sources.
pub fn is_minified(file: &str) -> bool {
    let lower = file.to_lowercase();
    MINIFIED_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Drop the extension from a configured entry.
///
/// `"js/app.js"` → `"app"`. Entries without an extension name a module the
/// concat plugin resolves itself (`"vendor/jquery"`) and are kept verbatim.
pub fn strip_extension(file: &str) -> String {
    let path = Path::new(file);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) if !ext.is_empty() => stem.to_string_lossy().into_owned(),
        _ => file.to_string(),
    }
}

/// Turn a `<language>_concat` list into the names passed to the concat plugin.
///
/// Order is kept and nothing is deduplicated. Non-string entries are skipped.
pub fn resolve_concat_list(entries: &[Value]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| match entry.as_str() {
            Some(file) => Some(file),
            None => {
                warn!(kind = entry.kind(), "skipping non-string concat entry");
                None
            }
        })
        .filter(|file| !is_minified(file))
        .map(strip_extension)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minified_outputs_are_detected_case_insensitively() {
        assert!(is_minified("main.min.js"));
        assert!(is_minified("css/MAIN.MIN.CSS"));
        assert!(!is_minified("main.js"));
        assert!(!is_minified("admin.jsx"));
        assert!(!is_minified("min.js"));
    }

    #[test]
    fn extensions_are_stripped_but_bare_modules_kept() {
        assert_eq!(strip_extension("app.js"), "app");
        assert_eq!(strip_extension("js/app.js"), "app");
        assert_eq!(strip_extension("jquery.ui.js"), "jquery.ui");
        assert_eq!(strip_extension("vendor/jquery"), "vendor/jquery");
        assert_eq!(strip_extension("jquery"), "jquery");
    }

    #[test]
    fn resolve_filters_then_strips_in_order() {
        let entries = vec![
            Value::from("app.js"),
            Value::from("vendor.min.js"),
            Value::from("jquery"),
            Value::from(7i64),
            Value::from("app.js"),
        ];
        assert_eq!(resolve_concat_list(&entries), vec!["app", "jquery", "app"]);
    }
}
