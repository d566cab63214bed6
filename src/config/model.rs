// src/config/model.rs

use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::value::Value;
use crate::errors::Result;

/// Read-only key lookup used by the compiler.
///
/// Keys are dotted paths into the configuration tree, e.g. `"js_path"` or
/// `"guard_options.sass"`. Every call is a fresh lookup; callers must not
/// cache results across compilations.
pub trait ConfigProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
}

/// Configuration as read from a TOML file.
///
/// ```toml
/// js_path = "public/js"
/// css_path = "public/css"
/// sass_path = "app/assets/sass"
/// js_concat = ["jquery", "app.js"]
///
/// [guard_options.sass]
/// style = ":compressed"
/// ```
///
/// The whole document is kept as one ordered tree; there is no fixed schema
/// because the set of `<language>_path` keys is open-ended.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct GuardConfig {
    root: IndexMap<String, Value>,
}

impl GuardConfig {
    /// Parse a TOML document without validating it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Top-level entries, in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// Insert a value at a dotted key, creating intermediate tables.
    ///
    /// A non-table value sitting on the path is replaced by a table.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut table = &mut self.root;
        for segment in segments {
            let slot = table
                .entry(segment.to_string())
                .or_insert_with(|| Value::Map(IndexMap::new()));
            if !matches!(slot, Value::Map(_)) {
                *slot = Value::Map(IndexMap::new());
            }
            match slot {
                Value::Map(inner) => table = inner,
                _ => return,
            }
        }
        table.insert(last.to_string(), value.into());
    }
}

impl ConfigProvider for GuardConfig {
    fn get(&self, key: &str) -> Option<Value> {
        self.lookup(key).cloned()
    }
}
