// src/plugin.rs

//! Plugin identifiers.

use std::fmt;

/// Prefix shared by the file-concatenation plugins (`concat-js`, `concat-css`).
pub const CONCAT_PREFIX: &str = "concat";

/// A plugin identifier such as `"sass"` or `"concat-js"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plugin {
    name: String,
}

impl Plugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// For concat-family identifiers, the language after the separator.
    ///
    /// `"concat-js"` → `Some("js")`. A bare `"concat"` or `"concatenate"` is
    /// not part of the family.
    pub fn concat_language(&self) -> Option<&str> {
        let rest = self.name.strip_prefix(CONCAT_PREFIX)?;
        let mut chars = rest.chars();
        let sep = chars.next()?;
        if sep.is_alphanumeric() {
            return None;
        }
        let language = chars.as_str();
        (!language.is_empty()).then_some(language)
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Plugin {
    fn from(name: &str) -> Self {
        Plugin::new(name)
    }
}

impl From<String> for Plugin {
    fn from(name: String) -> Self {
        Plugin::new(name)
    }
}
