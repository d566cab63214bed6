// src/compile/format.rs

//! Rendering config values as Ruby literals for the Guardfile.

use std::fmt;

use indexmap::IndexMap;

use crate::config::Value;

/// A config value as it will appear in Ruby source.
///
/// Strings that start with `:` become bare symbols (`":compressed"` →
/// `:compressed`). This is a naming convention, not a type: a string that
/// legitimately starts with a colon is emitted as a symbol too.
///
/// Hash keys and option names are written as `:key` unchanged, so a key that
/// is not a valid Ruby identifier (`output-style`) yields an invalid symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum RubyLiteral<'a> {
    Str(&'a str),
    Symbol(&'a str),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Array(Vec<RubyLiteral<'a>>),
    Hash(Vec<(&'a str, RubyLiteral<'a>)>),
}

impl<'a> From<&'a Value> for RubyLiteral<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) if s.starts_with(':') => RubyLiteral::Symbol(s),
            Value::String(s) => RubyLiteral::Str(s),
            Value::Boolean(b) => RubyLiteral::Boolean(*b),
            Value::Integer(i) => RubyLiteral::Integer(*i),
            Value::Float(x) => RubyLiteral::Float(*x),
            Value::List(items) => RubyLiteral::Array(items.iter().map(Into::into).collect()),
            Value::Map(map) => RubyLiteral::Hash(
                map.iter()
                    .map(|(k, v)| (k.as_str(), RubyLiteral::from(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for RubyLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RubyLiteral::Str(s) => {
                f.write_str("'")?;
                for c in s.chars() {
                    if c == '\\' || c == '\'' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("'")
            }
            RubyLiteral::Symbol(s) => f.write_str(s),
            RubyLiteral::Boolean(b) => write!(f, "{b}"),
            RubyLiteral::Integer(i) => write!(f, "{i}"),
            RubyLiteral::Float(x) if x.is_nan() => f.write_str("Float::NAN"),
            RubyLiteral::Float(x) if x.is_infinite() => {
                let sign = if *x < 0.0 { "-" } else { "" };
                write!(f, "{sign}Float::INFINITY")
            }
            // `{:?}` keeps the decimal point on whole numbers (`2.0`).
            RubyLiteral::Float(x) => write!(f, "{x:?}"),
            RubyLiteral::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            RubyLiteral::Hash(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, ":{key} => {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Format plugin options as Ruby keyword pairs, in mapping order.
///
/// Keys are not checked against Ruby's symbol grammar.
///
/// `{style: ":compressed", debug_info: true}` →
/// `[":style => :compressed", ":debug_info => true"]`
pub fn attributes(options: &IndexMap<String, Value>) -> Vec<String> {
    options
        .iter()
        .map(|(key, value)| format!(":{key} => {}", RubyLiteral::from(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: Value) -> String {
        RubyLiteral::from(&value).to_string()
    }

    #[test]
    fn scalars_use_ruby_literal_syntax() {
        assert_eq!(render(Value::from("compact")), "'compact'");
        assert_eq!(render(Value::from(true)), "true");
        assert_eq!(render(Value::from(42i64)), "42");
        assert_eq!(render(Value::from(2.0)), "2.0");
        assert_eq!(render(Value::from(1.5)), "1.5");
    }

    #[test]
    fn strings_are_escaped_for_single_quotes() {
        assert_eq!(render(Value::from(r"it's a\b")), r"'it\'s a\\b'");
    }

    #[test]
    fn leading_colon_makes_a_bare_symbol() {
        assert_eq!(render(Value::from(":compressed")), ":compressed");
        assert_eq!(render(Value::from("a:b")), "'a:b'");
    }

    #[test]
    fn collections_render_recursively() {
        let mut inner = IndexMap::new();
        inner.insert("line_numbers".to_string(), Value::from(true));
        inner.insert("style".to_string(), Value::from(":nested"));

        assert_eq!(
            render(Value::from(vec!["a", ":b"])),
            "['a', :b]"
        );
        assert_eq!(
            render(Value::Map(inner)),
            "{:line_numbers => true, :style => :nested}"
        );
    }

    #[test]
    fn attributes_keep_mapping_order() {
        let mut opts = IndexMap::new();
        opts.insert("style".to_string(), Value::from(":compressed"));
        opts.insert("debug_info".to_string(), Value::from(false));

        assert_eq!(
            attributes(&opts),
            vec![":style => :compressed", ":debug_info => false"]
        );
        assert!(attributes(&IndexMap::new()).is_empty());
    }

    #[test]
    fn option_keys_are_written_verbatim() {
        let mut opts = IndexMap::new();
        opts.insert("output-style".to_string(), Value::from("compact"));

        assert_eq!(attributes(&opts), vec![":output-style => 'compact'"]);
    }
}
