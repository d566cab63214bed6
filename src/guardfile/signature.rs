// src/guardfile/signature.rs

//! Locating a plugin's existing block ("signature") in Guardfile text.
//!
//! Blocks look like:
//!
//! ```text
//! guard :sass, :input => 'app/assets/sass', :output => 'public/css'
//!
//! guard :less, :output => 'public/css' do
//!   watch(%r{^app/assets/less/.+\.less$})
//! end
//! ```
//!
//! A block runs from its `guard :<plugin>` marker to the first blank line, or
//! to the end of the file. Concat blocks are single lines keyed by their
//! `type:`. The refresher block is preceded by a `module ::Guard` wrapper that
//! belongs to it.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::plugin::Plugin;

/// Plugin whose block carries a `module` wrapper above its marker.
pub const WRAPPED_PLUGIN: &str = "refresher";

const BLOCK_SEPARATOR: &str = "\n\n";
const WRAPPER_KEYWORD: &str = "module";
const MARKER_LINE_PREFIX: &str = "guard ";

/// Byte ranges of every block in `contents` that belongs to `plugin`.
///
/// Ranges are sorted and never overlap.
pub fn find_signatures(contents: &str, plugin: &Plugin) -> Vec<Range<usize>> {
    match plugin.concat_language() {
        Some(language) => concat_spans(contents, language),
        None => block_spans(contents, plugin.name()),
    }
}

/// Replace every block of `plugin` with `replacement`, inserted literally.
///
/// Returns the new text and the number of blocks replaced. With no match the
/// text comes back unchanged.
pub fn replace_signatures(contents: &str, plugin: &Plugin, replacement: &str) -> (String, usize) {
    let spans = find_signatures(contents, plugin);
    if spans.is_empty() {
        return (contents.to_string(), 0);
    }

    let mut out = String::with_capacity(contents.len() + replacement.len());
    let mut cursor = 0;
    for span in &spans {
        out.push_str(&contents[cursor..span.start]);
        out.push_str(replacement);
        cursor = span.end;
    }
    out.push_str(&contents[cursor..]);

    (out, spans.len())
}

fn concat_marker(language: &str) -> Regex {
    let pattern = format!(r#"guard :concat, type: "{}".*"#, regex::escape(language));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped concat marker is a valid regex")
}

fn concat_spans(contents: &str, language: &str) -> Vec<Range<usize>> {
    concat_marker(language)
        .find_iter(contents)
        .map(|m| m.range())
        .collect()
}

fn block_spans(contents: &str, plugin: &str) -> Vec<Range<usize>> {
    let marker = format!("guard :{plugin}");
    let wrapped = plugin == WRAPPED_PLUGIN;
    let mut spans: Vec<Range<usize>> = Vec::new();
    let mut from = 0;

    while let Some(rel) = contents[from..].find(&marker) {
        let start = from + rel;
        let after = start + marker.len();

        let mut rest = contents[after..].chars();
        let Some(first) = rest.next() else {
            // A bare marker at end of file has no body.
            break;
        };
        if first.is_alphanumeric() || first == '_' {
            // `guard :sass` must not claim `guard :sass_lint`.
            from = after;
            continue;
        }

        let end = block_end(contents, after + first.len_utf8());
        let start = if wrapped {
            let floor = spans.last().map_or(0, |prev| prev.end);
            wrapper_start(contents, floor, start).unwrap_or(start)
        } else {
            start
        };

        spans.push(start..end);
        from = end;
    }

    spans
}

/// First blank-line boundary at or after `from`, else end of text. A single
/// trailing newline is not part of the block.
fn block_end(contents: &str, from: usize) -> usize {
    if let Some(rel) = contents[from..].find(BLOCK_SEPARATOR) {
        return from + rel;
    }
    if contents.ends_with('\n') && contents.len() - 1 >= from {
        contents.len() - 1
    } else {
        contents.len()
    }
}

/// Start of a `module` line between the previous block and `marker_start`.
///
/// Only lines after the last `guard ` marker line are considered, so a
/// wrapper can never reach back into another plugin's block.
fn wrapper_start(contents: &str, floor: usize, marker_start: usize) -> Option<usize> {
    let window_end = line_start(contents, marker_start);
    if window_end <= floor {
        return None;
    }

    let mut wrapper = None;
    let mut offset = floor;
    for line in contents[floor..window_end].split_inclusive('\n') {
        let at_line_start = offset == 0 || contents.as_bytes()[offset - 1] == b'\n';
        if at_line_start {
            if line.starts_with(MARKER_LINE_PREFIX) {
                wrapper = None;
            } else if wrapper.is_none() && line.starts_with(WRAPPER_KEYWORD) {
                wrapper = Some(offset);
            }
        }
        offset += line.len();
    }
    wrapper
}

fn line_start(contents: &str, pos: usize) -> usize {
    contents[..pos].rfind('\n').map_or(0, |nl| nl + 1)
}
