//! Doc comment discovery shared by the extractors.
//!
//! A doc comment is a `/** ... */` block whose lines start with `*`. The
//! extractors look at the text right after each block to decide what it
//! documents.

pub mod enums;
pub mod methods;

use regex::Regex;
use std::sync::LazyLock;

static RE_DOC_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*(.*?)\*/").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// A doc comment and the source that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock<'a> {
    /// 1-based line of the opening `/**`.
    pub line: usize,
    /// Comment text with `*` markers stripped.
    pub docstring: String,
    /// Everything after the closing `*/`.
    pub following: &'a str,
}

/// Find every doc comment in `source`, in order.
pub fn doc_blocks(source: &str) -> Vec<DocBlock<'_>> {
    let mut blocks = Vec::new();
    let mut line = 1;
    let mut counted_to = 0;

    for caps in RE_DOC_BLOCK.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        line += source[counted_to..whole.start()].matches('\n').count();
        counted_to = whole.start();

        blocks.push(DocBlock {
            line,
            docstring: clean_docstring(&caps[1]),
            following: &source[whole.end()..],
        });
    }
    blocks
}

/// Strip the leading `*` marker and indentation from every comment line.
pub fn clean_docstring(raw: &str) -> String {
    raw.lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.trim_start_matches(' ').trim_end()
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Collapse runs of whitespace (including line breaks) to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text.trim(), " ").into_owned()
}
