//! Markdown output of extracted documentation.

pub mod markdown;

pub use markdown::MarkdownRenderer;

use crate::parser::collapse_whitespace;

/// Make text safe for a single Markdown table cell.
pub fn table_cell(text: &str) -> String {
    collapse_whitespace(text).replace('|', "\\|")
}
