//! `typedef enum` extraction.
//!
//! Recognized shape, directly after a doc comment:
//!
//! ```text
//! typedef enum [class] [Tag] [: Base] {
//!     NAME [= VALUE], // description
//!     ...
//! } alias_t;
//! ```

use super::{collapse_whitespace, DocBlock};
use crate::anchor;
use crate::config::Config;
use crate::model::{EnumConstant, EnumDoc, EnumTable};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static RE_TYPEDEF_ENUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\A\s*typedef\s+enum\b\s*",
        r"(?:class\s+|struct\s+)?",
        r"(?:(?P<tag>[A-Za-z_]\w*)\s*)?",
        r"(?::\s*(?P<extends>[A-Za-z_][\w:]*)\s*)?",
        r"\{(?P<body>[^}]*)\}\s*",
        r"(?P<alias>[A-Za-z_]\w*)\s*;",
    ))
    .unwrap()
});

/// Build the enum table from the doc blocks of a header.
pub fn extract(blocks: &[DocBlock<'_>], config: &Config) -> EnumTable {
    let mut table = EnumTable::default();

    for block in blocks {
        let Some(doc) = parse_enum(block, config) else {
            continue;
        };
        let alias = doc.alias.clone();
        if table.insert(doc).is_some() {
            warn!(alias = %alias, line = block.line, "duplicate enum alias, keeping the later one");
        }
    }
    if table.is_empty() {
        debug!("no documented enums");
    }
    table
}

/// Parse the enum declared right after `block`, if there is one.
fn parse_enum(block: &DocBlock<'_>, config: &Config) -> Option<EnumDoc> {
    let caps = RE_TYPEDEF_ENUM.captures(block.following)?;

    let alias = caps["alias"].to_string();
    let constants = parse_body(&caps["body"]);
    if constants.is_empty() {
        debug!(alias = %alias, line = block.line, "skipping enum without constants");
        return None;
    }

    let tag = caps.name("tag").map(|m| m.as_str().to_string());
    let anchor = anchor::enum_anchor(&config.namespace, &alias, tag.is_some());

    Some(EnumDoc {
        alias,
        tag,
        extends: caps.name("extends").map(|m| m.as_str().to_string()),
        docstring: block.docstring.clone(),
        constants,
        anchor,
    })
}

/// Split an enum body into constants.
///
/// A `//` comment belongs to the last constant seen, so both same-line and
/// following comment lines end up in its description.
fn parse_body(body: &str) -> Vec<EnumConstant> {
    let mut constants: Vec<EnumConstant> = Vec::new();
    let mut comments: Vec<Vec<String>> = Vec::new();

    for line in body.lines() {
        let (code, comment) = match line.find("//") {
            Some(pos) => (&line[..pos], Some(&line[pos + 2..])),
            None => (line, None),
        };

        for entry in code.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let (name, value) = match entry.split_once('=') {
                Some((name, value)) => (name.trim(), value.trim().to_string()),
                None => (entry, format!("{:#04x}", constants.len())),
            };
            constants.push(EnumConstant {
                name: name.to_string(),
                value,
                description: String::new(),
            });
            comments.push(Vec::new());
        }

        if let (Some(comment), Some(pieces)) = (comment, comments.last_mut()) {
            pieces.push(comment.to_string());
        }
    }

    for (constant, pieces) in constants.iter_mut().zip(comments) {
        constant.description = collapse_whitespace(&pieces.join(" "));
    }
    constants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::doc_blocks;

    fn extract_source(source: &str) -> EnumTable {
        extract(&doc_blocks(source), &Config::default())
    }

    #[test]
    fn implicit_values_are_hex_indices() {
        let constants = parse_body("\n    NORMAL,\n    POP,\n    ROCK\n  ");
        let values: Vec<_> = constants.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["0x00", "0x01", "0x02"]);
    }

    #[test]
    fn explicit_values_are_verbatim() {
        let constants = parse_body("\n  FAIL = -1,\n  STOPPED = 0,\n  FULL = 0xFF\n");
        let values: Vec<_> = constants.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["-1", "0", "0xFF"]);
    }

    #[test]
    fn implicit_value_uses_declaration_index() {
        let constants = parse_body(" OK, FAIL = 1, UNKNOWN ");
        assert_eq!(constants[0].value, "0x00");
        assert_eq!(constants[1].value, "1");
        assert_eq!(constants[2].value, "0x02");
    }

    #[test]
    fn comments_become_descriptions() {
        let body = "\n  USB = 0x00, // USB Storage device.\n  SD = 0x01,  // SD Card,\n              //   hot-pluggable.\n  NONE = 0xff\n";
        let constants = parse_body(body);
        assert_eq!(constants[0].description, "USB Storage device.");
        assert_eq!(constants[1].description, "SD Card, hot-pluggable.");
        assert_eq!(constants[2].description, "");
    }

    #[test]
    fn leading_comment_lines_are_ignored() {
        let constants = parse_body("\n  // header comment\n  A,\n  B\n");
        assert_eq!(constants.len(), 2);
        assert_eq!(constants[0].description, "");
    }

    #[test]
    fn tagged_enum_with_base_type() {
        let source = "/**\n * Storage devices.\n */\ntypedef enum class Device: uint8_t {\n  USB = 0x00, // USB.\n  SD = 0x01\n} device_t;\n";
        let table = extract_source(source);
        let doc = table.get("device_t").unwrap();

        assert_eq!(doc.tag.as_deref(), Some("Device"));
        assert_eq!(doc.extends.as_deref(), Some("uint8_t"));
        assert_eq!(doc.docstring, "Storage devices.");
        assert_eq!(doc.anchor, "[`DY::device_t`](#typedef-enum-class-dydevice_t)");
        assert!(doc.has_descriptions());
    }

    #[test]
    fn untagged_enum_uses_plain_anchor() {
        let source = "/**\n * Status.\n */\ntypedef enum { OK, FAIL = 1 } DEVICE_T;\n";
        let table = extract_source(source);
        let doc = table.get("DEVICE_T").unwrap();

        assert_eq!(doc.tag, None);
        assert_eq!(doc.scope_name(), "DEVICE_T");
        assert_eq!(doc.anchor, "[`DY::DEVICE_T`](#typedef-enum-dydevice_t)");
    }

    #[test]
    fn tag_without_class_keyword_uses_class_form() {
        let source = "/**\n * Modes.\n */\ntypedef enum PlayMode: uint8_t { LOOP } play_mode_t;\n";
        let table = extract_source(source);
        let doc = table.get("play_mode_t").unwrap();

        assert!(doc.is_class());
        assert_eq!(doc.anchor, "[`DY::play_mode_t`](#typedef-enum-class-dyplay_mode_t)");
    }

    #[test]
    fn enum_without_doc_comment_is_skipped() {
        let table = extract_source("typedef enum Eq { A, B } eq_t;\n");
        assert!(table.is_empty());
    }

    #[test]
    fn enum_without_alias_is_skipped() {
        let table = extract_source("/**\n * Nope.\n */\nenum Eq { A, B };\n");
        assert!(table.is_empty());
    }

    #[test]
    fn later_duplicate_alias_wins() {
        let source = "/**\n * First.\n */\ntypedef enum A { X } same_t;\n/**\n * Second.\n */\ntypedef enum B { Y } same_t;\n";
        let table = extract_source(source);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("same_t").unwrap().docstring, "Second.");
    }
}
