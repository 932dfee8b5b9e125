//! Heading anchors for cross-references between sections.
//!
//! Slugs follow the GitHub heading convention closely enough for the
//! headings this tool emits: lower-case, colons dropped, spaces to hyphens.

/// Slug GitHub generates for a heading with this text.
pub fn heading_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        match c {
            ':' => {}
            ' ' => slug.push('-'),
            c => slug.push(c),
        }
    }
    slug
}

/// Heading text of an enum section, without the `#` marker.
pub fn enum_heading_title(namespace: &str, alias: &str, is_class: bool) -> String {
    let kind = if is_class { "enum class" } else { "enum" };
    format!("typedef {} {}::{}", kind, namespace, alias)
}

/// Markdown link pointing at an enum's section.
pub fn enum_anchor(namespace: &str, alias: &str, is_class: bool) -> String {
    let title = enum_heading_title(namespace, alias, is_class);
    format!("[`{}::{}`](#{})", namespace, alias, heading_slug(&title))
}
