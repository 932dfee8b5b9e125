//! Loads the header and cuts off its non-public section.

use crate::error::ExtractError;
use std::fs;
use std::path::Path;

/// Read `path` and keep only the text before the first `sentinel`.
pub fn load(path: &Path, sentinel: &str) -> Result<String, ExtractError> {
    let text = fs::read_to_string(path).map_err(|source| ExtractError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(truncate_at(&text, sentinel).to_string())
}

/// The part of `text` preceding `sentinel`, or all of it when absent.
pub fn truncate_at<'a>(text: &'a str, sentinel: &str) -> &'a str {
    if sentinel.is_empty() {
        return text;
    }
    match text.find(sentinel) {
        Some(pos) => &text[..pos],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn truncates_at_first_sentinel() {
        let text = "public:\n  void a();\nprivate:\n  void b();\nprivate:\n";
        assert_eq!(truncate_at(text, "private:"), "public:\n  void a();\n");
    }

    #[test]
    fn missing_sentinel_keeps_everything() {
        assert_eq!(truncate_at("void a();\n", "private:"), "void a();\n");
        assert_eq!(truncate_at("void a();\n", ""), "void a();\n");
    }

    #[test]
    fn load_reads_and_truncates() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"void a();\nprivate:\nvoid b();\n").unwrap();
        let text = load(file.path(), "private:").unwrap();
        assert_eq!(text, "void a();\n");
    }

    #[test]
    fn load_missing_file_is_source_not_found() {
        let err = load(Path::new("/nonexistent/header.h"), "private:").unwrap_err();
        assert!(matches!(err, ExtractError::SourceNotFound { .. }));
    }
}
