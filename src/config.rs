//! Run configuration shared by every phase of the pipeline.

use std::path::PathBuf;

/// Header documented when no `--input` is given.
pub const DEFAULT_INPUT: &str = "src/DYPlayer.h";
pub const DEFAULT_HEADING_LEVEL: u8 = 4;
pub const DEFAULT_NAMESPACE: &str = "DY";
pub const DEFAULT_CLASS: &str = "DYPlayer";
/// Everything from this marker onwards is left out of the docs.
pub const DEFAULT_SENTINEL: &str = "private:";

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub heading_level: u8,
    pub namespace: String,
    pub class_name: String,
    pub sentinel: String,
    /// Abort on the first malformed method instead of skipping it.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            heading_level: DEFAULT_HEADING_LEVEL,
            namespace: DEFAULT_NAMESPACE.to_string(),
            class_name: DEFAULT_CLASS.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
            strict: false,
        }
    }
}

impl Config {
    /// Markdown heading marker, e.g. `####` for level 4.
    pub fn heading_marker(&self) -> String {
        "#".repeat(usize::from(self.heading_level))
    }

    /// `NS::Class::member`
    pub fn qualify_member(&self, member: &str) -> String {
        format!("{}::{}::{}", self.namespace, self.class_name, member)
    }
}
