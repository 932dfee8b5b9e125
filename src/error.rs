//! Error kinds raised while loading and extracting a header.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input header is missing or unreadable. Always fatal.
    #[error("cannot read {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A doc comment that is followed by neither an enum nor a method.
    #[error("doc comment at line {line} precedes no documentable declaration")]
    MalformedCommentBlock { line: usize },

    #[error("argument `{argument}` of {method}(..) is not a `type name` pair")]
    MalformedArgumentList { method: String, argument: String },

    #[error("@param `{name}` does not name an argument of {method}(..)")]
    UnknownParameterReference { method: String, name: String },
}

impl ExtractError {
    /// Whether the run can carry on with the next declaration.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ExtractError::SourceNotFound { .. })
    }
}
