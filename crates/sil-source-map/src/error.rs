//! Errors raised while resolving positions against a [`SourceContext`].
//!
//! [`SourceContext`]: crate::SourceContext

use crate::types::FileId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceMapError {
    #[error("file {0:?} is not registered in the source context")]
    UnknownFile(FileId),

    #[error("file {0:?} has no line table; it was registered without content")]
    MissingFileInformation(FileId),

    #[error("offset {offset} is past the end of file {file_id:?} ({length} bytes)")]
    OffsetOutOfBounds {
        file_id: FileId,
        offset: usize,
        length: usize,
    },

    #[error("line {line}, column {column} does not exist in file {file_id:?}")]
    LineColumnOutOfBounds {
        file_id: FileId,
        line: usize,
        column: usize,
    },
}
