//! Core positional types

use serde::{Deserialize, Serialize};

/// A unique identifier for a source file registered in a [`SourceContext`].
///
/// [`SourceContext`]: crate::SourceContext
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileId(pub usize);

/// An opaque position in a source buffer.
///
/// Positions compare first by file, then by byte offset. A missing position is
/// spelled `Option<SourceLoc>`; there is no in-band invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceLoc {
    pub file_id: FileId,
    /// Byte offset from start of file
    pub offset: usize,
}

impl SourceLoc {
    pub const fn new(file_id: FileId, offset: usize) -> Self {
        SourceLoc { file_id, offset }
    }

    /// Returns the position `delta` bytes further into the same file.
    ///
    /// # Panics
    ///
    /// Panics if the new offset does not fit in `usize`.
    pub const fn advanced_by(self, delta: usize) -> Self {
        match self.offset.checked_add(delta) {
            Some(offset) => SourceLoc {
                file_id: self.file_id,
                offset,
            },
            None => panic!("source offset overflowed while advancing a position"),
        }
    }
}

/// A `{start, end}` pair of positions. Both ends are inclusive token starts,
/// so a single-token range has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: SourceLoc,
    pub end: SourceLoc,
}

impl SourceRange {
    pub const fn new(start: SourceLoc, end: SourceLoc) -> Self {
        SourceRange { start, end }
    }

    /// A range covering exactly one position.
    pub const fn point(loc: SourceLoc) -> Self {
        SourceRange {
            start: loc,
            end: loc,
        }
    }

    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

/// A resolved location in source text (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Byte offset from start of source
    pub offset: usize,
    /// Row number (0-indexed)
    pub row: usize,
    /// Column number (0-indexed, in bytes)
    pub column: usize,
}
