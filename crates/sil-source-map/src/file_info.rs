//! Line tables for offset/line-column conversion

use crate::types::Location;
use serde::{Deserialize, Serialize};

/// Line table for a single source buffer.
///
/// Stores the byte offset at which every line starts, so conversions in both
/// directions are a binary search or an index away. The buffer itself is not
/// retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInformation {
    /// Byte offset of the first byte of each line; always starts with 0
    line_starts: Vec<usize>,

    /// Total length of the file in bytes
    total_length: usize,
}

impl FileInformation {
    /// Build the line table by scanning `content` once.
    ///
    /// ```
    /// use sil_source_map::FileInformation;
    ///
    /// let info = FileInformation::new("sil @f : $() -> () {\n}\n");
    /// assert_eq!(info.line_count(), 3);
    /// ```
    pub fn new(content: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(idx, _)| idx + 1),
            )
            .collect();

        FileInformation {
            line_starts,
            total_length: content.len(),
        }
    }

    /// Convert a byte offset to a row/column [`Location`].
    ///
    /// Returns None if the offset is past the end of the file. A newline byte
    /// belongs to the line it terminates.
    ///
    /// ```
    /// use sil_source_map::FileInformation;
    ///
    /// let info = FileInformation::new("bb0:\n  return %0");
    /// let loc = info.offset_to_location(7).unwrap();
    /// assert_eq!((loc.row, loc.column), (1, 2));
    /// ```
    pub fn offset_to_location(&self, offset: usize) -> Option<Location> {
        if offset > self.total_length {
            return None;
        }

        let row = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            // line_starts[0] == 0, so idx >= 1 here
            Err(idx) => idx - 1,
        };

        Some(Location {
            offset,
            row,
            column: offset - self.line_starts[row],
        })
    }

    /// Convert a 0-indexed row and byte column to an offset.
    ///
    /// Returns None if the row does not exist or the column runs past the end
    /// of that row, including columns too large to add to the row start.
    pub fn line_col_to_offset(&self, row: usize, column: usize) -> Option<usize> {
        let start = *self.line_starts.get(row)?;
        let line_end = self
            .line_starts
            .get(row + 1)
            .map_or(self.total_length, |next| next - 1);

        let offset = start.checked_add(column)?;
        (offset <= line_end).then_some(offset)
    }

    /// Get the total length of the file in bytes
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Get the number of lines in the file
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
