//! Resolving positions to line/column locations

use crate::error::SourceMapError;
use crate::types::{FileId, Location, SourceLoc};
use crate::SourceContext;

/// Result of resolving a [`SourceLoc`] against its file's line table
#[derive(Debug, Clone, PartialEq)]
pub struct MappedLocation {
    pub file_id: FileId,
    pub location: Location,
}

impl SourceContext {
    /// Resolve a position to its row and column.
    pub fn resolve(&self, loc: SourceLoc) -> Result<MappedLocation, SourceMapError> {
        let file = self
            .get_file(loc.file_id)
            .ok_or(SourceMapError::UnknownFile(loc.file_id))?;
        let file_info = file
            .file_info
            .as_ref()
            .ok_or(SourceMapError::MissingFileInformation(loc.file_id))?;

        let location = file_info.offset_to_location(loc.offset).ok_or(
            SourceMapError::OffsetOutOfBounds {
                file_id: loc.file_id,
                offset: loc.offset,
                length: file_info.total_length(),
            },
        )?;

        Ok(MappedLocation {
            file_id: loc.file_id,
            location,
        })
    }

    /// Build a position from 1-based line and column numbers, the way they
    /// appear in textual IR and compiler output.
    pub fn loc_for_line_col(
        &self,
        file_id: FileId,
        line: usize,
        column: usize,
    ) -> Result<SourceLoc, SourceMapError> {
        let file = self
            .get_file(file_id)
            .ok_or(SourceMapError::UnknownFile(file_id))?;
        let file_info = file
            .file_info
            .as_ref()
            .ok_or(SourceMapError::MissingFileInformation(file_id))?;

        let out_of_bounds = SourceMapError::LineColumnOutOfBounds {
            file_id,
            line,
            column,
        };
        if line == 0 || column == 0 {
            return Err(out_of_bounds);
        }

        let offset = file_info
            .line_col_to_offset(line - 1, column - 1)
            .ok_or(out_of_bounds)?;
        Ok(SourceLoc::new(file_id, offset))
    }

    /// Render a position as `path:line:col` (1-based).
    ///
    /// Unresolvable positions render as `<invalid loc>`; rendering never fails.
    pub fn display_loc(&self, loc: SourceLoc) -> String {
        match (self.resolve(loc), self.get_file(loc.file_id)) {
            (Ok(mapped), Some(file)) => format!(
                "{}:{}:{}",
                file.path,
                mapped.location.row + 1,
                mapped.location.column + 1
            ),
            _ => "<invalid loc>".to_string(),
        }
    }
}
