//! The source manager: file registry and line tables

use crate::file_info::FileInformation;
use crate::types::FileId;
use serde::{Deserialize, Serialize};

/// The source manager: owns every registered buffer's line table.
///
/// Ids are handed out densely in registration order, so a [`FileId`] is an
/// index into the registry and two buffers never share one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceContext {
    files: Vec<SourceFile>,
}

/// A registered buffer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// File path or buffer name
    pub path: String,
    /// Line table for resolving offsets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInformation>,
}

impl SourceContext {
    pub fn new() -> Self {
        SourceContext { files: Vec::new() }
    }

    /// Register a buffer and return its id.
    ///
    /// - If content is Some: the line table is built from it and the text
    ///   itself is dropped.
    /// - If content is None: the buffer is registered without a line table,
    ///   and positions into it will not resolve. Nothing is read from disk.
    pub fn add_file(&mut self, path: String, content: Option<&str>) -> FileId {
        let id = FileId(self.files.len());
        let file_info = content.map(FileInformation::new);

        tracing::debug!(
            path = %path,
            ?id,
            lines = file_info.as_ref().map(FileInformation::line_count),
            "Registered source buffer"
        );

        self.files.push(SourceFile { path, file_info });
        id
    }

    pub fn get_file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::new()
    }
}
