//! Source positions for SIL locations
//!
//! This crate provides the positional primitives that SIL location tags
//! resolve to, and the source manager that renders them as text.
//!
//! # Overview
//!
//! The core types are:
//! - [`SourceLoc`]: An opaque, ordered position (file plus byte offset)
//! - [`SourceRange`]: A `{start, end}` pair of positions
//! - [`SourceContext`]: Registers files and resolves positions to line/column
//!
//! # Example
//!
//! ```rust
//! use sil_source_map::*;
//!
//! let mut ctx = SourceContext::new();
//! let file_id = ctx.add_file("main.swift".into(), Some("let x = 1\nreturn x"));
//!
//! let loc = SourceLoc::new(file_id, 10);
//! assert_eq!(ctx.display_loc(loc), "main.swift:2:1");
//! ```

pub mod context;
pub mod error;
pub mod file_info;
pub mod mapping;
pub mod types;

// Re-export main types
pub use context::{SourceContext, SourceFile};
pub use error::SourceMapError;
pub use file_info::FileInformation;
pub use mapping::MappedLocation;
pub use types::{FileId, Location, SourceLoc, SourceRange};
