//! AST node families for SIL locations
//!
//! The AST is split into four disjoint families: [`Decl`], [`Expr`], [`Stmt`]
//! and [`Pattern`]. Every family node carries its source range and a
//! representative position, plus a payload enum naming its concrete subtype.
//!
//! Subtypes are tested and narrowed through [`NodeCategory`]. Each category
//! belongs to exactly one family, which is fixed at compile time by
//! `NodeCategory::Family`:
//!
//! ```rust
//! use sil_ast::{NodeCategory, ReturnStmt, Stmt};
//! use sil_source_map::{FileId, SourceLoc, SourceRange};
//!
//! let start = SourceLoc::new(FileId(0), 0);
//! let stmt = Stmt::return_stmt(false, SourceRange::new(start, start.advanced_by(6)));
//!
//! assert!(stmt.is::<ReturnStmt>());
//! assert!(ReturnStmt::classify(&stmt).is_some());
//! ```

use sil_source_map::{SourceLoc, SourceRange};

/// A subtype (or the whole) of one AST family.
///
/// `classify` is the family-internal dynamic subtype test: it returns the
/// subtype's payload when `node` is an instance of `Self`.
pub trait NodeCategory: Sized {
    type Family;

    /// Human-readable subtype name, used in cast failure messages
    const NAME: &'static str;

    fn classify(node: &Self::Family) -> Option<&Self>;
}

/// Position storage shared by all four families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodePositions {
    range: SourceRange,
    loc: SourceLoc,
}

impl NodePositions {
    fn new(range: SourceRange) -> Self {
        NodePositions {
            range,
            loc: range.start,
        }
    }
}

// Family-level accessors. A family is a category of itself whose subtype
// test always succeeds.
macro_rules! ast_family {
    ($family:ident, $kind:ident) => {
        impl $family {
            pub fn new(kind: $kind, range: ::sil_source_map::SourceRange) -> Self {
                $family {
                    kind,
                    positions: $crate::NodePositions::new(range),
                }
            }

            /// Override the representative position, which otherwise is the
            /// start of the range.
            pub fn with_loc(mut self, loc: ::sil_source_map::SourceLoc) -> Self {
                self.positions.loc = loc;
                self
            }

            pub fn kind(&self) -> &$kind {
                &self.kind
            }

            /// The position diagnostics point at by default
            pub fn loc(&self) -> ::sil_source_map::SourceLoc {
                self.positions.loc
            }

            pub fn start_loc(&self) -> ::sil_source_map::SourceLoc {
                self.positions.range.start
            }

            pub fn end_loc(&self) -> ::sil_source_map::SourceLoc {
                self.positions.range.end
            }

            pub fn source_range(&self) -> ::sil_source_map::SourceRange {
                self.positions.range
            }

            pub fn is<T: $crate::NodeCategory<Family = $family>>(&self) -> bool {
                T::classify(self).is_some()
            }

            pub fn get_as<T: $crate::NodeCategory<Family = $family>>(&self) -> Option<&T> {
                T::classify(self)
            }
        }

        impl $crate::NodeCategory for $family {
            type Family = $family;
            const NAME: &'static str = stringify!($family);

            fn classify(node: &$family) -> Option<&$family> {
                Some(node)
            }
        }
    };
}

// Leaf subtype stored directly in one variant of the family's kind enum.
macro_rules! ast_subtype {
    ($family:ident, $sub:ident, $kind:ident :: $variant:ident) => {
        impl $crate::NodeCategory for $sub {
            type Family = $family;
            const NAME: &'static str = stringify!($sub);

            fn classify(node: &$family) -> Option<&$sub> {
                match node.kind() {
                    $kind::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use {ast_family, ast_subtype};

mod decl;
mod expr;
mod pattern;
mod stmt;

pub use decl::*;
pub use expr::*;
pub use pattern::*;
pub use stmt::*;
