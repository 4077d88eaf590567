//! Provenance tags for SIL instructions
//!
//! Every instruction in the IR carries a [`SilLocation`]: a small `Copy` value
//! that records the AST node the instruction was lowered from (or, for
//! textual IR, a raw file position), a [`LocationKind`] saying why the
//! instruction exists, and a set of [`LocationFlags`].
//!
//! Kinds are interpreted through views, one per non-null kind. A view is the
//! same tag seen through a restricted API, obtained either from its own
//! constructors or by narrowing a tag:
//!
//! ```rust
//! use sil_ast::{ClosureKind, Expr};
//! use sil_location::{ImplicitReturnLocation, InlinedLocation, SilLocation};
//! use sil_source_map::{FileId, SourceLoc, SourceRange};
//!
//! let start = SourceLoc::new(FileId(0), 0);
//! let closure = Expr::closure(ClosureKind::Explicit, 0, SourceRange::new(start, start.advanced_by(12)));
//!
//! let mut loc = SilLocation::from(&closure);
//! loc.mark_auto_generated();
//!
//! let ret = ImplicitReturnLocation::from_location(loc);
//! assert!(ret.is_auto_generated());
//! assert_eq!(ret.get().param_count, 0);
//!
//! let widened: SilLocation = ret.into();
//! assert!(widened.get_as::<InlinedLocation>().is_none());
//! assert!(widened.is::<ImplicitReturnLocation>());
//! ```
//!
//! Positions are resolved against the AST node the tag wraps. Rendering them
//! as `path:line:col` goes through a [`sil_source_map::SourceContext`].

mod kind;
mod location;
mod node;
mod print;
mod view;
pub mod views;

pub use kind::{LocationFlags, LocationKind};
pub use location::SilLocation;
pub use node::{AstNodeRef, NodeFamily};
pub use print::LocationDisplay;
pub use view::LocationView;
pub use views::{
    ArtificialUnreachableLocation, CleanupLocation, FileLocation, ImplicitReturnLocation,
    InlinedLocation, MandatoryInlinedLocation, RegularLocation, ReturnLocation,
};
