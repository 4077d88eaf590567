//! The location tag attached to every SIL instruction

use crate::kind::{LocationFlags, LocationKind};
use crate::node::{AstNodeRef, NodeFamily};
use crate::view::LocationView;
use crate::view::sealed::Token;
use sil_ast::{Decl, Expr, NodeCategory, Pattern, Stmt};
use sil_source_map::{SourceLoc, SourceRange};

/// Provenance of a SIL instruction: the AST node it was derived from (or a
/// position in a textual SIL file), why it exists, and a set of flags.
///
/// A `SilLocation` borrows the AST it points into; the AST must outlive every
/// copy of the tag. Tags built directly from a node are
/// [`LocationKind::Regular`]. Other kinds are built through the views in
/// [`crate::views`].
///
/// ```rust
/// use sil_ast::{ReturnStmt, Stmt};
/// use sil_location::{LocationKind, RegularLocation, ReturnLocation, SilLocation};
/// use sil_source_map::{FileId, SourceLoc, SourceRange};
///
/// let start = SourceLoc::new(FileId(0), 0);
/// let ret = Stmt::return_stmt(false, SourceRange::new(start, start.advanced_by(6)));
///
/// let loc = SilLocation::from(&ret);
/// assert_eq!(loc.kind(), LocationKind::Regular);
/// assert!(loc.is::<RegularLocation>());
/// assert!(loc.get_as::<ReturnLocation>().is_none());
/// assert!(loc.is_ast_node::<ReturnStmt>());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SilLocation<'a> {
    node: Option<AstNodeRef<'a>>,
    /// Position in a parsed `.sil` file, when there is no AST node
    file_loc: Option<SourceLoc>,
    kind: LocationKind,
    flags: LocationFlags,
}

impl<'a> SilLocation<'a> {
    /// A regular location for `node`.
    pub fn new(node: impl Into<AstNodeRef<'a>>) -> Self {
        Self::from_parts(
            Some(node.into()),
            None,
            LocationKind::Regular,
            LocationFlags::empty(),
        )
    }

    pub(crate) fn from_parts(
        node: Option<AstNodeRef<'a>>,
        file_loc: Option<SourceLoc>,
        kind: LocationKind,
        flags: LocationFlags,
    ) -> Self {
        SilLocation {
            node,
            file_loc,
            kind,
            flags,
        }
    }

    /// A payload-free tag of `kind`.
    pub(crate) fn of_kind(kind: LocationKind) -> Self {
        Self::from_parts(None, None, kind, LocationFlags::empty())
    }

    /// The same payload and flags under a different kind.
    pub(crate) fn with_kind(self, kind: LocationKind) -> Self {
        SilLocation { kind, ..self }
    }

    /// Drops the raw file position, keeping node, kind and flags.
    pub(crate) fn without_file_loc(self) -> Self {
        SilLocation {
            file_loc: None,
            ..self
        }
    }

    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    pub fn flags(&self) -> LocationFlags {
        self.flags
    }

    pub fn ast_node(&self) -> Option<AstNodeRef<'a>> {
        self.node
    }

    /// The raw position this tag was parsed from, for tags without a node.
    pub fn file_source_loc(&self) -> Option<SourceLoc> {
        self.file_loc
    }

    /// True when the tag wraps neither an AST node nor a file position.
    ///
    /// Artificial locations and the top-level module locations are null.
    pub fn is_null(&self) -> bool {
        self.node.is_none() && self.file_loc.is_none()
    }

    pub fn is_valid(&self) -> bool {
        !self.is_null()
    }

    pub fn has_ast_location(&self) -> bool {
        self.node.is_some()
    }

    pub fn mark_auto_generated(&mut self) {
        self.flags |= LocationFlags::AUTO_GENERATED;
    }

    /// True for artificially generated bodies such as thunks or default
    /// destructors. These stay out of the debug line table.
    pub fn is_auto_generated(&self) -> bool {
        self.flags.contains(LocationFlags::AUTO_GENERATED)
    }

    /// Resolve to the start of the AST node from now on.
    pub fn point_to_start(&mut self) {
        self.flags |= LocationFlags::POINTS_TO_START;
    }

    /// Resolve to the end of the AST node from now on.
    pub fn point_to_end(&mut self) {
        self.flags |= LocationFlags::POINTS_TO_END;
    }

    pub fn always_points_to_start(&self) -> bool {
        self.flags.contains(LocationFlags::POINTS_TO_START)
    }

    pub fn always_points_to_end(&self) -> bool {
        self.flags.contains(LocationFlags::POINTS_TO_END)
    }

    pub fn mark_as_in_top_level(&mut self) {
        self.flags |= LocationFlags::IN_TOP_LEVEL;
    }

    pub fn is_in_top_level(&self) -> bool {
        self.flags.contains(LocationFlags::IN_TOP_LEVEL)
    }

    /// The first breakpoint in a function goes after its prologue.
    pub fn mark_as_prologue(&mut self) {
        self.flags |= LocationFlags::IN_PROLOGUE;
    }

    pub fn is_in_prologue(&self) -> bool {
        self.flags.contains(LocationFlags::IN_PROLOGUE)
    }

    pub fn is<V: LocationView<'a>>(&self) -> bool {
        V::is_kind(self)
    }

    pub fn get_as<V: LocationView<'a>>(&self) -> Option<V> {
        V::is_kind(self).then(|| V::wrap(*self, Token(())))
    }

    /// # Panics
    ///
    /// Panics if this location is not of `V`'s kind.
    pub fn cast_to<V: LocationView<'a>>(&self) -> V {
        assert!(
            V::is_kind(self),
            "cannot cast a {} location to {}",
            self.kind,
            V::NAME
        );
        V::wrap(*self, Token(()))
    }

    /// Returns the wrapped node if it is a `T`.
    pub fn get_as_ast_node<T>(&self) -> Option<&'a T>
    where
        T: NodeCategory + 'a,
        T::Family: NodeFamily,
    {
        T::classify(<T::Family as NodeFamily>::from_node_ref(self.node?)?)
    }

    pub fn is_ast_node<T>(&self) -> bool
    where
        T: NodeCategory + 'a,
        T::Family: NodeFamily,
    {
        self.get_as_ast_node::<T>().is_some()
    }

    /// Returns the wrapped node as a `T`.
    ///
    /// # Panics
    ///
    /// Panics if there is no node, if it belongs to a different family than
    /// `T`, or if it is not a `T`.
    pub fn cast_to_ast_node<T>(&self) -> &'a T
    where
        T: NodeCategory + 'a,
        T::Family: NodeFamily,
    {
        let family_name = <T::Family as NodeCategory>::NAME;
        let Some(node) = self.node else {
            panic!(
                "cannot cast a {} location without an AST node to {}",
                self.kind,
                T::NAME
            );
        };
        let Some(family) = <T::Family as NodeFamily>::from_node_ref(node) else {
            panic!(
                "location wraps a node from the {} family, not {}",
                node.family_name(),
                family_name
            );
        };
        match T::classify(family) {
            Some(typed) => typed,
            None => panic!("{} node is not a {}", family_name, T::NAME),
        }
    }

    /// The position diagnostics should point at.
    ///
    /// With a node, this is the node's representative position unless the
    /// tag was told to point to the node's start or end. Without a node, it
    /// is the raw file position.
    pub fn source_loc(&self) -> Option<SourceLoc> {
        let Some(node) = self.node else {
            return self.file_loc;
        };
        Some(if self.always_points_to_start() {
            node.start_loc()
        } else if self.always_points_to_end() {
            node.end_loc()
        } else {
            node.loc()
        })
    }

    pub fn start_source_loc(&self) -> Option<SourceLoc> {
        let Some(node) = self.node else {
            return self.file_loc;
        };
        Some(if self.always_points_to_end() && !self.always_points_to_start() {
            node.end_loc()
        } else {
            node.start_loc()
        })
    }

    pub fn end_source_loc(&self) -> Option<SourceLoc> {
        let Some(node) = self.node else {
            return self.file_loc;
        };
        Some(if self.always_points_to_start() {
            node.start_loc()
        } else {
            node.end_loc()
        })
    }

    pub fn source_range(&self) -> Option<SourceRange> {
        Some(SourceRange::new(
            self.start_source_loc()?,
            self.end_source_loc()?,
        ))
    }
}

macro_rules! regular_from_node {
    ($($family:ident),*) => {
        $(
            impl<'a> From<&'a $family> for SilLocation<'a> {
                fn from(node: &'a $family) -> Self {
                    SilLocation::new(node)
                }
            }
        )*
    };
}

regular_from_node!(Decl, Expr, Stmt, Pattern);
