//! Non-owning references to AST nodes

use sil_ast::{Decl, Expr, NodeCategory, Pattern, Stmt};
use sil_source_map::SourceLoc;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A borrowed reference to a node from exactly one AST family.
///
/// Equality and hashing use the referent's address, never its contents:
/// two structurally identical nodes are different provenance.
#[derive(Clone, Copy)]
pub enum AstNodeRef<'a> {
    Decl(&'a Decl),
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    Pattern(&'a Pattern),
}

impl<'a> AstNodeRef<'a> {
    pub fn family_name(self) -> &'static str {
        match self {
            AstNodeRef::Decl(_) => "decl",
            AstNodeRef::Expr(_) => "expr",
            AstNodeRef::Stmt(_) => "stmt",
            AstNodeRef::Pattern(_) => "pattern",
        }
    }

    /// The node's representative position
    pub fn loc(self) -> SourceLoc {
        match self {
            AstNodeRef::Decl(d) => d.loc(),
            AstNodeRef::Expr(e) => e.loc(),
            AstNodeRef::Stmt(s) => s.loc(),
            AstNodeRef::Pattern(p) => p.loc(),
        }
    }

    pub fn start_loc(self) -> SourceLoc {
        match self {
            AstNodeRef::Decl(d) => d.start_loc(),
            AstNodeRef::Expr(e) => e.start_loc(),
            AstNodeRef::Stmt(s) => s.start_loc(),
            AstNodeRef::Pattern(p) => p.start_loc(),
        }
    }

    pub fn end_loc(self) -> SourceLoc {
        match self {
            AstNodeRef::Decl(d) => d.end_loc(),
            AstNodeRef::Expr(e) => e.end_loc(),
            AstNodeRef::Stmt(s) => s.end_loc(),
            AstNodeRef::Pattern(p) => p.end_loc(),
        }
    }

    fn address(self) -> *const () {
        match self {
            AstNodeRef::Decl(d) => std::ptr::from_ref(d).cast(),
            AstNodeRef::Expr(e) => std::ptr::from_ref(e).cast(),
            AstNodeRef::Stmt(s) => std::ptr::from_ref(s).cast(),
            AstNodeRef::Pattern(p) => std::ptr::from_ref(p).cast(),
        }
    }
}

impl PartialEq for AstNodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.address() == other.address()
    }
}

impl Eq for AstNodeRef<'_> {}

impl Hash for AstNodeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        self.address().hash(state);
    }
}

impl fmt::Debug for AstNodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            AstNodeRef::Decl(_) => "Decl",
            AstNodeRef::Expr(_) => "Expr",
            AstNodeRef::Stmt(_) => "Stmt",
            AstNodeRef::Pattern(_) => "Pattern",
        };
        f.debug_tuple(variant).field(&self.address()).finish()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// One of the four AST families.
///
/// Maps a family type to its [`AstNodeRef`] variant, which is how a
/// [`NodeCategory`]'s family is resolved at compile time.
pub trait NodeFamily: NodeCategory<Family = Self> + sealed::Sealed + 'static {
    /// Returns the node when `node` belongs to this family.
    fn from_node_ref(node: AstNodeRef<'_>) -> Option<&Self>;
}

macro_rules! node_family {
    ($family:ident) => {
        impl sealed::Sealed for $family {}

        impl NodeFamily for $family {
            fn from_node_ref(node: AstNodeRef<'_>) -> Option<&$family> {
                match node {
                    AstNodeRef::$family(n) => Some(n),
                    _ => None,
                }
            }
        }

        impl<'a> From<&'a $family> for AstNodeRef<'a> {
            fn from(node: &'a $family) -> Self {
                AstNodeRef::$family(node)
            }
        }
    };
}

node_family!(Decl);
node_family!(Expr);
node_family!(Stmt);
node_family!(Pattern);
