//! The eight location views

use crate::kind::LocationKind;
use crate::location::SilLocation;
use crate::node::{AstNodeRef, NodeFamily};
use crate::view::{LocationView, location_view};
use sil_ast::{
    AbstractClosureExpr, AbstractFunctionDecl, BraceStmt, Decl, Expr, NodeCategory,
    PatternBindingDecl, ReturnStmt, Stmt, ValueDecl,
};
use sil_source_map::SourceLoc;

location_view! {
    /// Allowed on any instruction. Also what a bare AST node converts to.
    RegularLocation => Regular
}

impl<'a> RegularLocation<'a> {
    pub fn new(node: impl Into<AstNodeRef<'a>>) -> Self {
        RegularLocation(SilLocation::new(node))
    }

    /// A location representing the module.
    pub fn module_location() -> Self {
        let mut loc = RegularLocation(SilLocation::of_kind(LocationKind::Regular));
        loc.mark_as_in_top_level();
        loc
    }

    /// A location for code with no source counterpart at all.
    pub fn auto_generated_location() -> Self {
        let mut loc = RegularLocation(SilLocation::of_kind(LocationKind::Regular));
        loc.mark_auto_generated();
        loc
    }

    /// Returns the wrapped node if it is a `T`.
    pub fn get_as<T>(&self) -> Option<&'a T>
    where
        T: NodeCategory + 'a,
        T::Family: NodeFamily,
    {
        self.0.get_as_ast_node::<T>()
    }

    pub fn is<T>(&self) -> bool
    where
        T: NodeCategory + 'a,
        T::Family: NodeFamily,
    {
        self.0.is_ast_node::<T>()
    }

    /// # Panics
    ///
    /// Panics if the wrapped node is not a `T`.
    pub fn cast_to<T>(&self) -> &'a T
    where
        T: NodeCategory + 'a,
        T::Family: NodeFamily,
    {
        self.0.cast_to_ast_node::<T>()
    }
}

location_view! {
    /// A return instruction in user code.
    ///
    /// Allowed on branch and return instructions.
    ReturnLocation => Return
}

impl<'a> ReturnLocation<'a> {
    /// Wraps a `return` statement, or the brace body of a constructor or
    /// destructor whose return is synthesized.
    ///
    /// # Panics
    ///
    /// Panics if `stmt` is neither a [`ReturnStmt`] nor a [`BraceStmt`].
    pub fn new(stmt: &'a Stmt) -> Self {
        assert!(
            stmt.is::<ReturnStmt>() || stmt.is::<BraceStmt>(),
            "return locations wrap a ReturnStmt or a BraceStmt"
        );
        ReturnLocation(SilLocation::new(stmt).with_kind(LocationKind::Return))
    }

    /// # Panics
    ///
    /// Panics if this location wraps a constructor or destructor body rather
    /// than a `return` statement.
    pub fn get(&self) -> &'a ReturnStmt {
        self.0.cast_to_ast_node::<ReturnStmt>()
    }
}

location_view! {
    /// The implicit return at the end of a function or closure body.
    ///
    /// Allowed on branch and return instructions.
    ImplicitReturnLocation => ImplicitReturn
}

impl<'a> ImplicitReturnLocation<'a> {
    /// # Panics
    ///
    /// Panics if `expr` is not an [`AbstractClosureExpr`].
    pub fn from_closure(expr: &'a Expr) -> Self {
        assert!(
            expr.is::<AbstractClosureExpr>(),
            "implicit return locations wrap an AbstractClosureExpr"
        );
        Self::wrapping(expr.into())
    }

    /// # Panics
    ///
    /// Panics if `stmt` is not a [`ReturnStmt`].
    pub fn from_return_stmt(stmt: &'a Stmt) -> Self {
        assert!(
            stmt.is::<ReturnStmt>(),
            "implicit return locations wrap a ReturnStmt"
        );
        Self::wrapping(stmt.into())
    }

    /// # Panics
    ///
    /// Panics if `decl` is not an [`AbstractFunctionDecl`].
    pub fn from_function(decl: &'a Decl) -> Self {
        assert!(
            decl.is::<AbstractFunctionDecl>(),
            "implicit return locations wrap an AbstractFunctionDecl"
        );
        Self::wrapping(decl.into())
    }

    fn wrapping(node: AstNodeRef<'a>) -> Self {
        ImplicitReturnLocation(SilLocation::new(node).with_kind(LocationKind::ImplicitReturn))
    }

    /// Reclassifies `loc` as an implicit return, keeping its payload and all
    /// of its flags.
    ///
    /// This can build an implicit return for an arbitrary expression, which
    /// happens for auto-generated bodies.
    ///
    /// # Panics
    ///
    /// Panics unless `loc` wraps an expression, a [`ValueDecl`] or a
    /// [`PatternBindingDecl`], or is a null top-level location.
    pub fn from_location(loc: SilLocation<'a>) -> Self {
        assert!(
            loc.is_ast_node::<Expr>()
                || loc.is_ast_node::<ValueDecl>()
                || loc.is_ast_node::<PatternBindingDecl>()
                || (loc.is_null() && loc.is_in_top_level()),
            "cannot form an implicit return from a {} location wrapping {}",
            loc.kind(),
            loc.ast_node().map_or("no node", AstNodeRef::family_name)
        );
        tracing::trace!(from = %loc.kind(), "Deriving implicit return location");
        ImplicitReturnLocation(loc.with_kind(LocationKind::ImplicitReturn))
    }

    /// # Panics
    ///
    /// Panics unless this location wraps an [`AbstractClosureExpr`].
    pub fn get(&self) -> &'a AbstractClosureExpr {
        self.0.cast_to_ast_node::<AbstractClosureExpr>()
    }
}

location_view! {
    /// Code from a function body inlined by the general inliner, together
    /// with its setup code. Wraps the call site.
    ///
    /// Bodies inlined by the mandatory inliner use
    /// [`MandatoryInlinedLocation`] instead. Allowed on any instruction except
    /// returns.
    InlinedLocation => Inlined
}

location_view! {
    /// Code from a transparent function body inlined by the mandatory
    /// inlining pass. Wraps the call site.
    ///
    /// Allowed on any instruction except returns.
    MandatoryInlinedLocation => MandatoryInlined
}

// Inlined and MandatoryInlined share their construction surface; only the
// kind differs.
macro_rules! inlined_view {
    ($name:ident) => {
        impl<'a> $name<'a> {
            pub fn new(call_site: impl Into<AstNodeRef<'a>>) -> Self {
                $name(SilLocation::new(call_site).with_kind(Self::KIND))
            }

            /// A call site that only exists as a position in a parsed SIL
            /// file.
            pub fn from_file_loc(loc: SourceLoc) -> Self {
                $name(SilLocation::from_parts(
                    None,
                    Some(loc),
                    Self::KIND,
                    Default::default(),
                ))
            }

            /// Derives an inlined location from the call site's location,
            /// keeping its node or file position and all of its flags.
            pub fn from_location(loc: SilLocation<'a>) -> Self {
                tracing::trace!(from = %loc.kind(), to = %Self::KIND, "Deriving inlined location");
                $name(loc.with_kind(Self::KIND))
            }

            /// The call site's file position.
            ///
            /// # Panics
            ///
            /// Panics if the call site is an AST node.
            pub fn file_location(&self) -> Option<SourceLoc> {
                assert!(
                    !self.0.has_ast_location(),
                    "{} wraps an AST node, not a file position",
                    stringify!($name)
                );
                self.0.file_source_loc()
            }
        }
    };
}

inlined_view!(InlinedLocation);
inlined_view!(MandatoryInlinedLocation);

location_view! {
    /// Compiler-inserted cleanup such as deallocations and destructor calls.
    ///
    /// Cleanups run after the wrapped node finishes evaluating. The node is
    /// the enclosing scope (a function, a brace, a paren expression), and its
    /// end position is where the cleanup happens at run time. Locations of
    /// inlined destructors use this kind too. Allowed on any instruction
    /// except returns.
    CleanupLocation => Cleanup
}

impl<'a> CleanupLocation<'a> {
    pub fn new(scope: impl Into<AstNodeRef<'a>>) -> Self {
        CleanupLocation(SilLocation::new(scope).with_kind(LocationKind::Cleanup))
    }

    /// A cleanup on the module level.
    pub fn module_cleanup_location() -> Self {
        let mut loc = CleanupLocation(SilLocation::of_kind(LocationKind::Cleanup));
        loc.mark_as_in_top_level();
        loc
    }

    /// Derives a cleanup for the scope `loc` wraps, keeping its flags.
    ///
    /// A file position is not carried over.
    pub fn from_location(loc: SilLocation<'a>) -> Self {
        tracing::trace!(from = %loc.kind(), "Deriving cleanup location");
        CleanupLocation(loc.without_file_loc().with_kind(LocationKind::Cleanup))
    }
}

location_view! {
    /// An unreachable instruction introduced by the optimizer, as opposed to
    /// one present in user code.
    ///
    /// Has no counterpart in the source and must not be used in diagnostics
    /// or debug info. Allowed on unreachable instructions.
    ArtificialUnreachableLocation => ArtificialUnreachable
}

impl ArtificialUnreachableLocation<'_> {
    pub fn new() -> Self {
        ArtificialUnreachableLocation(SilLocation::of_kind(LocationKind::ArtificialUnreachable))
    }
}

impl Default for ArtificialUnreachableLocation<'_> {
    fn default() -> Self {
        Self::new()
    }
}

location_view! {
    /// A location in a parsed textual SIL file, with no AST node behind it.
    ///
    /// Allowed on any instruction.
    FileLocation => SilFile
}

impl FileLocation<'_> {
    pub fn new(loc: SourceLoc) -> Self {
        FileLocation(SilLocation::from_parts(
            None,
            Some(loc),
            LocationKind::SilFile,
            Default::default(),
        ))
    }

    pub fn file_location(&self) -> SourceLoc {
        match self.0.file_source_loc() {
            Some(loc) => loc,
            None => unreachable!("file locations are always built from a position"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::LocationFlags;
    use sil_ast::{CallExpr, ClosureKind, FunctionKind};
    use sil_source_map::{FileId, SourceRange};

    fn loc(offset: usize) -> SourceLoc {
        SourceLoc::new(FileId(0), offset)
    }

    fn range(start: usize, end: usize) -> SourceRange {
        SourceRange::new(loc(start), loc(end))
    }

    #[test]
    fn test_module_location() {
        let module = RegularLocation::module_location();
        assert!(module.is_null());
        assert!(module.is_in_top_level());
        assert!(!module.is_auto_generated());
        assert_eq!(module.kind(), LocationKind::Regular);
    }

    #[test]
    fn test_auto_generated_location() {
        let generated = RegularLocation::auto_generated_location();
        assert!(generated.is_null());
        assert!(generated.is_auto_generated());
        assert!(!generated.is_in_top_level());
    }

    #[test]
    fn test_regular_node_accessors() {
        let call = Expr::call("f", 0, range(0, 3));
        let regular = RegularLocation::new(&call);

        assert!(regular.is::<CallExpr>());
        assert!(!regular.is::<ReturnStmt>());
        assert_eq!(regular.get_as::<CallExpr>().unwrap().callee, "f");
        assert!(std::ptr::eq(regular.cast_to::<Expr>(), &call));
    }

    #[test]
    fn test_return_location() {
        let ret = Stmt::return_stmt(true, range(4, 12));
        let tag = ReturnLocation::new(&ret);

        assert_eq!(tag.kind(), LocationKind::Return);
        assert!(tag.get().has_result);
        assert!(std::ptr::eq(tag.get(), ret.get_as::<ReturnStmt>().unwrap()));
    }

    #[test]
    fn test_return_location_for_constructor_body() {
        let body = Stmt::brace(3, range(20, 60));
        let tag = ReturnLocation::new(&body);

        assert!(tag.is_ast_node::<BraceStmt>());
        assert!(!tag.is_ast_node::<ReturnStmt>());
    }

    #[test]
    #[should_panic(expected = "return locations wrap a ReturnStmt or a BraceStmt")]
    fn test_return_location_rejects_other_statements() {
        let stmt = Stmt::while_stmt(range(0, 10));
        let _ = ReturnLocation::new(&stmt);
    }

    #[test]
    fn test_implicit_return_typed_constructors() {
        let closure = Expr::closure(ClosureKind::Explicit, 1, range(0, 15));
        let ret = Stmt::return_stmt(false, range(0, 6));
        let func = Decl::function("deinit", FunctionKind::Destructor, range(0, 30));

        let from_closure = ImplicitReturnLocation::from_closure(&closure);
        assert_eq!(from_closure.kind(), LocationKind::ImplicitReturn);
        assert_eq!(from_closure.get().param_count, 1);

        assert!(ImplicitReturnLocation::from_return_stmt(&ret).is_ast_node::<ReturnStmt>());
        assert!(ImplicitReturnLocation::from_function(&func).is_ast_node::<AbstractFunctionDecl>());
    }

    #[test]
    #[should_panic(expected = "implicit return locations wrap an AbstractClosureExpr")]
    fn test_implicit_return_rejects_non_closure() {
        let call = Expr::call("f", 0, range(0, 3));
        let _ = ImplicitReturnLocation::from_closure(&call);
    }

    #[test]
    fn test_implicit_return_from_expression_keeps_flags() {
        let call = Expr::call("f", 0, range(0, 3));
        let mut tag = SilLocation::from(&call);
        tag.mark_auto_generated();
        tag.point_to_end();

        let implicit = ImplicitReturnLocation::from_location(tag);
        assert_eq!(implicit.kind(), LocationKind::ImplicitReturn);
        assert_eq!(implicit.flags(), tag.flags());
        assert!(implicit.is_auto_generated());
        assert_eq!(implicit.ast_node(), tag.ast_node());
    }

    #[test]
    fn test_implicit_return_from_declarations() {
        let var = Decl::var("x", false, range(0, 5));
        let binding = Decl::pattern_binding(1, range(0, 9));

        assert!(ImplicitReturnLocation::from_location(SilLocation::from(&var)).is_ast_node::<ValueDecl>());
        assert!(
            ImplicitReturnLocation::from_location(SilLocation::from(&binding))
                .is_ast_node::<PatternBindingDecl>()
        );
    }

    #[test]
    fn test_implicit_return_from_module_location() {
        let module = RegularLocation::module_location().location();
        let implicit = ImplicitReturnLocation::from_location(module);

        assert!(implicit.is_null());
        assert!(implicit.is_in_top_level());
    }

    #[test]
    #[should_panic(expected = "cannot form an implicit return from a regular location wrapping stmt")]
    fn test_implicit_return_rejects_statement() {
        let ret = Stmt::return_stmt(true, range(0, 8));
        let _ = ImplicitReturnLocation::from_location(SilLocation::from(&ret));
    }

    #[test]
    #[should_panic(expected = "wrapping no node")]
    fn test_implicit_return_rejects_null_outside_top_level() {
        let _ = ImplicitReturnLocation::from_location(SilLocation::default());
    }

    #[test]
    fn test_inlined_from_location_keeps_payload_and_flags() {
        let call = Expr::call("g", 2, range(30, 40));
        let mut call_site = SilLocation::from(&call);
        call_site.mark_as_prologue();

        let inlined = InlinedLocation::from_location(call_site);
        assert_eq!(inlined.kind(), LocationKind::Inlined);
        assert!(inlined.is_in_prologue());
        assert!(inlined.is_ast_node::<CallExpr>());
        assert_eq!(inlined.source_range(), call_site.source_range());
    }

    #[test]
    fn test_inlined_file_call_site() {
        let inlined = InlinedLocation::from_file_loc(loc(77));
        assert!(!inlined.is_null());
        assert!(!inlined.has_ast_location());
        assert_eq!(inlined.file_location(), Some(loc(77)));
        assert_eq!(inlined.source_loc(), Some(loc(77)));

        let from_sil = InlinedLocation::from_location(FileLocation::new(loc(5)).into());
        assert_eq!(from_sil.file_location(), Some(loc(5)));
    }

    #[test]
    #[should_panic(expected = "InlinedLocation wraps an AST node")]
    fn test_inlined_file_location_with_node_panics() {
        let call = Expr::call("g", 0, range(0, 3));
        let _ = InlinedLocation::new(&call).file_location();
    }

    #[test]
    fn test_mandatory_inlined_is_distinct_from_inlined() {
        let call = Expr::call("h", 0, range(0, 3));
        let mandatory = MandatoryInlinedLocation::new(&call);
        let general = InlinedLocation::new(&call);

        assert_eq!(mandatory.kind(), LocationKind::MandatoryInlined);
        assert!(mandatory.location().get_as::<InlinedLocation>().is_none());
        assert_ne!(mandatory.location(), general.location());

        let rederived = MandatoryInlinedLocation::from_location(general.into());
        assert_eq!(rederived.ast_node(), mandatory.ast_node());
        assert_eq!(rederived, mandatory);
    }

    #[test]
    fn test_cleanup_locations() {
        let scope = Stmt::brace(2, range(0, 50));
        let cleanup = CleanupLocation::new(&scope);
        assert_eq!(cleanup.kind(), LocationKind::Cleanup);
        assert_eq!(cleanup.end_source_loc(), Some(loc(50)));

        let module = CleanupLocation::module_cleanup_location();
        assert!(module.is_null());
        assert!(module.is_in_top_level());
    }

    #[test]
    fn test_cleanup_from_location() {
        let func = Decl::function("f", FunctionKind::Func, range(0, 80));
        let mut tag = SilLocation::from(&func);
        tag.mark_auto_generated();

        let cleanup = CleanupLocation::from_location(tag);
        assert!(cleanup.is_ast_node::<AbstractFunctionDecl>());
        assert!(cleanup.is_auto_generated());

        let from_file = CleanupLocation::from_location(FileLocation::new(loc(9)).into());
        assert!(from_file.is_null());
        assert_eq!(from_file.flags(), LocationFlags::empty());
    }

    #[test]
    fn test_artificial_unreachable() {
        let unreachable = ArtificialUnreachableLocation::new();
        assert!(unreachable.is_null());
        assert_eq!(unreachable.kind(), LocationKind::ArtificialUnreachable);
        assert_eq!(unreachable, ArtificialUnreachableLocation::default());

        let module = RegularLocation::module_location().location();
        assert!(module.get_as::<ArtificialUnreachableLocation>().is_none());
    }

    #[test]
    #[should_panic(expected = "cannot cast a cleanup location to ArtificialUnreachableLocation")]
    fn test_artificial_unreachable_cast_panics() {
        let module = CleanupLocation::module_cleanup_location().location();
        let _ = module.cast_to::<ArtificialUnreachableLocation>();
    }

    #[test]
    fn test_file_location() {
        let file = FileLocation::new(loc(42));
        assert_eq!(file.kind(), LocationKind::SilFile);
        assert_eq!(file.file_location(), loc(42));
        assert!(!file.is_null());
        assert!(!file.has_ast_location());

        for position in [file.source_loc(), file.start_source_loc(), file.end_source_loc()] {
            assert_eq!(position, Some(loc(42)));
        }
    }

    #[test]
    fn test_view_flag_mutators_keep_kind() {
        let mut file = FileLocation::new(loc(1));
        file.mark_auto_generated();
        file.point_to_start();
        file.point_to_end();
        file.mark_as_prologue();
        file.mark_as_in_top_level();

        assert_eq!(file.kind(), LocationKind::SilFile);
        assert_eq!(file.flags(), LocationFlags::all());
        assert!(file.location().is::<FileLocation>());
        // No node, so the points-to flags do not move the position
        assert_eq!(file.source_range(), Some(SourceRange::point(loc(1))));
    }
}
