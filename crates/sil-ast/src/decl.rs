//! Declarations

use crate::{NodeCategory, NodePositions, ast_family, ast_subtype};
use sil_source_map::SourceRange;

#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    kind: DeclKind,
    positions: NodePositions,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    Value(ValueDecl),
    PatternBinding(PatternBindingDecl),
    Import(ImportDecl),
}

/// A declaration that introduces a named value
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDecl {
    pub name: String,
    pub kind: ValueDeclKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueDeclKind {
    Var(VarDecl),
    Function(AbstractFunctionDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub is_let: bool,
}

/// Functions, initializers and deinitializers
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractFunctionDecl {
    pub kind: FunctionKind,
    pub has_body: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Func,
    Constructor,
    Destructor,
}

/// `let (a, b) = ...`: binds one or more patterns
#[derive(Debug, Clone, PartialEq)]
pub struct PatternBindingDecl {
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub module: String,
}

ast_family!(Decl, DeclKind);

impl Decl {
    pub fn var(name: impl Into<String>, is_let: bool, range: SourceRange) -> Self {
        Decl::new(
            DeclKind::Value(ValueDecl {
                name: name.into(),
                kind: ValueDeclKind::Var(VarDecl { is_let }),
            }),
            range,
        )
    }

    pub fn function(name: impl Into<String>, kind: FunctionKind, range: SourceRange) -> Self {
        Decl::new(
            DeclKind::Value(ValueDecl {
                name: name.into(),
                kind: ValueDeclKind::Function(AbstractFunctionDecl {
                    kind,
                    has_body: true,
                }),
            }),
            range,
        )
    }

    pub fn pattern_binding(entry_count: usize, range: SourceRange) -> Self {
        Decl::new(
            DeclKind::PatternBinding(PatternBindingDecl { entry_count }),
            range,
        )
    }

    pub fn import(module: impl Into<String>, range: SourceRange) -> Self {
        Decl::new(
            DeclKind::Import(ImportDecl {
                module: module.into(),
            }),
            range,
        )
    }
}

ast_subtype!(Decl, ValueDecl, DeclKind::Value);
ast_subtype!(Decl, PatternBindingDecl, DeclKind::PatternBinding);
ast_subtype!(Decl, ImportDecl, DeclKind::Import);

impl NodeCategory for VarDecl {
    type Family = Decl;
    const NAME: &'static str = "VarDecl";

    fn classify(node: &Decl) -> Option<&VarDecl> {
        match &ValueDecl::classify(node)?.kind {
            ValueDeclKind::Var(var) => Some(var),
            _ => None,
        }
    }
}

impl NodeCategory for AbstractFunctionDecl {
    type Family = Decl;
    const NAME: &'static str = "AbstractFunctionDecl";

    fn classify(node: &Decl) -> Option<&AbstractFunctionDecl> {
        match &ValueDecl::classify(node)?.kind {
            ValueDeclKind::Function(func) => Some(func),
            _ => None,
        }
    }
}
