//! Expressions

use crate::{NodePositions, ast_family, ast_subtype};
use sil_source_map::SourceRange;

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    kind: ExprKind,
    positions: NodePositions,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Literal(LiteralExpr),
    DeclRef(DeclRefExpr),
    Call(CallExpr),
    Paren(ParenExpr),
    Closure(AbstractClosureExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclRefExpr {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arg_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr;

/// Explicit `{ ... }` closures and compiler-formed autoclosures
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractClosureExpr {
    pub kind: ClosureKind,
    pub param_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosureKind {
    Explicit,
    Auto,
}

ast_family!(Expr, ExprKind);

impl Expr {
    pub fn literal(text: impl Into<String>, range: SourceRange) -> Self {
        Expr::new(ExprKind::Literal(LiteralExpr { text: text.into() }), range)
    }

    pub fn decl_ref(name: impl Into<String>, range: SourceRange) -> Self {
        Expr::new(ExprKind::DeclRef(DeclRefExpr { name: name.into() }), range)
    }

    pub fn call(callee: impl Into<String>, arg_count: usize, range: SourceRange) -> Self {
        Expr::new(
            ExprKind::Call(CallExpr {
                callee: callee.into(),
                arg_count,
            }),
            range,
        )
    }

    pub fn paren(range: SourceRange) -> Self {
        Expr::new(ExprKind::Paren(ParenExpr), range)
    }

    pub fn closure(kind: ClosureKind, param_count: usize, range: SourceRange) -> Self {
        Expr::new(
            ExprKind::Closure(AbstractClosureExpr { kind, param_count }),
            range,
        )
    }
}

ast_subtype!(Expr, LiteralExpr, ExprKind::Literal);
ast_subtype!(Expr, DeclRefExpr, ExprKind::DeclRef);
ast_subtype!(Expr, CallExpr, ExprKind::Call);
ast_subtype!(Expr, ParenExpr, ExprKind::Paren);
ast_subtype!(Expr, AbstractClosureExpr, ExprKind::Closure);
