//! Statements

use crate::{NodePositions, ast_family, ast_subtype};
use sil_source_map::SourceRange;

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    kind: StmtKind,
    positions: NodePositions,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Brace(BraceStmt),
    Return(ReturnStmt),
    If(IfStmt),
    While(WhileStmt),
}

/// `{ ... }`. Also stands in for the body of a constructor or destructor.
#[derive(Debug, Clone, PartialEq)]
pub struct BraceStmt {
    pub element_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub has_result: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub has_else: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt;

ast_family!(Stmt, StmtKind);

impl Stmt {
    pub fn brace(element_count: usize, range: SourceRange) -> Self {
        Stmt::new(StmtKind::Brace(BraceStmt { element_count }), range)
    }

    pub fn return_stmt(has_result: bool, range: SourceRange) -> Self {
        Stmt::new(StmtKind::Return(ReturnStmt { has_result }), range)
    }

    pub fn if_stmt(has_else: bool, range: SourceRange) -> Self {
        Stmt::new(StmtKind::If(IfStmt { has_else }), range)
    }

    pub fn while_stmt(range: SourceRange) -> Self {
        Stmt::new(StmtKind::While(WhileStmt), range)
    }
}

ast_subtype!(Stmt, BraceStmt, StmtKind::Brace);
ast_subtype!(Stmt, ReturnStmt, StmtKind::Return);
ast_subtype!(Stmt, IfStmt, StmtKind::If);
ast_subtype!(Stmt, WhileStmt, StmtKind::While);
