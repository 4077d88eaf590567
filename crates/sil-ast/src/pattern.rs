//! Patterns

use crate::{NodePositions, ast_family, ast_subtype};
use sil_source_map::SourceRange;

#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    positions: NodePositions,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatternKind {
    Named(NamedPattern),
    Any(AnyPattern),
    Tuple(TuplePattern),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedPattern {
    pub name: String,
}

/// `_`
#[derive(Debug, Clone, PartialEq)]
pub struct AnyPattern;

#[derive(Debug, Clone, PartialEq)]
pub struct TuplePattern {
    pub arity: usize,
}

ast_family!(Pattern, PatternKind);

impl Pattern {
    pub fn named(name: impl Into<String>, range: SourceRange) -> Self {
        Pattern::new(PatternKind::Named(NamedPattern { name: name.into() }), range)
    }

    pub fn any(range: SourceRange) -> Self {
        Pattern::new(PatternKind::Any(AnyPattern), range)
    }

    pub fn tuple(arity: usize, range: SourceRange) -> Self {
        Pattern::new(PatternKind::Tuple(TuplePattern { arity }), range)
    }
}

ast_subtype!(Pattern, NamedPattern, PatternKind::Named);
ast_subtype!(Pattern, AnyPattern, PatternKind::Any);
ast_subtype!(Pattern, TuplePattern, PatternKind::Tuple);

#[cfg(test)]
mod tests {
    use super::*;
    use sil_source_map::{FileId, SourceLoc};

    #[test]
    fn test_pattern_subtypes() {
        let loc = SourceLoc::new(FileId(0), 4);
        let named = Pattern::named("x", SourceRange::point(loc));
        let tuple = Pattern::tuple(2, SourceRange::new(loc, loc.advanced_by(6)));

        assert_eq!(named.get_as::<NamedPattern>().unwrap().name, "x");
        assert!(!named.is::<AnyPattern>());
        assert_eq!(tuple.get_as::<TuplePattern>().unwrap().arity, 2);
        assert_eq!(tuple.end_loc().offset, 10);
        assert!(Pattern::any(SourceRange::point(loc)).is::<AnyPattern>());
    }
}
