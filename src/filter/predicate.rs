use crate::data::Restaurant;
use crate::selection::Selection;
use ahash::AHashSet;

/// A single row test derived from one field of a [`Selection`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum Predicate<'s> {
    /// Award must be in the set. An empty set rejects every row.
    Award(&'s AHashSet<String>),
    /// Currency must be in the set.
    Currency(&'s AHashSet<String>),
    /// Raw cuisine text must contain the token. Not a tag comparison.
    CuisineContains(&'s str),
}

impl Predicate<'_> {
    pub(crate) fn matches(&self, row: &Restaurant) -> bool {
        match self {
            Predicate::Award(awards) => awards.contains(row.award()),
            Predicate::Currency(codes) => codes.contains(row.currency()),
            Predicate::CuisineContains(token) => row.cuisine().contains(token),
        }
    }
}

/// Turns a selection into the list of predicates a row must all satisfy.
///
/// Cheap set lookups come first so the substring scan only runs on rows that
/// already passed them. Unconstrained fields contribute no predicate.
pub(crate) fn compile_predicates(selection: &Selection) -> Vec<Predicate<'_>> {
    let mut predicates = vec![Predicate::Award(selection.awards())];
    if !selection.currencies().is_empty() {
        predicates.push(Predicate::Currency(selection.currencies()));
    }
    if let Some(token) = selection.cuisine_token() {
        predicates.push(Predicate::CuisineContains(token));
    }
    predicates
}

pub(crate) fn matches_all(predicates: &[Predicate<'_>], row: &Restaurant) -> bool {
    predicates.iter().all(|p| p.matches(row))
}
