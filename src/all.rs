use crate::any::any;
use crate::sequence::Sequence;

/// Short-circuiting universal quantifier: true iff every element satisfies
/// the predicate.
///
/// Defined as the negation of [`any`] of the negated predicate, so it stops
/// pulling as soon as a counterexample is found.
pub fn all<'seq, S, P>(source: &'seq S, predicate: P) -> bool
where
    S: Sequence<'seq>,
    P: Fn(&S::Item) -> bool,
{
    !any(source, |value| !predicate(value))
}

/// Extension trait to add .all() method support for sequences
pub trait AllExt<'seq>: Sequence<'seq> + Sized {
    fn all<P>(&'seq self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        all(self, predicate)
    }
}

/// Implement AllExt for all sequences
impl<'seq, S> AllExt<'seq> for S where S: Sequence<'seq> {}
