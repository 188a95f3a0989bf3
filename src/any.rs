use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Short-circuiting existential quantifier: true iff some element satisfies
/// the predicate.
///
/// Stops pulling from the source as soon as a satisfying element is found,
/// so an infinite sequence is safe whenever a match exists.
pub fn any<'seq, S, P>(source: &'seq S, predicate: P) -> bool
where
    S: Sequence<'seq>,
    P: Fn(&S::Item) -> bool,
{
    let mut cursor = source.cursor();
    while cursor.has_next() {
        match cursor.advance() {
            Ok(value) => {
                if predicate(&value) {
                    return true;
                }
            }
            Err(_) => break,
        }
    }
    false
}

/// Extension trait to add .any() method support for sequences
pub trait AnyExt<'seq>: Sequence<'seq> + Sized {
    fn any<P>(&'seq self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        any(self, predicate)
    }
}

/// Implement AnyExt for all sequences
impl<'seq, S> AnyExt<'seq> for S where S: Sequence<'seq> {}
