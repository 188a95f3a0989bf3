use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Strictly consumes the sequence, invoking a side-effecting callback per
/// element, in order.
///
/// Must not be called on an unbounded sequence.
pub fn each<'seq, S, F>(source: &'seq S, mut effect: F)
where
    S: Sequence<'seq>,
    F: FnMut(S::Item),
{
    let mut cursor = source.cursor();
    while cursor.has_next() {
        match cursor.advance() {
            Ok(value) => effect(value),
            Err(_) => break,
        }
    }
}

/// Extension trait to add .each() method support for sequences
pub trait EachExt<'seq>: Sequence<'seq> + Sized {
    fn each<F>(&'seq self, effect: F)
    where
        F: FnMut(Self::Item),
    {
        each(self, effect)
    }
}

/// Implement EachExt for all sequences
impl<'seq, S> EachExt<'seq> for S where S: Sequence<'seq> {}
