use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::Sequence;

/// Combinator that pairs two sequences element-wise.
///
/// Terminates as soon as either side is exhausted; neither side is advanced
/// unless both have a next element, so the longer side keeps its extra
/// elements unconsumed.
pub struct Zip<A, B> {
    firsts: A,
    seconds: B,
}

impl<A, B> Zip<A, B> {
    pub fn new(firsts: A, seconds: B) -> Self {
        Zip { firsts, seconds }
    }
}

pub struct ZipCursor<C1, C2> {
    firsts: C1,
    seconds: C2,
}

impl<C1, C2> ZipCursor<C1, C2> {
    pub fn new(firsts: C1, seconds: C2) -> Self {
        ZipCursor { firsts, seconds }
    }
}

impl<C1, C2> Cursor for ZipCursor<C1, C2>
where
    C1: Cursor,
    C2: Cursor,
{
    type Item = (C1::Item, C2::Item);

    fn has_next(&mut self) -> bool {
        self.firsts.has_next() && self.seconds.has_next()
    }

    fn advance(&mut self) -> Result<Self::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        Ok((self.firsts.advance()?, self.seconds.advance()?))
    }
}

impl<'seq, A, B> Sequence<'seq> for Zip<A, B>
where
    A: Sequence<'seq>,
    B: Sequence<'seq>,
{
    type Item = (A::Item, B::Item);
    type Cursor = ZipCursor<A::Cursor, B::Cursor>;

    fn cursor(&'seq self) -> Self::Cursor {
        ZipCursor::new(self.firsts.cursor(), self.seconds.cursor())
    }
}

/// Convenience function to pair two sequences element-wise
pub fn zip<A, B>(firsts: A, seconds: B) -> Zip<A, B> {
    Zip::new(firsts, seconds)
}

/// Extension trait to add .zip() method support for sequences
pub trait ZipExt<'seq>: Sequence<'seq> + Sized {
    fn zip<S>(self, seconds: S) -> Zip<Self, S>
    where
        S: Sequence<'seq>,
    {
        Zip::new(self, seconds)
    }
}

/// Implement ZipExt for all sequences
impl<'seq, S> ZipExt<'seq> for S where S: Sequence<'seq> {}
