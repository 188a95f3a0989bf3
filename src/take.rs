use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::{IntoCursor, Sequence};

/// Combinator that truncates a sequence to at most its first `count`
/// elements.
///
/// The explicit bounding device for infinite sequences: `repeat(v).take(n)`
/// is safe to hand to the strict terminals.
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub fn new(source: S, count: usize) -> Self {
        Take { source, count }
    }
}

pub struct TakeCursor<C> {
    inner: C,
    remaining: usize,
}

impl<C> TakeCursor<C> {
    pub fn new(inner: C, remaining: usize) -> Self {
        TakeCursor { inner, remaining }
    }
}

impl<C> Cursor for TakeCursor<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.remaining > 0 && self.inner.has_next()
    }

    fn advance(&mut self) -> Result<Self::Item, SequenceError> {
        if self.remaining == 0 {
            return Err(SequenceError::Exhausted);
        }
        let value = self.inner.advance()?;
        self.remaining -= 1;
        Ok(value)
    }
}

impl<'seq, S> Sequence<'seq> for Take<S>
where
    S: Sequence<'seq>,
{
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&'seq self) -> Self::Cursor {
        TakeCursor::new(self.source.cursor(), self.count)
    }
}

impl<S> IntoCursor for Take<S>
where
    S: IntoCursor,
{
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        TakeCursor::new(self.source.into_cursor(), self.count)
    }
}

/// Convenience function to truncate a sequence
pub fn take<S>(source: S, count: usize) -> Take<S> {
    Take::new(source, count)
}

/// Extension trait to add .take() method support for sequences
pub trait TakeExt<'seq>: Sequence<'seq> + Sized {
    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }
}

/// Implement TakeExt for all sequences
impl<'seq, S> TakeExt<'seq> for S where S: Sequence<'seq> {}
