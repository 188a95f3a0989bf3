use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::{IntoCursor, Sequence};

/// Combinator that transforms each element of a sequence with a mapping
/// function, applied lazily at pull time.
pub struct Map<S, F> {
    source: S,
    mapper: F,
}

impl<S, F> Map<S, F> {
    pub fn new(source: S, mapper: F) -> Self {
        Map { source, mapper }
    }
}

pub struct MapCursor<C, F> {
    inner: C,
    mapper: F,
}

impl<C, F> MapCursor<C, F> {
    pub fn new(inner: C, mapper: F) -> Self {
        MapCursor { inner, mapper }
    }
}

impl<C, F, U> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    fn advance(&mut self) -> Result<U, SequenceError> {
        let value = self.inner.advance()?;
        Ok((self.mapper)(value))
    }
}

impl<'seq, S, F, U> Sequence<'seq> for Map<S, F>
where
    S: Sequence<'seq>,
    F: Fn(S::Item) -> U + 'seq,
{
    type Item = U;
    type Cursor = MapCursor<S::Cursor, &'seq F>;

    fn cursor(&'seq self) -> Self::Cursor {
        MapCursor::new(self.source.cursor(), &self.mapper)
    }
}

impl<S, F, U> IntoCursor for Map<S, F>
where
    S: IntoCursor,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor = MapCursor<S::Cursor, F>;

    fn into_cursor(self) -> Self::Cursor {
        MapCursor::new(self.source.into_cursor(), self.mapper)
    }
}

/// Convenience function to create a mapped sequence
pub fn map<S, F>(source: S, mapper: F) -> Map<S, F> {
    Map::new(source, mapper)
}

/// Extension trait to add .map() method support for sequences
pub trait MapExt<'seq>: Sequence<'seq> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all sequences
impl<'seq, S> MapExt<'seq> for S where S: Sequence<'seq> {}
