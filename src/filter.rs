use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::{IntoCursor, Sequence};

/// Combinator that keeps only the elements satisfying a predicate.
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Filter { source, predicate }
    }
}

/// Cursor with a one-element lookahead slot.
///
/// `pending` is the explicit lookahead state: `None` means no element has
/// been found yet, `Some` holds the next satisfying element until `advance`
/// hands it out. Repeated `has_next` calls neither re-search nor skip.
pub struct FilterCursor<C: Cursor, P> {
    inner: C,
    predicate: P,
    pending: Option<C::Item>,
}

impl<C: Cursor, P> FilterCursor<C, P> {
    pub fn new(inner: C, predicate: P) -> Self {
        FilterCursor {
            inner,
            predicate,
            pending: None,
        }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        while self.inner.has_next() {
            match self.inner.advance() {
                Ok(value) => {
                    if (self.predicate)(&value) {
                        self.pending = Some(value);
                        return true;
                    }
                }
                Err(_) => return false,
            }
        }
        false
    }

    fn advance(&mut self) -> Result<C::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        self.pending.take().ok_or(SequenceError::Exhausted)
    }
}

impl<'seq, S, P> Sequence<'seq> for Filter<S, P>
where
    S: Sequence<'seq>,
    P: Fn(&S::Item) -> bool + 'seq,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, &'seq P>;

    fn cursor(&'seq self) -> Self::Cursor {
        FilterCursor::new(self.source.cursor(), &self.predicate)
    }
}

impl<S, P> IntoCursor for Filter<S, P>
where
    S: IntoCursor,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn into_cursor(self) -> Self::Cursor {
        FilterCursor::new(self.source.into_cursor(), self.predicate)
    }
}

/// Convenience function to create a filtered sequence
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S, P> {
    Filter::new(source, predicate)
}

/// Extension trait to add .filter() method support for sequences
pub trait FilterExt<'seq>: Sequence<'seq> + Sized {
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }
}

/// Implement FilterExt for all sequences
impl<'seq, S> FilterExt<'seq> for S where S: Sequence<'seq> {}
