use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::{IntoCursor, Sequence};
use std::marker::PhantomData;

/// Sequence with no elements.
pub struct Empty<T> {
    marker: PhantomData<T>,
}

impl<T> Empty<T> {
    pub fn new() -> Self {
        Empty {
            marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Empty::new()
    }
}

/// Stateless cursor that is exhausted from the start. Trivially constructible
/// wherever a combinator needs an already-drained position.
pub struct EmptyCursor<T> {
    marker: PhantomData<T>,
}

impl<T> EmptyCursor<T> {
    pub fn new() -> Self {
        EmptyCursor {
            marker: PhantomData,
        }
    }
}

impl<T> Default for EmptyCursor<T> {
    fn default() -> Self {
        EmptyCursor::new()
    }
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        false
    }

    fn advance(&mut self) -> Result<T, SequenceError> {
        Err(SequenceError::Exhausted)
    }
}

impl<'seq, T> Sequence<'seq> for Empty<T> {
    type Item = T;
    type Cursor = EmptyCursor<T>;

    fn cursor(&'seq self) -> Self::Cursor {
        EmptyCursor::new()
    }
}

impl<T> IntoCursor for Empty<T> {
    type Item = T;
    type Cursor = EmptyCursor<T>;

    fn into_cursor(self) -> Self::Cursor {
        EmptyCursor::new()
    }
}

/// Convenience function to create an empty sequence
pub fn empty<T>() -> Empty<T> {
    Empty::new()
}
