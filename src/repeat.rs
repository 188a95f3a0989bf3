use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::{IntoCursor, Sequence};

/// Infinite sequence yielding the same value forever.
///
/// `has_next` is always true; consumers must bound the traversal explicitly,
/// e.g. by zipping with a finite sequence, truncating with `take`, or using
/// a short-circuiting quantifier.
pub struct Repeat<T> {
    value: T,
}

impl<T> Repeat<T> {
    pub fn new(value: T) -> Self {
        Repeat { value }
    }
}

pub struct RepeatCursor<'seq, T> {
    value: &'seq T,
}

impl<'seq, T: Clone> Cursor for RepeatCursor<'seq, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        true
    }

    fn advance(&mut self) -> Result<T, SequenceError> {
        Ok(self.value.clone())
    }
}

pub struct RepeatIntoCursor<T> {
    value: T,
}

impl<T: Clone> Cursor for RepeatIntoCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        true
    }

    fn advance(&mut self) -> Result<T, SequenceError> {
        Ok(self.value.clone())
    }
}

impl<'seq, T: Clone + 'seq> Sequence<'seq> for Repeat<T> {
    type Item = T;
    type Cursor = RepeatCursor<'seq, T>;

    fn cursor(&'seq self) -> Self::Cursor {
        RepeatCursor { value: &self.value }
    }
}

impl<T: Clone> IntoCursor for Repeat<T> {
    type Item = T;
    type Cursor = RepeatIntoCursor<T>;

    fn into_cursor(self) -> Self::Cursor {
        RepeatIntoCursor { value: self.value }
    }
}

/// Convenience function to create an infinite repeating sequence
pub fn repeat<T>(value: T) -> Repeat<T> {
    Repeat::new(value)
}
