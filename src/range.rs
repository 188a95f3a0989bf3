use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::{IntoCursor, Sequence};

/// Arithmetic progression from `start` towards `end` (exclusive) in
/// increments of `step`.
///
/// A value `v` is within range iff `(end - v) * step > 0`, which handles
/// ascending and descending ranges uniformly and yields an empty sequence
/// when `start` already equals or has crossed `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i64,
    end: i64,
    step: i64,
}

impl Range {
    /// Range from 0 to `end` in steps of 1
    pub fn to(end: i64) -> Self {
        Range {
            start: 0,
            end,
            step: 1,
        }
    }

    /// Range from `start` to `end` in steps of 1
    pub fn new(start: i64, end: i64) -> Self {
        Range {
            start,
            end,
            step: 1,
        }
    }

    /// Range from `start` to `end` in increments of `step`.
    ///
    /// Fails with [`SequenceError::ZeroStep`] when `step` is zero, before any
    /// element is produced.
    pub fn with_step(start: i64, end: i64, step: i64) -> Result<Self, SequenceError> {
        if step == 0 {
            return Err(SequenceError::ZeroStep);
        }
        Ok(Range { start, end, step })
    }
}

pub struct RangeCursor {
    next_value: i64,
    end: i64,
    step: i64,
}

impl Cursor for RangeCursor {
    type Item = i64;

    fn has_next(&mut self) -> bool {
        // step and (end - next_value) have the same sign, i.e. next_value has
        // not yet reached or crossed end
        (self.end - self.next_value) * self.step > 0
    }

    fn advance(&mut self) -> Result<i64, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        let value = self.next_value;
        self.next_value += self.step;
        Ok(value)
    }
}

impl<'seq> Sequence<'seq> for Range {
    type Item = i64;
    type Cursor = RangeCursor;

    fn cursor(&'seq self) -> Self::Cursor {
        RangeCursor {
            next_value: self.start,
            end: self.end,
            step: self.step,
        }
    }
}

impl IntoCursor for Range {
    type Item = i64;
    type Cursor = RangeCursor;

    fn into_cursor(self) -> Self::Cursor {
        self.cursor()
    }
}

/// Convenience function for the common 0..end range
pub fn range(end: i64) -> Range {
    Range::to(end)
}
