use crate::range::{Range, RangeCursor};
use crate::sequence::{IntoCursor, Sequence};
use crate::zip::ZipCursor;

/// Combinator that pairs each element with its zero-based position.
///
/// Implemented as a zip of `range(i64::MAX)` with the source: the index side
/// costs nothing until pulled, and zip's shortest-side termination bounds it
/// to the source length.
pub struct Enumerate<S> {
    source: S,
}

impl<S> Enumerate<S> {
    pub fn new(source: S) -> Self {
        Enumerate { source }
    }
}

impl<'seq, S> Sequence<'seq> for Enumerate<S>
where
    S: Sequence<'seq>,
{
    type Item = (i64, S::Item);
    type Cursor = ZipCursor<RangeCursor, S::Cursor>;

    fn cursor(&'seq self) -> Self::Cursor {
        ZipCursor::new(Range::to(i64::MAX).into_cursor(), self.source.cursor())
    }
}

/// Convenience function to number the elements of a sequence
pub fn enumerate<S>(source: S) -> Enumerate<S> {
    Enumerate::new(source)
}

/// Extension trait to add .enumerate() method support for sequences
pub trait EnumerateExt<'seq>: Sequence<'seq> + Sized {
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }
}

/// Implement EnumerateExt for all sequences
impl<'seq, S> EnumerateExt<'seq> for S where S: Sequence<'seq> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::from_array;
    use crate::collect::CollectExt;
    use crate::cursor::Cursor;

    #[test]
    fn test_numbers_from_zero() {
        let result = from_array(vec!["a", "b", "c"]).enumerate().collect();
        assert_eq!(result, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_empty_source() {
        let seq = from_array(Vec::<i64>::new()).enumerate();
        let mut cursor = seq.cursor();

        assert!(!cursor.has_next());
    }

    #[test]
    fn test_independent_cursors_restart_numbering() {
        let seq = from_array(vec!["x", "y"]).enumerate();

        assert_eq!(seq.collect(), vec![(0, "x"), (1, "y")]);
        assert_eq!(seq.collect(), vec![(0, "x"), (1, "y")]);
    }

    #[test]
    fn test_function_syntax() {
        let result = enumerate(from_array(vec![10, 20])).collect();
        assert_eq!(result, vec![(0, 10), (1, 20)]);
    }
}
