use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::{IntoCursor, Sequence};

/// Combinator that maps each element to a nested sequence and flattens the
/// results in order.
///
/// The mapping function returns any [`IntoCursor`] value: a source sequence,
/// a plain `Vec`, or a nested pipeline. Inner sequences are produced one at a
/// time; nothing is pre-fetched beyond the inner cursor currently draining
/// plus the one outer element that produced it.
pub struct FlatMap<S, F> {
    source: S,
    mapper: F,
}

impl<S, F> FlatMap<S, F> {
    pub fn new(source: S, mapper: F) -> Self {
        FlatMap { source, mapper }
    }
}

/// Cursor draining one inner sequence at a time.
///
/// `current` is `None` until the first pull and between inner sequences;
/// empty inner sequences are skipped transparently by the search loop.
pub struct FlatMapCursor<C, F, I: IntoCursor> {
    outer: C,
    mapper: F,
    current: Option<I::Cursor>,
}

impl<C, F, I: IntoCursor> FlatMapCursor<C, F, I> {
    pub fn new(outer: C, mapper: F) -> Self {
        FlatMapCursor {
            outer,
            mapper,
            current: None,
        }
    }
}

impl<C, F, I> Cursor for FlatMapCursor<C, F, I>
where
    C: Cursor,
    F: Fn(C::Item) -> I,
    I: IntoCursor,
{
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        loop {
            if let Some(current) = &mut self.current {
                if current.has_next() {
                    return true;
                }
            }
            if !self.outer.has_next() {
                return false;
            }
            match self.outer.advance() {
                Ok(value) => self.current = Some((self.mapper)(value).into_cursor()),
                Err(_) => return false,
            }
        }
    }

    fn advance(&mut self) -> Result<Self::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        match &mut self.current {
            Some(current) => current.advance(),
            None => Err(SequenceError::Exhausted),
        }
    }
}

impl<'seq, S, F, I> Sequence<'seq> for FlatMap<S, F>
where
    S: Sequence<'seq>,
    F: Fn(S::Item) -> I + 'seq,
    I: IntoCursor,
{
    type Item = I::Item;
    type Cursor = FlatMapCursor<S::Cursor, &'seq F, I>;

    fn cursor(&'seq self) -> Self::Cursor {
        FlatMapCursor::new(self.source.cursor(), &self.mapper)
    }
}

/// Convenience function to create a flattened, mapped sequence
pub fn flat_map<S, F>(source: S, mapper: F) -> FlatMap<S, F> {
    FlatMap::new(source, mapper)
}

/// Extension trait to add .flat_map() method support for sequences
pub trait FlatMapExt<'seq>: Sequence<'seq> + Sized {
    fn flat_map<F, I>(self, mapper: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Item) -> I,
        I: IntoCursor,
    {
        FlatMap::new(self, mapper)
    }
}

/// Implement FlatMapExt for all sequences
impl<'seq, S> FlatMapExt<'seq> for S where S: Sequence<'seq> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::from_array;
    use crate::collect::CollectExt;
    use crate::range::{Range, range};

    #[test]
    fn test_flattens_ranges() {
        // [2, 3] -> range(2) ++ range(3)
        let result = Range::new(2, 4).flat_map(range).collect();
        assert_eq!(result, vec![0, 1, 0, 1, 2]);
    }

    #[test]
    fn test_inner_vectors() {
        let result = from_array(vec![1, 2, 3])
            .flat_map(|i| vec![i; i as usize])
            .collect();
        assert_eq!(result, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_skips_empty_inner_sequences() {
        // Odd elements map to empty vectors and must be skipped transparently
        let result = from_array(vec![1, 2, 3, 4])
            .flat_map(|i| if i % 2 == 0 { vec![i] } else { vec![] })
            .collect();
        assert_eq!(result, vec![2, 4]);
    }

    #[test]
    fn test_all_inner_empty_is_exhausted() {
        let seq = from_array(vec![1, 2, 3]).flat_map(|_| Vec::<i64>::new());
        let mut cursor = seq.cursor();

        assert!(!cursor.has_next());
        assert_eq!(cursor.advance(), Err(SequenceError::Exhausted));
    }

    #[test]
    fn test_empty_outer_is_exhausted() {
        let seq = from_array(Vec::<i64>::new()).flat_map(|i| vec![i]);
        let mut cursor = seq.cursor();

        assert!(!cursor.has_next());
    }

    #[test]
    fn test_does_not_prefetch_inner_sequences() {
        use std::cell::Cell;

        let produced = Cell::new(0);
        let seq = from_array(vec![10, 20]).flat_map(|i| {
            produced.set(produced.get() + 1);
            vec![i]
        });
        let mut cursor = seq.cursor();

        // Pulling the first element opens only the first inner sequence
        assert_eq!(cursor.advance().unwrap(), 10);
        assert_eq!(produced.get(), 1);
        assert_eq!(cursor.advance().unwrap(), 20);
        assert_eq!(produced.get(), 2);
    }

    #[test]
    fn test_has_next_is_idempotent() {
        let seq = from_array(vec![1]).flat_map(|i| vec![i]);
        let mut cursor = seq.cursor();

        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.advance().unwrap(), 1);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_function_syntax() {
        let seq = flat_map(from_array(vec![0, 2]), |i| vec![i, i + 1]);
        assert_eq!(seq.collect(), vec![0, 1, 2, 3]);
    }
}
