use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::{IntoCursor, Sequence};

/// Combinator that yields all elements of `first`, then all elements of
/// `second`.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Chain { first, second }
    }
}

pub struct ChainCursor<C1, C2> {
    first: C1,
    second: C2,
}

impl<C1, C2> ChainCursor<C1, C2> {
    pub fn new(first: C1, second: C2) -> Self {
        ChainCursor { first, second }
    }
}

impl<C1, C2> Cursor for ChainCursor<C1, C2>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
{
    type Item = C1::Item;

    fn has_next(&mut self) -> bool {
        self.first.has_next() || self.second.has_next()
    }

    fn advance(&mut self) -> Result<Self::Item, SequenceError> {
        if self.first.has_next() {
            self.first.advance()
        } else {
            self.second.advance()
        }
    }
}

impl<'seq, A, B> Sequence<'seq> for Chain<A, B>
where
    A: Sequence<'seq>,
    B: Sequence<'seq, Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = ChainCursor<A::Cursor, B::Cursor>;

    fn cursor(&'seq self) -> Self::Cursor {
        ChainCursor::new(self.first.cursor(), self.second.cursor())
    }
}

impl<A, B> IntoCursor for Chain<A, B>
where
    A: IntoCursor,
    B: IntoCursor<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = ChainCursor<A::Cursor, B::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        ChainCursor::new(self.first.into_cursor(), self.second.into_cursor())
    }
}

/// Convenience function to concatenate two sequences
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B> {
    Chain::new(first, second)
}

/// Extension trait to add .chain_with() method support for sequences
pub trait ChainExt<'seq>: Sequence<'seq> + Sized {
    fn chain_with<S>(self, next: S) -> Chain<Self, S>
    where
        S: Sequence<'seq, Item = Self::Item>,
    {
        Chain::new(self, next)
    }
}

/// Implement ChainExt for all sequences
impl<'seq, S> ChainExt<'seq> for S where S: Sequence<'seq> {}

/// Concatenation of any number of same-typed sequences.
///
/// Equivalent to flattening a sequence of sequences over the identity
/// function: empty sub-sequences are skipped, and the whole sequence is
/// exhausted only once every sub-sequence is. `concat(vec![])` is exhausted
/// immediately.
pub struct Concat<S> {
    sources: Vec<S>,
}

impl<S> Concat<S> {
    pub fn new(sources: Vec<S>) -> Self {
        Concat { sources }
    }
}

pub struct ConcatCursor<'seq, S>
where
    S: Sequence<'seq>,
{
    /// Sub-sequences not yet opened
    rest: &'seq [S],
    current: Option<S::Cursor>,
}

impl<'seq, S> Cursor for ConcatCursor<'seq, S>
where
    S: Sequence<'seq>,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        loop {
            if let Some(current) = &mut self.current {
                if current.has_next() {
                    return true;
                }
            }
            match self.rest.split_first() {
                Some((head, tail)) => {
                    self.current = Some(head.cursor());
                    self.rest = tail;
                }
                None => return false,
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

impl<'seq, S> Sequence<'seq> for Concat<S>
where
    S: Sequence<'seq> + 'seq,
{
    type Item = S::Item;
    type Cursor = ConcatCursor<'seq, S>;

    fn cursor(&'seq self) -> Self::Cursor {
        ConcatCursor {
            rest: &self.sources,
            current: None,
        }
    }
}

/// Convenience function to concatenate a vector of sequences
pub fn concat<S>(sources: Vec<S>) -> Concat<S> {
    Concat::new(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::from_array;
    use crate::collect::CollectExt;
    use crate::empty::empty;

    #[test]
    fn test_chain_two_sequences() {
        let result = chain(from_array(vec![1, 2, 3]), from_array(vec![4, 5])).collect();
        assert_eq!(result, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_chain_with_empty_side() {
        let result = chain(from_array(vec![1]), from_array(vec![])).collect();
        assert_eq!(result, vec![1]);

        let result = chain(from_array(vec![]), from_array(vec![2])).collect();
        assert_eq!(result, vec![2]);
    }

    #[test]
    fn test_chain_with_empty_sequence_type() {
        let result = chain(from_array(vec![1, 2]), empty()).collect();
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_chain_with_method_syntax() {
        let result = from_array(vec![1, 2, 3])
            .chain_with(from_array(vec![4, 5]))
            .collect();
        assert_eq!(result, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_concat_skips_empty_middle() {
        let result = concat(vec![
            from_array(vec!["one", "bis"]),
            from_array(vec![]),
            from_array(vec!["two"]),
        ])
        .collect();
        assert_eq!(result, vec!["one", "bis", "two"]);
    }

    #[test]
    fn test_concat_nothing_is_exhausted() {
        let seq = concat(Vec::<crate::array::Array<i64>>::new());
        let mut cursor = seq.cursor();

        assert!(!cursor.has_next());
        assert_eq!(cursor.advance(), Err(SequenceError::Exhausted));
    }

    #[test]
    fn test_concat_all_empty_is_exhausted() {
        let seq = concat(vec![from_array(Vec::<i64>::new()), from_array(vec![])]);
        let mut cursor = seq.cursor();

        assert!(!cursor.has_next());
    }

    #[test]
    fn test_has_next_is_idempotent() {
        let seq = concat(vec![from_array(vec![]), from_array(vec![9])]);
        let mut cursor = seq.cursor();

        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.advance().unwrap(), 9);
        assert!(!cursor.has_next());
    }
}
