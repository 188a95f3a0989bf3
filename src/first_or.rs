use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// First element of the sequence, or `default` when it is empty.
///
/// Consumes at most one element and never surfaces an exhaustion error.
pub fn first_or<'seq, S>(source: &'seq S, default: S::Item) -> S::Item
where
    S: Sequence<'seq>,
{
    let mut cursor = source.cursor();
    if !cursor.has_next() {
        return default;
    }
    cursor.advance().unwrap_or(default)
}

/// Extension trait to add .first_or() method support for sequences
pub trait FirstOrExt<'seq>: Sequence<'seq> + Sized {
    fn first_or(&'seq self, default: Self::Item) -> Self::Item {
        first_or(self, default)
    }
}

/// Implement FirstOrExt for all sequences
impl<'seq, S> FirstOrExt<'seq> for S where S: Sequence<'seq> {}
