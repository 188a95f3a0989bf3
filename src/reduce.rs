use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Strict left fold: consumes the entire source, applying
/// `f(element, accumulator)` in order, seeded with `initial`.
///
/// An empty source returns `initial` unchanged. Must not be called on an
/// unbounded sequence.
pub fn reduce<'seq, S, F, R>(source: &'seq S, f: F, initial: R) -> R
where
    S: Sequence<'seq>,
    F: Fn(S::Item, R) -> R,
{
    let mut cursor = source.cursor();
    let mut accumulator = initial;
    while cursor.has_next() {
        match cursor.advance() {
            Ok(value) => accumulator = f(value, accumulator),
            Err(_) => break,
        }
    }
    accumulator
}

/// Extension trait to add .reduce() method support for sequences
pub trait ReduceExt<'seq>: Sequence<'seq> + Sized {
    fn reduce<F, R>(&'seq self, f: F, initial: R) -> R
    where
        F: Fn(Self::Item, R) -> R,
    {
        reduce(self, f, initial)
    }
}

/// Implement ReduceExt for all sequences
impl<'seq, S> ReduceExt<'seq> for S where S: Sequence<'seq> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::from_array;
    use crate::range::range;

    #[test]
    fn test_sum() {
        assert_eq!(range(4).reduce(|value, acc| acc + value, 0), 6);
    }

    #[test]
    fn test_empty_returns_initial() {
        let seq = from_array(Vec::<i64>::new());
        assert_eq!(seq.reduce(|value, acc| acc + value, 42), 42);
    }

    #[test]
    fn test_keep_accumulator() {
        // Ignoring every element leaves the seed untouched
        assert_eq!(range(4).reduce(|_, acc| acc, 42), 42);
    }

    #[test]
    fn test_keep_last_element() {
        // Replacing the accumulator each step keeps the last element
        assert_eq!(range(4).reduce(|value, _| value, 42), 3);
    }

    #[test]
    fn test_left_to_right_order() {
        let seq = from_array(vec!["a", "b", "c"]);
        let joined = seq.reduce(|value, acc: String| acc + value, String::new());
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_function_syntax() {
        let seq = from_array(vec![2, 3]);
        assert_eq!(reduce(&seq, |value, acc| acc * value, 1), 6);
    }
}
