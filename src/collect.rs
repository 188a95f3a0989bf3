use crate::cursor::Cursor;
use crate::sequence::Sequence;
use std::collections::HashMap;
use std::hash::Hash;

/// Fully consumes the source into a vector preserving iteration order.
///
/// Must not be called on an unbounded sequence; bound it first with `zip`
/// or `take`.
pub fn collect<'seq, S>(source: &'seq S) -> Vec<S::Item>
where
    S: Sequence<'seq>,
{
    let mut result = Vec::new();
    let mut cursor = source.cursor();
    while cursor.has_next() {
        match cursor.advance() {
            Ok(value) => result.push(value),
            Err(_) => break,
        }
    }
    result
}

/// Pairs `keys` with `values` position-wise and builds a key to value map.
///
/// Shortest-side semantics as in `zip`: values or keys beyond the shorter
/// sequence's length are silently dropped. Later-positioned duplicate keys
/// overwrite earlier ones.
pub fn collect_with_keys<'seq, V, K>(values: &'seq V, keys: &'seq K) -> HashMap<K::Item, V::Item>
where
    V: Sequence<'seq>,
    K: Sequence<'seq>,
    K::Item: Eq + Hash,
{
    let mut result = HashMap::new();
    let mut keys = keys.cursor();
    let mut values = values.cursor();
    while keys.has_next() && values.has_next() {
        match (keys.advance(), values.advance()) {
            (Ok(key), Ok(value)) => {
                result.insert(key, value);
            }
            _ => break,
        }
    }
    result
}

/// Extension trait to add .collect() and .collect_with_keys() method support
/// for sequences
pub trait CollectExt<'seq>: Sequence<'seq> + Sized {
    fn collect(&'seq self) -> Vec<Self::Item> {
        collect(self)
    }

    fn collect_with_keys<K>(&'seq self, keys: &'seq K) -> HashMap<K::Item, Self::Item>
    where
        K: Sequence<'seq>,
        K::Item: Eq + Hash,
    {
        collect_with_keys(self, keys)
    }
}

/// Implement CollectExt for all sequences
impl<'seq, S> CollectExt<'seq> for S where S: Sequence<'seq> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::from_array;

    #[test]
    fn test_collect_preserves_order() {
        let seq = from_array(vec![1, 2, 3, 4]);
        assert_eq!(seq.collect(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_collect_empty() {
        let seq = from_array(Vec::<i64>::new());
        assert_eq!(seq.collect(), Vec::<i64>::new());
    }

    #[test]
    fn test_collect_with_keys_shortest_side() {
        let values = from_array(vec![1, 2, 3, 4]);
        let keys = from_array(vec!["one", "two", "three"]);
        let result = values.collect_with_keys(&keys);

        // Only 3 keys
        assert_eq!(result.len(), 3);
        assert_eq!(result["one"], 1);
        assert_eq!(result["two"], 2);
        assert_eq!(result["three"], 3);
    }

    #[test]
    fn test_collect_with_keys_extra_keys_dropped() {
        let values = from_array(vec![1]);
        let keys = from_array(vec!["one", "two"]);
        let result = values.collect_with_keys(&keys);

        assert_eq!(result.len(), 1);
        assert_eq!(result["one"], 1);
    }

    #[test]
    fn test_collect_with_keys_duplicate_keys_overwrite() {
        let values = from_array(vec![1, 2, 3]);
        let keys = from_array(vec!["a", "b", "a"]);
        let result = values.collect_with_keys(&keys);

        assert_eq!(result.len(), 2);
        assert_eq!(result["a"], 3);
        assert_eq!(result["b"], 2);
    }

    #[test]
    fn test_function_syntax() {
        let seq = from_array(vec![9]);
        assert_eq!(collect(&seq), vec![9]);
    }
}
