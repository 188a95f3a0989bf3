use crate::cursor::Cursor;

/// A lazily evaluated sequence of elements.
///
/// A sequence is a capability to produce fresh, independent [`Cursor`]s on
/// demand; it holds no position state of its own and is never mutated by
/// iteration. Sequences built over re-iterable sources (arrays, ranges,
/// repeated values, and any combinator over those) support any number of
/// simultaneous independent cursors.
///
/// The `'seq` lifetime ties a cursor to the sequence value it reads from,
/// allowing cursors to borrow element storage and callbacks instead of
/// cloning them.
pub trait Sequence<'seq> {
    /// The type of elements the sequence produces
    type Item;

    /// The cursor type produced by [`cursor`](Sequence::cursor)
    type Cursor: Cursor<Item = Self::Item>;

    /// Begin a new traversal from the start of the sequence
    fn cursor(&'seq self) -> Self::Cursor;
}

/// Consuming counterpart of [`Sequence`]: turn a value into a cursor that
/// owns all of its state.
///
/// `flat_map` requires this of its inner sequences: they are produced fresh
/// per outer element and must be owned outright by the cursor draining them.
pub trait IntoCursor {
    /// The type of elements the cursor produces
    type Item;

    /// The cursor type produced by [`into_cursor`](IntoCursor::into_cursor)
    type Cursor: Cursor<Item = Self::Item>;

    /// Consume the value and begin a traversal over its elements
    fn into_cursor(self) -> Self::Cursor;
}
