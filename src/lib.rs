//! # LazySeq - Lazy Sequence Combinators
//!
//! A small library of lazy, composable sequence operators built on an
//! explicit `has_next`/`advance` cursor protocol.
//!
//! LazySeq provides a wrapper capability over iterable sources and a set of
//! chainable operations that are all evaluated lazily: no element is
//! produced, and no side effect triggered, until the consumer pulls the next
//! element. The library emphasizes:
//!
//! - **Pull-based laziness**: combinators transform elements at pull time,
//!   with at most one element of lookahead
//! - **Zero panics**: exhaustion and construction failures are handled
//!   through `Result` types
//! - **Composability**: small sequences combine into pipelines using
//!   combinators, callable both as free functions and as chained methods
//! - **Infinite sequences**: unbounded sources compose safely with the
//!   short-circuiting and truncating operators
//!
//! ```rust
//! use lazyseq::{CollectExt, FilterExt, MapExt, from_array};
//!
//! let squares_of_evens = from_array(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|i| i % 2 == 0)
//!     .map(|i| i * i)
//!     .collect();
//! assert_eq!(squares_of_evens, vec![4, 16, 36]);
//! ```

pub mod all;
pub mod any;
pub mod array;
pub mod chain;
pub mod collect;
pub mod cursor;
pub mod each;
pub mod empty;
pub mod enumerate;
pub mod error;
pub mod filter;
pub mod first_or;
pub mod flat_map;
pub mod map;
pub mod range;
pub mod reduce;
pub mod repeat;
pub mod sequence;
pub mod take;
pub mod zip;

pub use all::{AllExt, all};
pub use any::{AnyExt, any};
pub use array::{Array, from_array};
pub use chain::{ChainExt, chain, concat};
pub use collect::{CollectExt, collect, collect_with_keys};
pub use cursor::Cursor;
pub use each::{EachExt, each};
pub use empty::{Empty, empty};
pub use enumerate::{EnumerateExt, enumerate};
pub use error::SequenceError;
pub use filter::{FilterExt, filter};
pub use first_or::{FirstOrExt, first_or};
pub use flat_map::{FlatMapExt, flat_map};
pub use map::{MapExt, map};
pub use range::{Range, range};
pub use reduce::{ReduceExt, reduce};
pub use repeat::{Repeat, repeat};
pub use sequence::{IntoCursor, Sequence};
pub use take::{TakeExt, take};
pub use zip::{ZipExt, zip};
