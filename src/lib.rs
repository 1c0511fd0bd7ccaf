//! # SeqFlow - Sequence Combinator Library
//!
//! Filter, convert, flatten, reduce and group sequences of values or key/value
//! pairs, either eagerly over a materialized collection or lazily over a
//! pull-based [`Cursor`].
//!
//! Every step callback answers with a [`Flow`], which decides both whether the
//! current result is kept and whether the traversal goes on:
//!
//! - **`Continue`**: keep the result, keep going
//! - **`Break`**: keep the result, then stop successfully
//! - **`Ignore`**: drop the result, keep going
//! - **`IgnoreAndBreak`**: drop the result, stop successfully
//! - **`Fail`**: stop and report the error, along with any partial result
//!
//! All combinators, eager or lazy, single-value or pair, classify these answers
//! the same way through [`Flow::resolve`].
//!
//! ```
//! use seqflow::prelude::*;
//!
//! let squares = (1..=5)
//!     .into_cursor()
//!     .map(|x| x * x)
//!     .filter(|x| Flow::keep_if(x % 2 == 0))
//!     .collect_vec()
//!     .unwrap();
//! assert_eq!(squares, vec![4, 16]);
//! ```
//!
//! The library is synchronous and single-threaded: a cursor chain belongs to
//! the call stack driving it, and cancellation happens only through the
//! sentinels above.

pub mod convert;
pub mod cursor;
pub mod cursors;
pub mod eager;
pub mod error;
pub mod filter;
pub mod find;
pub mod flat_map;
pub mod flow;
pub mod group_by;
pub mod map_err;
pub mod pairs;
pub mod prelude;
pub mod reduce;
pub mod visit;

pub use convert::{Convert, ConvertExt, convert};
pub use cursor::Cursor;
pub use cursors::{Fuse, IntoCursor, IterCursor, TryIterCursor, from_fn, from_iter, try_from_fn, try_from_iter};
pub use error::{Partial, SeqError};
pub use filter::{Filter, FilterExt, filter};
pub use find::FindExt;
pub use flat_map::{FlatMap, FlatMapExt, flat_map};
pub use flow::{Flow, Outcome, Verdict};
pub use group_by::{GroupByExt, Groups, group_by};
pub use map_err::{Fallible, FallibleExt, MapErr, MapErrExt};
pub use reduce::ReduceExt;
pub use visit::{VisitExt, for_each_until};
