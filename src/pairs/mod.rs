//! Key/value combinators.
//!
//! A parallel set of adapters for cursors and collections of `(K, V)`. Step
//! functions receive key and value as separate arguments, so either side can
//! drive filtering or conversion on its own (see [`by_key`], [`by_value`],
//! [`convert_key`], [`convert_value`]). The control-flow protocol is the same
//! [`Flow`](crate::Flow) every single-value combinator uses.

pub mod adapt;
pub mod convert;
pub mod eager;
pub mod filter;
pub mod find;
pub mod flat_map;
pub mod group_by;
pub mod reduce;
pub mod visit;

pub use adapt::{by_key, by_value, convert_key, convert_value};
pub use convert::{ConvertPairs, ConvertPairsExt, convert_pairs};
pub use filter::{FilterPairs, FilterPairsExt, filter_pairs};
pub use find::{FindPairExt, first_pair, last_pair};
pub use flat_map::{FlatMapPairs, FlatMapPairsExt, flat_map_pairs};
pub use group_by::{GroupPairsExt, group_pairs};
pub use reduce::{ReducePairsExt, reduce_pairs};
pub use visit::{VisitPairsExt, for_each_pair_until, visit_pairs};
