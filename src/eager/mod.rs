//! Combinators over materialized sequences.
//!
//! Every function here consumes the whole input (or stops early on a
//! sentinel) before returning, and classifies each callback answer through
//! [`Flow::resolve`](crate::flow::Flow::resolve) exactly as the lazy cursor
//! adapters do. Result-building operations return the partial result next to
//! the error when a callback fails; the failing element never contributes.

pub mod convert;
pub mod filter;
pub mod find;
pub mod flat_map;
pub mod group_by;
pub mod reduce;
pub mod visit;

pub use convert::convert;
pub use filter::filter;
pub use find::{first, last};
pub use flat_map::flat_map;
pub use group_by::group_by;
pub use reduce::reduce;
pub use visit::{for_each_until, visit};
