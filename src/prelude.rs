//! Glob-importable set of the traits needed to chain combinators.

pub use crate::convert::ConvertExt;
pub use crate::cursor::Cursor;
pub use crate::cursors::{FuseExt, IntoCursor, IterExt};
pub use crate::error::{Partial, SeqError};
pub use crate::filter::FilterExt;
pub use crate::find::FindExt;
pub use crate::flat_map::FlatMapExt;
pub use crate::flow::Flow;
pub use crate::group_by::GroupByExt;
pub use crate::map_err::{FallibleExt, MapErrExt};
pub use crate::pairs::{
    ConvertPairsExt, FilterPairsExt, FindPairExt, FlatMapPairsExt, GroupPairsExt, ReducePairsExt,
    VisitPairsExt,
};
pub use crate::reduce::ReduceExt;
pub use crate::visit::VisitExt;
