//! Producers of cursors: iterators, closures, and the fuse latch.

pub mod func;
pub mod fuse;
pub mod iter;

pub use func::{FromFn, TryFromFn, from_fn, try_from_fn};
pub use fuse::{Fuse, FuseExt};
pub use iter::{CursorIter, IntoCursor, IterCursor, IterExt, TryIterCursor, from_iter, try_from_iter};
