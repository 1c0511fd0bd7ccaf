use crate::cursor::Cursor;

/// Latches a cursor into exhaustion after its first `None` or `Err`
///
/// Producers that would otherwise keep answering after they ended (a closure
/// that restarts, a socket-like source that reports the same failure forever)
/// become safe to pull repeatedly.
#[derive(Debug, Clone)]
pub struct Fuse<C> {
    cursor: C,
    done: bool,
}

impl<C> Fuse<C> {
    pub fn new(cursor: C) -> Self {
        Fuse {
            cursor,
            done: false,
        }
    }

    /// Whether the wrapped cursor has ended
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Cursor for Fuse<C> {
    type Item = C::Item;
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }
        let pulled = self.cursor.pull();
        if !matches!(pulled, Ok(Some(_))) {
            self.done = true;
            tracing::trace!(failed = pulled.is_err(), "cursor fused");
        }
        pulled
    }
}

/// Extension trait to add .fuse() to all cursors
pub trait FuseExt: Cursor + Sized {
    fn fuse(self) -> Fuse<Self> {
        Fuse::new(self)
    }
}

/// Implement FuseExt for all cursors
impl<C: Cursor> FuseExt for C {}
