use crate::cursor::{Cursor, pull_step};
use crate::flow::{Flow, Verdict};
use std::fmt;

/// Cursor adapter that expands every element into a sub-sequence
///
/// At most one sub-sequence is pending at a time; the source is not pulled
/// again until it has been drained. `Break(seq)` still emits all of `seq`
/// before the cursor ends.
pub struct FlatMap<C, F, S: IntoIterator> {
    cursor: C,
    expander: F,
    pending: Option<S::IntoIter>,
    done: bool,
}

impl<C, F, S: IntoIterator> FlatMap<C, F, S> {
    pub fn new(cursor: C, expander: F) -> Self {
        FlatMap {
            cursor,
            expander,
            pending: None,
            done: false,
        }
    }
}

impl<C: fmt::Debug, F, S: IntoIterator> fmt::Debug for FlatMap<C, F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap")
            .field("cursor", &self.cursor)
            .field("expander", &"<function>")
            .field("pending", &self.pending.is_some())
            .field("done", &self.done)
            .finish()
    }
}

impl<C, F, S> Cursor for FlatMap<C, F, S>
where
    C: Cursor,
    F: FnMut(C::Item) -> Flow<S, C::Error>,
    S: IntoIterator,
{
    type Item = S::Item;
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            if let Some(inner) = self.pending.as_mut() {
                if let Some(item) = inner.next() {
                    return Ok(Some(item));
                }
                self.pending = None;
            }
            if self.done {
                return Ok(None);
            }

            let Some(flow) = pull_step(&mut self.cursor, &mut self.expander) else {
                self.done = true;
                tracing::trace!(combinator = "flat_map", "source exhausted");
                return Ok(None);
            };

            match flow.resolve() {
                Ok(Verdict { value, stop }) => {
                    if stop {
                        self.done = true;
                        tracing::trace!(combinator = "flat_map", "stopped by sentinel");
                    }
                    self.pending = value.map(IntoIterator::into_iter);
                }
                Err(error) => {
                    self.done = true;
                    tracing::trace!(combinator = "flat_map", "failed");
                    return Err(error);
                }
            }
        }
    }
}

/// Extension trait to add .flat_map() to all cursors
pub trait FlatMapExt: Cursor + Sized {
    fn flat_map<F, S>(self, expander: F) -> FlatMap<Self, F, S>
    where
        F: FnMut(Self::Item) -> Flow<S, Self::Error>,
        S: IntoIterator,
    {
        FlatMap::new(self, expander)
    }
}

impl<C: Cursor> FlatMapExt for C {}

/// Convenience function to create a flat-mapping cursor
pub fn flat_map<C, F, S>(cursor: C, expander: F) -> FlatMap<C, F, S>
where
    C: Cursor,
    F: FnMut(C::Item) -> Flow<S, C::Error>,
    S: IntoIterator,
{
    FlatMap::new(cursor, expander)
}
