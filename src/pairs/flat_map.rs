use crate::cursor::Cursor;
use crate::flow::{Flow, Verdict};
use std::fmt;

/// Cursor adapter that expands every pair into a sub-sequence of pairs
pub struct FlatMapPairs<C, F, S: IntoIterator> {
    cursor: C,
    expander: F,
    pending: Option<S::IntoIter>,
    done: bool,
}

impl<C, F, S: IntoIterator> FlatMapPairs<C, F, S> {
    pub fn new(cursor: C, expander: F) -> Self {
        FlatMapPairs {
            cursor,
            expander,
            pending: None,
            done: false,
        }
    }
}

impl<C: fmt::Debug, F, S: IntoIterator> fmt::Debug for FlatMapPairs<C, F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMapPairs")
            .field("cursor", &self.cursor)
            .field("expander", &"<function>")
            .field("pending", &self.pending.is_some())
            .field("done", &self.done)
            .finish()
    }
}

impl<C, F, S, K, V, K2, V2> Cursor for FlatMapPairs<C, F, S>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(K, V) -> Flow<S, C::Error>,
    S: IntoIterator<Item = (K2, V2)>,
{
    type Item = (K2, V2);
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            if let Some(inner) = self.pending.as_mut() {
                if let Some(pair) = inner.next() {
                    return Ok(Some(pair));
                }
                self.pending = None;
            }
            if self.done {
                return Ok(None);
            }

            let (key, value) = match self.cursor.pull() {
                Ok(Some(pair)) => pair,
                Ok(None) => {
                    self.done = true;
                    tracing::trace!(combinator = "flat_map_pairs", "source exhausted");
                    return Ok(None);
                }
                Err(error) => {
                    self.done = true;
                    tracing::trace!(combinator = "flat_map_pairs", "source failed");
                    return Err(error);
                }
            };

            match (self.expander)(key, value).resolve() {
                Ok(Verdict { value: inner, stop }) => {
                    if stop {
                        self.done = true;
                        tracing::trace!(combinator = "flat_map_pairs", "stopped by sentinel");
                    }
                    self.pending = inner.map(IntoIterator::into_iter);
                }
                Err(error) => {
                    self.done = true;
                    tracing::trace!(combinator = "flat_map_pairs", "failed");
                    return Err(error);
                }
            }
        }
    }
}

/// Extension trait to add .flat_map_pairs() to cursors of pairs
pub trait FlatMapPairsExt<K, V>: Cursor<Item = (K, V)> + Sized {
    fn flat_map_pairs<F, S>(self, expander: F) -> FlatMapPairs<Self, F, S>
    where
        F: FnMut(K, V) -> Flow<S, Self::Error>,
        S: IntoIterator,
    {
        FlatMapPairs::new(self, expander)
    }
}

impl<C, K, V> FlatMapPairsExt<K, V> for C where C: Cursor<Item = (K, V)> {}

/// Convenience function to create a flat-mapping cursor of pairs
pub fn flat_map_pairs<C, K, V, S, F>(cursor: C, expander: F) -> FlatMapPairs<C, F, S>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(K, V) -> Flow<S, C::Error>,
    S: IntoIterator,
{
    FlatMapPairs::new(cursor, expander)
}
