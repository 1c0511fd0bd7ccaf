use crate::cursor::Cursor;
use crate::flow::{Flow, Verdict};
use std::fmt;

/// Cursor adapter over pairs that keeps the pairs a predicate accepts
///
/// The predicate sees key and value separately; use
/// [`by_key`](super::by_key) or [`by_value`](super::by_value) to filter on
/// one side only.
pub struct FilterPairs<C, F> {
    cursor: C,
    predicate: F,
    done: bool,
}

impl<C, F> FilterPairs<C, F> {
    pub fn new(cursor: C, predicate: F) -> Self {
        FilterPairs {
            cursor,
            predicate,
            done: false,
        }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for FilterPairs<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPairs")
            .field("cursor", &self.cursor)
            .field("predicate", &"<function>")
            .field("done", &self.done)
            .finish()
    }
}

impl<C, F, K, V> Cursor for FilterPairs<C, F>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(&K, &V) -> Flow<(), C::Error>,
{
    type Item = (K, V);
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while !self.done {
            let (key, value) = match self.cursor.pull() {
                Ok(Some(pair)) => pair,
                Ok(None) => {
                    self.done = true;
                    tracing::trace!(combinator = "filter_pairs", "source exhausted");
                    break;
                }
                Err(error) => {
                    self.done = true;
                    tracing::trace!(combinator = "filter_pairs", "source failed");
                    return Err(error);
                }
            };

            match (self.predicate)(&key, &value).resolve() {
                Ok(Verdict { value: keep, stop }) => {
                    if stop {
                        self.done = true;
                        tracing::trace!(combinator = "filter_pairs", "stopped by sentinel");
                    }
                    if keep.is_some() {
                        return Ok(Some((key, value)));
                    }
                }
                Err(error) => {
                    self.done = true;
                    tracing::trace!(combinator = "filter_pairs", "failed");
                    return Err(error);
                }
            }
        }
        Ok(None)
    }
}

/// Extension trait to add .filter_pairs() to cursors of pairs
pub trait FilterPairsExt<K, V>: Cursor<Item = (K, V)> + Sized {
    fn filter_pairs<F>(self, predicate: F) -> FilterPairs<Self, F>
    where
        F: FnMut(&K, &V) -> Flow<(), Self::Error>,
    {
        FilterPairs::new(self, predicate)
    }
}

impl<C, K, V> FilterPairsExt<K, V> for C where C: Cursor<Item = (K, V)> {}

/// Convenience function to create a filtered cursor of pairs
pub fn filter_pairs<C, K, V, F>(cursor: C, predicate: F) -> FilterPairs<C, F>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(&K, &V) -> Flow<(), C::Error>,
{
    FilterPairs::new(cursor, predicate)
}
