use crate::cursor::Cursor;
use crate::flow::{Flow, Verdict};
use std::fmt;

/// Cursor adapter that converts every pair into a new pair
///
/// Use [`convert_key`](super::convert_key) or
/// [`convert_value`](super::convert_value) to rewrite one side only.
pub struct ConvertPairs<C, F> {
    cursor: C,
    converter: F,
    done: bool,
}

impl<C, F> ConvertPairs<C, F> {
    pub fn new(cursor: C, converter: F) -> Self {
        ConvertPairs {
            cursor,
            converter,
            done: false,
        }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for ConvertPairs<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertPairs")
            .field("cursor", &self.cursor)
            .field("converter", &"<function>")
            .field("done", &self.done)
            .finish()
    }
}

impl<C, F, K, V, K2, V2> Cursor for ConvertPairs<C, F>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(K, V) -> Flow<(K2, V2), C::Error>,
{
    type Item = (K2, V2);
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while !self.done {
            let (key, value) = match self.cursor.pull() {
                Ok(Some(pair)) => pair,
                Ok(None) => {
                    self.done = true;
                    tracing::trace!(combinator = "convert_pairs", "source exhausted");
                    break;
                }
                Err(error) => {
                    self.done = true;
                    tracing::trace!(combinator = "convert_pairs", "source failed");
                    return Err(error);
                }
            };

            match (self.converter)(key, value).resolve() {
                Ok(Verdict { value: pair, stop }) => {
                    if stop {
                        self.done = true;
                        tracing::trace!(combinator = "convert_pairs", "stopped by sentinel");
                    }
                    if pair.is_some() {
                        return Ok(pair);
                    }
                }
                Err(error) => {
                    self.done = true;
                    tracing::trace!(combinator = "convert_pairs", "failed");
                    return Err(error);
                }
            }
        }
        Ok(None)
    }
}

/// Extension trait to add .convert_pairs() to cursors of pairs
pub trait ConvertPairsExt<K, V>: Cursor<Item = (K, V)> + Sized {
    fn convert_pairs<F, K2, V2>(self, converter: F) -> ConvertPairs<Self, F>
    where
        F: FnMut(K, V) -> Flow<(K2, V2), Self::Error>,
    {
        ConvertPairs::new(self, converter)
    }
}

impl<C, K, V> ConvertPairsExt<K, V> for C where C: Cursor<Item = (K, V)> {}

/// Convenience function to create a converting cursor of pairs
pub fn convert_pairs<C, K, V, K2, V2, F>(cursor: C, converter: F) -> ConvertPairs<C, F>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(K, V) -> Flow<(K2, V2), C::Error>,
{
    ConvertPairs::new(cursor, converter)
}
