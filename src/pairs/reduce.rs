use crate::cursor::Cursor;
use crate::error::Partial;
use crate::flow::{Flow, Verdict};

/// Fold every pair of `cursor` into an accumulator.
pub fn reduce_pairs<C, K, V, A, F>(mut cursor: C, init: A, mut step: F) -> Result<A, Partial<A, C::Error>>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(&A, K, V) -> Flow<A, C::Error>,
{
    let mut acc = init;
    let mut processed = 0_usize;
    loop {
        let (key, value) = match cursor.pull() {
            Ok(Some(pair)) => pair,
            Ok(None) => return Ok(acc),
            Err(error) => {
                tracing::debug!(combinator = "reduce_pairs", processed, "source failed");
                return Err(Partial::new(acc, error));
            }
        };
        processed += 1;

        match step(&acc, key, value).resolve() {
            Ok(Verdict { value: next, stop }) => {
                if let Some(next) = next {
                    acc = next;
                }
                if stop {
                    return Ok(acc);
                }
            }
            Err(error) => {
                tracing::debug!(combinator = "reduce_pairs", processed, "traversal failed");
                return Err(Partial::new(acc, error));
            }
        }
    }
}

/// Extension trait to add .reduce_pairs() to cursors of pairs
pub trait ReducePairsExt<K, V>: Cursor<Item = (K, V)> + Sized {
    fn reduce_pairs<A, F>(self, init: A, step: F) -> Result<A, Partial<A, Self::Error>>
    where
        F: FnMut(&A, K, V) -> Flow<A, Self::Error>,
    {
        reduce_pairs(self, init, step)
    }
}

impl<C, K, V> ReducePairsExt<K, V> for C where C: Cursor<Item = (K, V)> {}
