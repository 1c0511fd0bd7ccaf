use crate::cursor::{Cursor, pull_step};
use crate::error::Partial;
use crate::flow::{Flow, Verdict};

/// Fold every element of `cursor` into an accumulator.
///
/// The step function sees the accumulator by reference and answers with the
/// next one, so `Ignore` and `IgnoreAndBreak` leave the accumulator exactly as
/// it was. On failure the accumulator from before the failing element is
/// returned with the error.
pub fn reduce<C, A, F>(mut cursor: C, init: A, mut step: F) -> Result<A, Partial<A, C::Error>>
where
    C: Cursor,
    F: FnMut(&A, C::Item) -> Flow<A, C::Error>,
{
    let mut acc = init;
    let mut processed = 0_usize;
    while let Some(flow) = pull_step(&mut cursor, |item| step(&acc, item)) {
        processed += 1;
        match flow.resolve() {
            Ok(Verdict { value, stop }) => {
                if let Some(next) = value {
                    acc = next;
                }
                if stop {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(combinator = "reduce", processed, "traversal failed");
                return Err(Partial::new(acc, error));
            }
        }
    }
    Ok(acc)
}

/// Extension trait to add .reduce() to all cursors
pub trait ReduceExt: Cursor + Sized {
    fn reduce<A, F>(self, init: A, step: F) -> Result<A, Partial<A, Self::Error>>
    where
        F: FnMut(&A, Self::Item) -> Flow<A, Self::Error>,
    {
        reduce(self, init, step)
    }
}

impl<C: Cursor> ReduceExt for C {}
