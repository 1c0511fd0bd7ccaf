use crate::error::Partial;
use crate::flow::{Flow, Verdict};

/// Fold `items` into an accumulator, starting from `init`.
///
/// `Ignore` and `IgnoreAndBreak` keep the accumulator unchanged. On failure
/// the accumulator from before the failing element is returned.
pub fn reduce<I, A, F, E>(items: I, init: A, mut step: F) -> Result<A, Partial<A, E>>
where
    I: IntoIterator,
    F: FnMut(&A, I::Item) -> Flow<A, E>,
{
    let mut acc = init;
    for (processed, item) in items.into_iter().enumerate() {
        match step(&acc, item).resolve() {
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
