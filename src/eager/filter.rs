use crate::error::Partial;
use crate::flow::{Flow, Verdict};

/// Keep the elements of `items` the predicate accepts.
///
/// ```
/// use seqflow::{Flow, SeqError, eager};
///
/// let kept = eager::filter(vec![1, 2, 3, 4], |e| -> Flow<(), SeqError> {
///     if *e == 2 { Flow::Break(()) } else { Flow::Continue(()) }
/// });
/// assert_eq!(kept.unwrap(), vec![1, 2]);
/// ```
pub fn filter<I, F, E>(items: I, mut predicate: F) -> Result<Vec<I::Item>, Partial<Vec<I::Item>, E>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Flow<(), E>,
{
    let mut kept = Vec::new();
    for item in items {
        match predicate(&item).resolve() {
            Ok(Verdict { value, stop }) => {
                if value.is_some() {
                    kept.push(item);
                }
                if stop {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(combinator = "filter", kept = kept.len(), "traversal failed");
                return Err(Partial::new(kept, error));
            }
        }
    }
    Ok(kept)
}
