use crate::error::Partial;
use crate::flow::{Flow, Verdict};

/// Expand every element of `items` into a sub-sequence and concatenate them.
///
/// `Break(seq)` still contributes all of `seq`.
pub fn flat_map<I, F, S, E>(items: I, mut expander: F) -> Result<Vec<S::Item>, Partial<Vec<S::Item>, E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Flow<S, E>,
    S: IntoIterator,
{
    let mut flattened = Vec::new();
    for item in items {
        match expander(item).resolve() {
            Ok(Verdict { value, stop }) => {
                if let Some(inner) = value {
                    flattened.extend(inner);
                }
                if stop {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(
                    combinator = "flat_map",
                    flattened = flattened.len(),
                    "traversal failed"
                );
                return Err(Partial::new(flattened, error));
            }
        }
    }
    Ok(flattened)
}
