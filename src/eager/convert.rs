use crate::error::Partial;
use crate::flow::{Flow, Verdict};

/// Transform every element of `items`, collecting the emitted results.
pub fn convert<I, F, U, E>(items: I, mut converter: F) -> Result<Vec<U>, Partial<Vec<U>, E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Flow<U, E>,
{
    let mut converted = Vec::new();
    for item in items {
        match converter(item).resolve() {
            Ok(Verdict { value, stop }) => {
                converted.extend(value);
                if stop {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(
                    combinator = "convert",
                    converted = converted.len(),
                    "traversal failed"
                );
                return Err(Partial::new(converted, error));
            }
        }
    }
    Ok(converted)
}
