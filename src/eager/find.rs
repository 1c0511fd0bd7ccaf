use crate::flow::{Flow, Verdict};

/// Return the first element of `items` the predicate matches.
///
/// `Continue(true)` is a match; `Continue(false)` and `Ignore` keep scanning.
/// Either stop sentinel ends the search successfully with no match.
pub fn first<I, F, E>(items: I, mut predicate: F) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Flow<bool, E>,
{
    for item in items {
        let Verdict { value, stop } = predicate(&item).resolve()?;
        if stop {
            return Ok(None);
        }
        if value == Some(true) {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

/// Return the last element of `items` the predicate matches.
///
/// Scans from the back, so the predicate sees elements in reverse order and
/// the search ends at the first match found from the end.
pub fn last<I, F, E>(items: I, predicate: F) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(&I::Item) -> Flow<bool, E>,
{
    first(items.into_iter().rev(), predicate)
}
