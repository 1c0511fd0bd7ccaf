use crate::cursor::{Cursor, pull_step};
use crate::flow::{Flow, Verdict};

/// Return the first element the predicate matches.
///
/// The predicate answers `Continue(true)` for a match and `Continue(false)`
/// (or `Ignore`) to keep scanning. Either stop sentinel ends the search with
/// no match; that is a successful answer, not an error.
pub fn first<C, F>(mut cursor: C, mut predicate: F) -> Result<Option<C::Item>, C::Error>
where
    C: Cursor,
    F: FnMut(&C::Item) -> Flow<bool, C::Error>,
{
    while let Some(flow) = pull_step(&mut cursor, |item| predicate(&item).map(|hit| (hit, item))) {
        let Verdict { value, stop } = flow.resolve()?;
        if stop {
            tracing::trace!(combinator = "first", "search stopped by sentinel");
            return Ok(None);
        }
        if let Some((true, item)) = value {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

/// Return the last element the predicate matches.
///
/// A cursor only runs forward, so the whole sequence is scanned and the most
/// recent match is kept. Either stop sentinel abandons the search with no
/// match, the same answer [`first`] gives.
pub fn last<C, F>(mut cursor: C, mut predicate: F) -> Result<Option<C::Item>, C::Error>
where
    C: Cursor,
    F: FnMut(&C::Item) -> Flow<bool, C::Error>,
{
    let mut found = None;
    while let Some(flow) = pull_step(&mut cursor, |item| predicate(&item).map(|hit| (hit, item))) {
        let Verdict { value, stop } = flow.resolve()?;
        if stop {
            tracing::trace!(combinator = "last", "search stopped by sentinel");
            return Ok(None);
        }
        if let Some((true, item)) = value {
            found = Some(item);
        }
    }
    Ok(found)
}

/// Extension trait to add .first() and .last() to all cursors
pub trait FindExt: Cursor + Sized {
    fn first<F>(self, predicate: F) -> Result<Option<Self::Item>, Self::Error>
    where
        F: FnMut(&Self::Item) -> Flow<bool, Self::Error>,
    {
        first(self, predicate)
    }

    fn last<F>(self, predicate: F) -> Result<Option<Self::Item>, Self::Error>
    where
        F: FnMut(&Self::Item) -> Flow<bool, Self::Error>,
    {
        last(self, predicate)
    }
}

impl<C: Cursor> FindExt for C {}
