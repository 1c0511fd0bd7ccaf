use crate::error::Partial;
use crate::flow::Flow;

/// Pull-based sequence handle
///
/// Each call to [`Cursor::pull`] advances the cursor by one element:
///
/// - `Ok(Some(item))`: an element, more may follow
/// - `Ok(None)`: the sequence is exhausted
/// - `Err(error)`: the source failed
///
/// Infallible sources use `Error = std::convert::Infallible`.
///
/// A cursor is valid for one forward traversal. Once it has reported
/// exhaustion or an error, later pulls must report exhaustion again; cursors
/// that cannot promise this can be wrapped in [`Fuse`](crate::cursors::Fuse).
///
/// Cursors are single-consumer. Nothing here synchronizes concurrent pulls;
/// sharing one cursor between two call sites is the caller's responsibility.
pub trait Cursor {
    /// The type of elements this cursor yields
    type Item;

    /// Error type returned when the underlying source fails
    type Error;

    /// Advance the cursor and return the next element
    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error>;

    /// Drain the cursor into a `Vec`
    ///
    /// On failure the elements pulled so far are returned with the error.
    fn collect_vec(mut self) -> Result<Vec<Self::Item>, Partial<Vec<Self::Item>, Self::Error>>
    where
        Self: Sized,
    {
        let mut items = Vec::new();
        loop {
            match self.pull() {
                Ok(Some(item)) => items.push(item),
                Ok(None) => return Ok(items),
                Err(error) => return Err(Partial::new(items, error)),
            }
        }
    }

    /// Count the remaining elements, stopping at the first failure
    fn count(mut self) -> Result<usize, Partial<usize, Self::Error>>
    where
        Self: Sized,
    {
        let mut count = 0;
        loop {
            match self.pull() {
                Ok(Some(_)) => count += 1,
                Ok(None) => return Ok(count),
                Err(error) => return Err(Partial::new(count, error)),
            }
        }
    }

    /// Borrow the cursor so adapters can be layered without giving it up
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).pull()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).pull()
    }
}

/// Pull one element from `cursor` and hand it to `step`, folding a source
/// failure into `Flow::Fail`.
///
/// Returns `None` once the source is exhausted. Every lazy adapter funnels its
/// source through this so that source failures and step failures take the
/// same path.
pub(crate) fn pull_step<C, U, F>(cursor: &mut C, step: F) -> Option<Flow<U, C::Error>>
where
    C: Cursor,
    F: FnOnce(C::Item) -> Flow<U, C::Error>,
{
    match cursor.pull() {
        Ok(Some(item)) => Some(step(item)),
        Ok(None) => None,
        Err(error) => Some(Flow::Fail(error)),
    }
}
