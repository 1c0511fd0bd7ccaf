use crate::cursor::Cursor;
use std::convert::Infallible;
use std::fmt;

/// Cursor driven by a closure returning `Some` until the sequence ends
///
/// The closure is not called again once it has returned `None`.
pub struct FromFn<F> {
    next: F,
    done: bool,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("next", &"<function>")
            .field("done", &self.done)
            .finish()
    }
}

impl<F, T> Cursor for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;
    type Error = Infallible;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }
        let item = (self.next)();
        self.done = item.is_none();
        Ok(item)
    }
}

/// Cursor driven by a fallible closure
///
/// The closure is not called again once it has returned `Ok(None)` or `Err`.
pub struct TryFromFn<F> {
    next: F,
    done: bool,
}

impl<F> fmt::Debug for TryFromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFromFn")
            .field("next", &"<function>")
            .field("done", &self.done)
            .finish()
    }
}

impl<F, T, E> Cursor for TryFromFn<F>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    type Item = T;
    type Error = E;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }
        let pulled = (self.next)();
        self.done = !matches!(pulled, Ok(Some(_)));
        pulled
    }
}

/// Convenience function to create a cursor from a closure
pub fn from_fn<F, T>(next: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { next, done: false }
}

/// Convenience function to create a cursor from a fallible closure
pub fn try_from_fn<F, T, E>(next: F) -> TryFromFn<F>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    TryFromFn { next, done: false }
}
