use crate::cursor::{Cursor, pull_step};
use crate::flow::{Flow, Verdict};
use std::fmt;

/// Cursor adapter that transforms every element with a step function
///
/// `Continue(u)` emits `u`, `Break(u)` emits `u` and ends the cursor,
/// `Ignore` drops the element, `IgnoreAndBreak` ends the cursor without
/// emitting, `Fail(e)` ends the cursor and reports `e`.
pub struct Convert<C, F> {
    cursor: C,
    converter: F,
    done: bool,
}

impl<C, F> Convert<C, F> {
    pub fn new(cursor: C, converter: F) -> Self {
        Convert {
            cursor,
            converter,
            done: false,
        }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Convert<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Convert")
            .field("cursor", &self.cursor)
            .field("converter", &"<function>")
            .field("done", &self.done)
            .finish()
    }
}

impl<C, F, U> Cursor for Convert<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> Flow<U, C::Error>,
{
    type Item = U;
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while !self.done {
            let Some(flow) = pull_step(&mut self.cursor, &mut self.converter) else {
                self.done = true;
                tracing::trace!(combinator = "convert", "source exhausted");
                break;
            };

            match flow.resolve() {
                Ok(Verdict { value, stop }) => {
                    if stop {
                        self.done = true;
                        tracing::trace!(combinator = "convert", "stopped by sentinel");
                    }
                    if value.is_some() {
                        return Ok(value);
                    }
                }
                Err(error) => {
                    self.done = true;
                    tracing::trace!(combinator = "convert", "failed");
                    return Err(error);
                }
            }
        }
        Ok(None)
    }
}

/// Extension trait to add .convert() to all cursors
pub trait ConvertExt: Cursor + Sized {
    fn convert<F, U>(self, converter: F) -> Convert<Self, F>
    where
        F: FnMut(Self::Item) -> Flow<U, Self::Error>,
    {
        Convert::new(self, converter)
    }

    /// Infallible conversion; every element is emitted
    fn map<F, U>(self, mut mapper: F) -> Convert<Self, impl FnMut(Self::Item) -> Flow<U, Self::Error>>
    where
        F: FnMut(Self::Item) -> U,
    {
        Convert::new(self, move |item| Flow::Continue(mapper(item)))
    }
}

impl<C: Cursor> ConvertExt for C {}

/// Convenience function to create a converting cursor
pub fn convert<C, F, U>(cursor: C, converter: F) -> Convert<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> Flow<U, C::Error>,
{
    Convert::new(cursor, converter)
}
