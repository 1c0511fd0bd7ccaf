use crate::cursor::{Cursor, pull_step};
use crate::flow::{Flow, Verdict};
use std::fmt;

/// Cursor adapter that keeps the elements a predicate accepts
///
/// The predicate answers with a [`Flow<(), E>`](Flow):
///
/// - `Continue(())` keeps the element
/// - `Break(())` keeps the element, then ends the cursor
/// - `Ignore` drops the element
/// - `IgnoreAndBreak` drops the element and ends the cursor
/// - `Fail(e)` ends the cursor and reports `e`
///
/// Source elements are pulled only while the consumer is pulling, one at a
/// time, and never after the cursor has ended.
pub struct Filter<C, F> {
    cursor: C,
    predicate: F,
    done: bool,
}

impl<C, F> Filter<C, F> {
    pub fn new(cursor: C, predicate: F) -> Self {
        Filter {
            cursor,
            predicate,
            done: false,
        }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Filter<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("cursor", &self.cursor)
            .field("predicate", &"<function>")
            .field("done", &self.done)
            .finish()
    }
}

impl<C, F> Cursor for Filter<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item) -> Flow<(), C::Error>,
{
    type Item = C::Item;
    type Error = C::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let predicate = &mut self.predicate;
        while !self.done {
            let Some(flow) = pull_step(&mut self.cursor, |item| predicate(&item).map(|()| item))
            else {
                self.done = true;
                tracing::trace!(combinator = "filter", "source exhausted");
                break;
            };

            match flow.resolve() {
                Ok(Verdict { value, stop }) => {
                    if stop {
                        self.done = true;
                        tracing::trace!(combinator = "filter", "stopped by sentinel");
                    }
                    if value.is_some() {
                        return Ok(value);
                    }
                }
                Err(error) => {
                    self.done = true;
                    tracing::trace!(combinator = "filter", "failed");
                    return Err(error);
                }
            }
        }
        Ok(None)
    }
}

/// Extension trait to add .filter() to all cursors
pub trait FilterExt: Cursor + Sized {
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> Flow<(), Self::Error>,
    {
        Filter::new(self, predicate)
    }
}

impl<C: Cursor> FilterExt for C {}

/// Convenience function to create a filtered cursor
pub fn filter<C, F>(cursor: C, predicate: F) -> Filter<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item) -> Flow<(), C::Error>,
{
    Filter::new(cursor, predicate)
}
