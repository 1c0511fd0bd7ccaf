use crate::cursor::{Cursor, pull_step};
use crate::flow::Flow;

/// Hand every element to `consumer` until it asks to stop.
///
/// `Continue(())` and `Ignore` move on to the next element, `Break(())` and
/// `IgnoreAndBreak` stop successfully, `Fail(e)` stops and returns `e`.
/// Returns how many elements the consumer was given.
pub fn visit<C, F>(mut cursor: C, mut consumer: F) -> Result<usize, C::Error>
where
    C: Cursor,
    F: FnMut(C::Item) -> Flow<(), C::Error>,
{
    let mut visited = 0;
    while let Some(flow) = pull_step(&mut cursor, |item| {
        visited += 1;
        consumer(item)
    }) {
        if flow.resolve()?.stop {
            tracing::trace!(combinator = "visit", visited, "stopped by sentinel");
            break;
        }
    }
    Ok(visited)
}

/// [`visit`] without the count
pub fn for_each_until<C, F>(cursor: C, consumer: F) -> Result<(), C::Error>
where
    C: Cursor,
    F: FnMut(C::Item) -> Flow<(), C::Error>,
{
    visit(cursor, consumer).map(|_| ())
}

/// Extension trait to add early-exit traversal to all cursors
pub trait VisitExt: Cursor + Sized {
    fn for_each_until<F>(self, consumer: F) -> Result<(), Self::Error>
    where
        F: FnMut(Self::Item) -> Flow<(), Self::Error>,
    {
        for_each_until(self, consumer)
    }

    fn visit<F>(self, consumer: F) -> Result<usize, Self::Error>
    where
        F: FnMut(Self::Item) -> Flow<(), Self::Error>,
    {
        visit(self, consumer)
    }
}

impl<C: Cursor> VisitExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{IntoCursor, try_from_iter};
    use crate::error::SeqError;
    use crate::map_err::FallibleExt;

    #[test]
    fn test_visit_everything() {
        let mut seen = Vec::new();
        let visited = (1..=3)
            .into_cursor()
            .visit(|e| {
                seen.push(e);
                Flow::Continue(())
            })
            .unwrap();
        assert_eq!(visited, 3);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_for_each_until_break_is_success() {
        let mut seen = Vec::new();
        let result = (1..=10).into_cursor().for_each_until(|e| {
            seen.push(e);
            if e == 4 { Flow::Break(()) } else { Flow::Continue(()) }
        });
        assert!(result.is_ok());
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_for_each_until_ignore_keeps_going() {
        let mut seen = Vec::new();
        let visited = (1..=4)
            .into_cursor()
            .visit(|e| {
                if e % 2 == 0 {
                    return Flow::Ignore;
                }
                seen.push(e);
                Flow::Continue(())
            })
            .unwrap();
        assert_eq!(visited, 4);
        assert_eq!(seen, vec![1, 3]);
    }

    #[test]
    fn test_for_each_until_propagates_failure() {
        let mut seen = Vec::new();
        let error = (1..=10)
            .into_cursor()
            .fallible()
            .for_each_until(|e| {
                if e == 3 {
                    return Flow::Fail(SeqError::msg("boom"));
                }
                seen.push(e);
                Flow::Continue(())
            })
            .unwrap_err();
        assert_eq!(error, "boom");
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_visit_source_failure() {
        let cursor = try_from_iter(vec![Ok(1), Err("io")]);
        assert_eq!(visit(cursor, |_| Flow::Continue(())), Err("io"));
    }
}
